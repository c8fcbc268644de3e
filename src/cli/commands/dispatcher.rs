//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ResolveArgs};
use crate::error::Result;
use crate::store::RegistryStore;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation.
    /// A bare invocation resolves all facts, matching the host tool's
    /// default behavior.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(args.clone(), system_store());
                cmd.execute()
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute()
            }
            None => {
                let cmd =
                    super::resolve::ResolveCommand::new(ResolveArgs::default(), system_store());
                cmd.execute()
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// The store facts resolve against on this host.
#[cfg(windows)]
fn system_store() -> Box<dyn RegistryStore> {
    Box::new(crate::store::WindowsStore::new())
}

/// Non-Windows hosts have no registry; an empty store stands in. Every
/// registry-backed fact is confined to Windows and is skipped before it
/// would touch it.
#[cfg(not(windows))]
fn system_store() -> Box<dyn RegistryStore> {
    Box::new(crate::store::MemoryStore::new())
}
