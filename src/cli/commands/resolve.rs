//! Resolve command implementation.
//!
//! The `cicfacts resolve` command resolves facts against the local system
//! and prints them, one `name => value` line per fact, or as a JSON object
//! with `--json`.

use std::collections::BTreeMap;

use crate::cli::args::ResolveArgs;
use crate::error::{CicFactsError, Result};
use crate::facts::{FactRegistry, FactValue, OsFamily};
use crate::store::RegistryStore;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    args: ResolveArgs,
    store: Box<dyn RegistryStore>,
}

impl ResolveCommand {
    /// Create a new resolve command over the given store.
    pub fn new(args: ResolveArgs, store: Box<dyn RegistryStore>) -> Self {
        Self { args, store }
    }

    /// Resolve a single named fact.
    ///
    /// An unknown name is an error. A known fact confined away from this
    /// host resolves to nothing: the fact simply is not evaluated here.
    fn resolve_one(&self, registry: &FactRegistry, name: &str) -> Result<CommandResult> {
        if registry.get(name).is_none() {
            return Err(CicFactsError::UnknownFact {
                name: name.to_string(),
            });
        }

        match registry.resolve(name, self.store.as_ref(), OsFamily::current()) {
            Some(value) if self.args.json => println!("{}", serde_json::to_string(&value)?),
            Some(value) => println!("{value}"),
            None => tracing::debug!(fact = name, "fact not evaluated on this platform"),
        }
        Ok(CommandResult::success())
    }

    /// Resolve every fact eligible on this host.
    fn resolve_all(&self, registry: &FactRegistry) -> Result<CommandResult> {
        let resolved: BTreeMap<String, FactValue> =
            registry.resolve_all(self.store.as_ref(), OsFamily::current());

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        } else {
            for (name, value) in &resolved {
                println!("{name} => {value}");
            }
        }
        Ok(CommandResult::success())
    }
}

impl Command for ResolveCommand {
    fn execute(&self) -> Result<CommandResult> {
        let registry = FactRegistry::with_builtins();
        match &self.args.name {
            Some(name) => self.resolve_one(&registry, name),
            None => self.resolve_all(&registry),
        }
    }
}
