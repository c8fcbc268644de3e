//! List command implementation.
//!
//! The `cicfacts list` command lists registered facts and the platform
//! family each is confined to, without resolving any of them.

use serde_json::json;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::facts::FactRegistry;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let registry = FactRegistry::with_builtins();

        if self.args.json {
            let entries: Vec<_> = registry
                .iter()
                .map(|fact| {
                    json!({
                        "name": fact.name(),
                        "confine": fact.confine(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for fact in registry.iter() {
                match fact.confine() {
                    Some(family) => println!("{}  ({family})", fact.name()),
                    None => println!("{}", fact.name()),
                }
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_succeeds() {
        let cmd = ListCommand::new(ListArgs::default());
        let result = cmd.execute().unwrap();
        assert!(result.success);
    }

    #[test]
    fn list_json_succeeds() {
        let cmd = ListCommand::new(ListArgs { json: true });
        let result = cmd.execute().unwrap();
        assert_eq!(result.exit_code, 0);
    }
}
