//! Fact trait and value types.

use std::fmt;

use serde::Serialize;

use super::platform::OsFamily;
use crate::store::RegistryStore;

/// Trait for fact implementations.
pub trait Fact {
    /// The stable identifier this fact is registered under.
    fn name(&self) -> &str;

    /// Platform family this fact is confined to, if any.
    ///
    /// Confinement is evaluated by the resolution layer before the probe
    /// runs; `resolve` is never called on a non-matching host.
    fn confine(&self) -> Option<OsFamily> {
        None
    }

    /// Compute the fact's value against the given store.
    fn resolve(&self, store: &dyn RegistryStore) -> FactValue;
}

/// A resolved fact value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FactValue {
    /// A boolean fact.
    Bool(bool),

    /// A single string.
    String(String),

    /// An ordered list of strings.
    Strings(Vec<String>),

    /// An integer fact.
    Integer(i64),
}

impl FactValue {
    /// The boolean payload, if this is a boolean fact.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
            Self::Strings(items) => f.write_str(&items.join(",")),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_displays_bare() {
        assert_eq!(FactValue::Bool(true).to_string(), "true");
        assert_eq!(FactValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn strings_display_comma_joined() {
        let value = FactValue::Strings(vec!["a".into(), "b".into()]);
        assert_eq!(value.to_string(), "a,b");
    }

    #[test]
    fn as_bool_only_for_bool() {
        assert_eq!(FactValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FactValue::String("true".into()).as_bool(), None);
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&FactValue::Bool(true)).unwrap(), "true");
        assert_eq!(
            serde_json::to_string(&FactValue::String("HQ".into())).unwrap(),
            "\"HQ\""
        );
        assert_eq!(serde_json::to_string(&FactValue::Integer(7)).unwrap(), "7");
    }
}
