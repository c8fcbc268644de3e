//! Fact registration and platform-filtered resolution.

use std::collections::BTreeMap;

use super::icws_license::IcwsLicenseFact;
use super::platform::OsFamily;
use super::types::{Fact, FactValue};
use crate::store::RegistryStore;

/// Holds registered facts and resolves them against a store.
///
/// Resolution applies each fact's platform confinement: a fact confined to
/// a family other than `host` is not evaluated at all, so its probe never
/// touches the store.
pub struct FactRegistry {
    facts: Vec<Box<dyn Fact>>,
}

impl FactRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { facts: Vec::new() }
    }

    /// Create a registry with every built-in fact registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(IcwsLicenseFact));
        registry
    }

    /// Register a fact.
    pub fn register(&mut self, fact: Box<dyn Fact>) {
        self.facts.push(fact);
    }

    /// Look up a registered fact by name.
    pub fn get(&self, name: &str) -> Option<&dyn Fact> {
        self.facts
            .iter()
            .find(|fact| fact.name() == name)
            .map(|fact| fact.as_ref())
    }

    /// Iterate over registered facts in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Fact> {
        self.facts.iter().map(|fact| fact.as_ref())
    }

    /// Resolve every fact eligible on `host`, in deterministic name order.
    pub fn resolve_all(
        &self,
        store: &dyn RegistryStore,
        host: OsFamily,
    ) -> BTreeMap<String, FactValue> {
        let mut resolved = BTreeMap::new();
        for fact in self.iter() {
            if !eligible(fact, host) {
                tracing::debug!(fact = fact.name(), host = %host, "skipping confined fact");
                continue;
            }
            resolved.insert(fact.name().to_string(), fact.resolve(store));
        }
        resolved
    }

    /// Resolve a single fact by name.
    ///
    /// Returns `None` if the fact is unknown or confined away from `host`.
    pub fn resolve(
        &self,
        name: &str,
        store: &dyn RegistryStore,
        host: OsFamily,
    ) -> Option<FactValue> {
        let fact = self.get(name)?;
        if !eligible(fact, host) {
            tracing::debug!(fact = name, host = %host, "fact confined away from host");
            return None;
        }
        Some(fact.resolve(store))
    }
}

impl Default for FactRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Whether a fact's confinement matches the host family.
fn eligible(fact: &dyn Fact, host: OsFamily) -> bool {
    fact.confine().is_none_or(|family| family == host)
}
