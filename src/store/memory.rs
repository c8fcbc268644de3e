//! In-memory store backend.
//!
//! `MemoryStore` is the test double for the live registry. Fixtures are
//! built with the `with_*` methods and can be mutated between probes with
//! `remove_key` / `remove_value` to walk a scenario through its states.
//!
//! Key paths and value names compare case-insensitively, matching the
//! Windows registry. Keys exist only where explicitly inserted: adding
//! `SOFTWARE\A\B` does not create `SOFTWARE\A`.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{AccessOptions, RegistryKey, RegistryPath, RegistryStore, RegistryValue, StoreError};

/// In-memory fake registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Normalized key path -> normalized value name -> data.
    keys: BTreeMap<String, HashMap<String, RegistryValue>>,
    /// Normalized key paths that report access denied on open.
    denied: BTreeSet<String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key with no values.
    pub fn with_key(mut self, path: &str) -> Self {
        self.keys.entry(normalize(path)).or_default();
        self
    }

    /// Add a key (if absent) and set a named value on it.
    pub fn with_value(mut self, path: &str, name: &str, value: RegistryValue) -> Self {
        self.keys
            .entry(normalize(path))
            .or_default()
            .insert(normalize(name), value);
        self
    }

    /// Mark a key as unreadable: opening it reports access denied.
    pub fn with_denied(mut self, path: &str) -> Self {
        self.denied.insert(normalize(path));
        self
    }

    /// Remove a key and its entire subtree.
    pub fn remove_key(&mut self, path: &str) {
        let norm = normalize(path);
        let prefix = format!("{norm}\\");
        self.keys
            .retain(|key, _| key != &norm && !key.starts_with(&prefix));
    }

    /// Remove a named value from a key, leaving the key in place.
    pub fn remove_value(&mut self, path: &str, name: &str) {
        if let Some(values) = self.keys.get_mut(&normalize(path)) {
            values.remove(&normalize(name));
        }
    }
}

/// Case-insensitive comparison key for paths and value names.
fn normalize(raw: &str) -> String {
    raw.to_ascii_lowercase()
}

impl RegistryStore for MemoryStore {
    fn open(
        &self,
        path: &RegistryPath,
        _options: AccessOptions,
    ) -> Result<Box<dyn RegistryKey>, StoreError> {
        let norm = normalize(path.as_str());
        if self.denied.contains(&norm) {
            return Err(StoreError::AccessDenied {
                path: path.as_str().to_string(),
            });
        }
        match self.keys.get(&norm) {
            Some(values) => Ok(Box::new(MemoryKey {
                path: path.as_str().to_string(),
                values: values.clone(),
            })),
            None => Err(StoreError::PathNotFound {
                path: path.as_str().to_string(),
            }),
        }
    }
}

/// An open key in the in-memory store.
///
/// Holds a snapshot of the key's values, so later mutation of the store
/// does not leak into an already open handle.
struct MemoryKey {
    path: String,
    values: HashMap<String, RegistryValue>,
}

impl RegistryKey for MemoryKey {
    fn value(&self, name: &str) -> Result<RegistryValue, StoreError> {
        self.values
            .get(&normalize(name))
            .cloned()
            .ok_or_else(|| StoreError::ValueNotFound {
                path: self.path.clone(),
                name: name.to_string(),
            })
    }
}
