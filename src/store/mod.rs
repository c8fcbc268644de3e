//! Registry store abstraction.
//!
//! Fact probes never touch the system registry directly. They go through the
//! [`RegistryStore`] trait, so the same probe logic runs against the live
//! Windows registry in production and against an in-memory fixture in tests.
//!
//! # Backends
//!
//! - [`MemoryStore`] - in-memory fake, available everywhere
//! - [`WindowsStore`] - live HKEY_LOCAL_MACHINE hive, Windows only
//!
//! # Failure model
//!
//! Store operations return explicit [`StoreError`] values rather than
//! signaling absence through panics or sentinel data. The [`key_exists`] and
//! [`read_first_value`] helpers layer the probe-friendly view on top: any
//! error becomes a negative result.

pub mod memory;
pub mod path;
pub mod value;
#[cfg(windows)]
pub mod windows;

pub use memory::MemoryStore;
pub use path::RegistryPath;
pub use value::RegistryValue;
#[cfg(windows)]
pub use self::windows::WindowsStore;

use thiserror::Error;

/// Errors reported by registry store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key path does not exist in the store.
    #[error("Registry path not found: {path}")]
    PathNotFound { path: String },

    /// The key exists but has no value with the given name.
    #[error("Value '{name}' not found at {path}")]
    ValueNotFound { path: String, name: String },

    /// The caller lacks permission to read the key.
    #[error("Access denied at {path}")]
    AccessDenied { path: String },

    /// The value exists but holds data this crate does not model.
    #[error("Value '{name}' at {path} has an unsupported type")]
    UnsupportedType { path: String, name: String },

    /// Any other backend-level failure.
    #[error("Registry backend error at {path}: {message}")]
    Backend { path: String, message: String },
}

/// Options for opening a key.
///
/// Read access is implied; the only tunable is the compatibility view flag,
/// which selects the 64-bit registry view on WOW64 systems. The flag must be
/// passed identically to every open in a multi-step lookup, otherwise the
/// steps can observe different views of the same hive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessOptions {
    wow64_64: bool,
}

impl AccessOptions {
    /// Plain read access in the default registry view.
    pub fn read() -> Self {
        Self::default()
    }

    /// Request the 64-bit registry view.
    pub fn with_wow64_64(mut self) -> Self {
        self.wow64_64 = true;
        self
    }

    /// Whether the 64-bit view was requested.
    pub fn wow64_64(&self) -> bool {
        self.wow64_64
    }
}

/// An open registry key.
///
/// The underlying handle is released when the value is dropped, on every
/// exit path.
pub trait RegistryKey {
    /// Read a named value from this key.
    fn value(&self, name: &str) -> Result<RegistryValue, StoreError>;
}

/// A readable hierarchical key/value store.
pub trait RegistryStore {
    /// Open the key at `path` for reading.
    fn open(
        &self,
        path: &RegistryPath,
        options: AccessOptions,
    ) -> Result<Box<dyn RegistryKey>, StoreError>;
}

/// Check whether a key exists, treating every failure as absence.
pub fn key_exists(store: &dyn RegistryStore, path: &RegistryPath, options: AccessOptions) -> bool {
    store.open(path, options).is_ok()
}

/// Read the first candidate string of a named value.
///
/// Returns `None` if the key cannot be opened, the value is absent, or the
/// value's data has no string representation. Multi-string values yield
/// their first element in store order.
pub fn read_first_value(
    store: &dyn RegistryStore,
    path: &RegistryPath,
    name: &str,
    options: AccessOptions,
) -> Option<String> {
    let key = store.open(path, options).ok()?;
    let value = key.value(name).ok()?;
    value.first_string().map(str::to_string)
}
