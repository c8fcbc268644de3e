//! Platform family tags for fact confinement.

use std::fmt;

use serde::Serialize;

/// Operating system family a fact can be confined to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    /// The Windows family.
    Windows,
    /// Everything unix-ish (Linux, macOS, BSDs).
    Unix,
}

impl OsFamily {
    /// The family of the host this process is running on.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("windows"),
            Self::Unix => f.write_str("unix"),
        }
    }
}
