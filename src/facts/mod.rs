//! Fact registration, platform confinement, and probes.
//!
//! A fact is a single named value the host framework collects about a
//! managed system. Each fact declares the platform family it is confined
//! to; the resolution layer checks confinement before a probe runs, so
//! probe code can assume it only ever executes in a valid environment.

pub mod icws_license;
pub mod platform;
pub mod resolver;
pub mod types;

pub use icws_license::IcwsLicenseFact;
pub use platform::OsFamily;
pub use resolver::FactRegistry;
pub use types::{Fact, FactValue};
