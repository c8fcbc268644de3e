//! cicfacts - System fact probes and resource helpers for CIC installations.
//!
//! cicfacts answers questions a configuration-management host asks about a
//! CIC (Customer Interaction Center) server: fact probes inspect the system
//! registry through an injected store interface, and resource helpers
//! validate the identifying parameters of managed resource kinds.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`facts`] - Fact registration, platform confinement, and probes
//! - [`resource`] - Resource parameter declarations and record translation
//! - [`store`] - Registry store abstraction with in-memory and Windows backends
//!
//! # Example
//!
//! ```
//! use cicfacts::facts::icws_license;
//! use cicfacts::store::{MemoryStore, RegistryValue};
//!
//! // Probe a store fixture for the ICWS SDK license feature
//! let store = MemoryStore::new()
//!     .with_value(
//!         r"SOFTWARE\Wow6432Node\Interactive Intelligence\EIC\Directory Services\Root",
//!         "SITE",
//!         RegistryValue::String("HQ".into()),
//!     )
//!     .with_key(
//!         r"SOFTWARE\Wow6432Node\Interactive Intelligence\EIC\Directory Services\Root\HQ\Production\Licenses\I3_FEATURE_ICWS_SDK",
//!     );
//! assert!(icws_license::probe(&store));
//! ```
//!
//! For resolving facts against the live system, see the `cicfacts` binary.

pub mod cli;
pub mod error;
pub mod facts;
pub mod resource;
pub mod store;

pub use error::{CicFactsError, Result};
