//! Resource parameter declarations and record translation.
//!
//! The host framework manages custom resource kinds; this module declares
//! the identifying `name` parameter of the survey resource and the
//! translation from a raw persisted record back to the in-memory
//! identifier used when reconciling actual state.

pub mod name;
pub mod record;

pub use name::{munge, name_param, translate_to_resource, validate, ParamSpec};
pub use record::RawRecord;
