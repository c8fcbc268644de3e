//! The survey resource's `name` parameter.
//!
//! `name` is the resource's namevar: the parameter that uniquely identifies
//! an instance of the kind. Values are munged as generic strings and
//! validated against a conservative name pattern before use.

use regex::Regex;

use super::record::RawRecord;
use crate::error::{CicFactsError, Result};

/// Declarative description of a resource parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name as the framework sees it.
    pub name: &'static str,
    /// Whether this parameter is the resource's unique identifier.
    pub namevar: bool,
    /// Documentation shown by the framework.
    pub doc: &'static str,
}

/// The `name` parameter declaration for the survey resource.
pub fn name_param() -> ParamSpec {
    ParamSpec {
        name: "name",
        namevar: true,
        doc: "The survey's name. Uniquely identifies the resource.",
    }
}

/// Names start with a word character and continue with word characters,
/// dots, dashes, or interior spaces.
const NAME_PATTERN: &str = r"^[A-Za-z0-9_][A-Za-z0-9_.\- ]*$";

/// Normalize a raw value into its canonical string form.
pub fn munge(raw: &str) -> String {
    raw.trim().to_string()
}

/// Validate a munged name.
pub fn validate(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CicFactsError::InvalidName {
            value: value.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if let Ok(re) = Regex::new(NAME_PATTERN) {
        if !re.is_match(value) {
            return Err(CicFactsError::InvalidName {
                value: value.to_string(),
                reason: "contains characters outside the allowed name set".to_string(),
            });
        }
    }
    Ok(())
}

/// Translate a raw persisted record into the resource's identifier.
///
/// Reads the `name` column, munges it, and validates the result.
pub fn translate_to_resource(record: &RawRecord) -> Result<String> {
    let raw = record
        .column_data(name_param().name)
        .ok_or_else(|| CicFactsError::ColumnMissing {
            column: name_param().name.to_string(),
        })?;
    let value = munge(raw);
    validate(&value)?;
    Ok(value)
}
