//! Raw persisted records.

use std::collections::HashMap;

/// A raw row from the backing store, as columns of string data.
///
/// Used when reconciling actual state: the framework hands the resource a
/// persisted record and asks it to translate columns back into parameter
/// values.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    columns: HashMap<String, String>,
}

impl RawRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column's data.
    pub fn with_column(mut self, name: &str, data: &str) -> Self {
        self.columns.insert(name.to_string(), data.to_string());
        self
    }

    /// Read a column's data, if the column is present.
    pub fn column_data(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_data_returns_set_value() {
        let record = RawRecord::new().with_column("name", "survey_1");
        assert_eq!(record.column_data("name"), Some("survey_1"));
    }

    #[test]
    fn column_data_none_for_missing_column() {
        let record = RawRecord::new();
        assert!(record.column_data("name").is_none());
    }

    #[test]
    fn later_column_overwrites_earlier() {
        let record = RawRecord::new()
            .with_column("name", "old")
            .with_column("name", "new");
        assert_eq!(record.column_data("name"), Some("new"));
    }
}
