//! # Domain Types
//!
//! Data returned to callers of the summation parser.

use serde::{Deserialize, Serialize};

use crate::delimiter::DelimiterSet;

// =============================================================================
// Sum Report
// =============================================================================

/// Outcome of a successful scan.
///
/// ## Serialization
/// ```json
/// {
///   "sum": 6,
///   "delimiters": [",", "\n", ";"],
///   "customDelimiter": ";",
///   "ignored": ["x"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SumReport {
    /// Sum of every numeric token.
    pub sum: i64,

    /// Delimiters that were active for this input.
    pub delimiters: DelimiterSet,

    /// Delimiter declared by a `//<char>\n` header, if one was recognized.
    pub custom_delimiter: Option<char>,

    /// Trimmed, non-empty tokens that were not integers, in encounter order.
    pub ignored: Vec<String>,
}

impl SumReport {
    /// Report for input with nothing to scan.
    pub fn empty() -> Self {
        SumReport {
            sum: 0,
            delimiters: DelimiterSet::default(),
            custom_delimiter: None,
            ignored: Vec::new(),
        }
    }

    /// True when at least one token was skipped as non-numeric.
    pub fn has_ignored(&self) -> bool {
        !self.ignored.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = SumReport::empty();
        assert_eq!(report.sum, 0);
        assert_eq!(report.delimiters, DelimiterSet::default());
        assert!(report.custom_delimiter.is_none());
        assert!(!report.has_ignored());
    }

    #[test]
    fn test_serialized_field_names() {
        let mut delimiters = DelimiterSet::default();
        delimiters.insert(';');
        let report = SumReport {
            sum: 6,
            delimiters,
            custom_delimiter: Some(';'),
            ignored: vec!["x".to_string()],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["sum"], 6);
        assert_eq!(value["customDelimiter"], ";");
        assert_eq!(value["ignored"][0], "x");
        assert_eq!(value["delimiters"].as_array().unwrap().len(), 3);
    }
}
