//! # Calculator Module
//!
//! The summation parser: `add` and its report-returning sibling `evaluate`.
//!
//! ## Scan Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  input ──► empty? ──yes──► Ok(0)                                        │
//! │              │                                                          │
//! │              no                                                         │
//! │              ▼                                                          │
//! │  CustomDelimiterHeader::parse ──► DelimiterSet { ',', '\n', [custom] }  │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  split ──► trim ──► skip empty ──► parse i64                            │
//! │                                      │                                  │
//! │                  ┌───────────────────┼────────────────────┐             │
//! │                  ▼                   ▼                    ▼             │
//! │            not a number          negative            non-negative       │
//! │            (ignored, warn)    (collect + sum)           (sum)           │
//! │                                                                         │
//! │  any negatives? ──yes──► Err(NegativeNumbersNotAllowed { values })      │
//! │        │                                                                │
//! │        no ──► Ok(sum)                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole input is always scanned, so every negative is reported at once.

use tracing::{debug, warn};

use crate::delimiter::{CustomDelimiterHeader, DelimiterSet};
use crate::error::{CalculatorError, CoreResult};
use crate::types::SumReport;

// =============================================================================
// Free Functions
// =============================================================================

/// Sums the numbers in a delimited string.
///
/// ## Supported Input
/// - Empty string returns 0
/// - Numbers separated by `,` or newline
/// - A leading `//<char>\n` header adds one more delimiter
/// - Whitespace around numbers is ignored
/// - Empty and non-numeric tokens are skipped
///
/// ## Errors
/// [`CalculatorError::NegativeNumbersNotAllowed`] if any negative number is
/// present.
///
/// ## Example
/// ```rust
/// use strcalc_core::add;
///
/// assert_eq!(add("1,2,3").unwrap(), 6);
/// assert_eq!(add("//|\n1|2|3").unwrap(), 6);
/// assert_eq!(
///     add("-1").unwrap_err().to_string(),
///     "Negative numbers not allowed: -1"
/// );
/// ```
pub fn add(input: &str) -> CoreResult<i64> {
    evaluate(input).map(|report| report.sum)
}

/// Scans `input` like [`add`] and returns the full [`SumReport`].
///
/// ## Example
/// ```rust
/// use strcalc_core::evaluate;
///
/// let report = evaluate("//;\n1;x;2").unwrap();
/// assert_eq!(report.sum, 3);
/// assert_eq!(report.custom_delimiter, Some(';'));
/// assert_eq!(report.ignored, vec!["x".to_string()]);
/// ```
pub fn evaluate(input: &str) -> CoreResult<SumReport> {
    if input.is_empty() {
        return Ok(SumReport::empty());
    }

    let mut delimiters = DelimiterSet::default();
    let (custom_delimiter, body) = match CustomDelimiterHeader::parse(input) {
        Some((header, body)) => {
            debug!(delimiter = ?header.delimiter(), "Custom delimiter header recognized");
            delimiters.insert(header.delimiter());
            (Some(header.delimiter()), body)
        }
        None => (None, input),
    };

    let mut sum: i64 = 0;
    let mut negatives = Vec::new();
    let mut ignored = Vec::new();

    for token in delimiters
        .split(body)
        .map(str::trim)
        .filter(|token| !token.is_empty())
    {
        match token.parse::<i64>() {
            Ok(value) => {
                if value < 0 {
                    negatives.push(value);
                }
                sum = sum.saturating_add(value);
            }
            Err(_) => {
                warn!(token, "Token is not a valid number and will be ignored");
                ignored.push(token.to_string());
            }
        }
    }

    if !negatives.is_empty() {
        return Err(CalculatorError::NegativeNumbersNotAllowed { values: negatives });
    }

    Ok(SumReport {
        sum,
        delimiters,
        custom_delimiter,
        ignored,
    })
}

// =============================================================================
// Service Object
// =============================================================================

/// Zero-sized calculator for callers that hold a calculator value.
///
/// Carries no state; every call is independent and the type is `Copy`,
/// `Send` and `Sync`.
///
/// ## Example
/// ```rust
/// use strcalc_core::StringCalculator;
///
/// let calculator = StringCalculator::new();
/// assert_eq!(calculator.add("1,5").unwrap(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCalculator;

impl StringCalculator {
    #[inline]
    pub const fn new() -> Self {
        StringCalculator
    }

    /// See [`add`].
    pub fn add(&self, numbers: &str) -> CoreResult<i64> {
        add(numbers)
    }

    /// See [`evaluate`].
    pub fn evaluate(&self, numbers: &str) -> CoreResult<SumReport> {
        evaluate(numbers)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn negatives_message(input: &str) -> String {
        add(input).unwrap_err().to_string()
    }

    #[test]
    fn test_empty_string_returns_zero() {
        assert_eq!(add("").unwrap(), 0);
    }

    #[test]
    fn test_single_number() {
        assert_eq!(add("1").unwrap(), 1);
        assert_eq!(add("5").unwrap(), 5);
    }

    #[test]
    fn test_two_numbers() {
        assert_eq!(add("1,5").unwrap(), 6);
    }

    #[test]
    fn test_many_numbers() {
        assert_eq!(add("1,2,3").unwrap(), 6);
        assert_eq!(add("10,20,30,40").unwrap(), 100);
    }

    #[test]
    fn test_newline_delimiter() {
        assert_eq!(add("1\n2,3").unwrap(), 6);
        assert_eq!(add("1\n2\n3").unwrap(), 6);
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(add("//;\n1;2").unwrap(), 3);
        assert_eq!(add("//|\n1|2|3").unwrap(), 6);
        assert_eq!(add("//$\n1$2$3").unwrap(), 6);
    }

    #[test]
    fn test_custom_delimiter_keeps_defaults() {
        assert_eq!(add("//;\n1;2\n3").unwrap(), 6);
        assert_eq!(add("//;\n1;2,3").unwrap(), 6);
    }

    #[test]
    fn test_single_negative() {
        assert_eq!(negatives_message("-1"), "Negative numbers not allowed: -1");
    }

    #[test]
    fn test_all_negatives_reported_in_order() {
        assert_eq!(
            negatives_message("1,-2,3,-4"),
            "Negative numbers not allowed: -2, -4"
        );

        let err = add("-5\n-1,-5").unwrap_err();
        assert_eq!(err.negatives(), &[-5, -1, -5]);
    }

    #[test]
    fn test_negatives_with_custom_delimiter() {
        let err = add("//;\n1;-2;3").unwrap_err();
        assert_eq!(
            err,
            CalculatorError::NegativeNumbersNotAllowed { values: vec![-2] }
        );
    }

    #[test]
    fn test_whitespace_around_tokens() {
        assert_eq!(add(" 1 , 2 \n 3 ").unwrap(), 6);
        assert_eq!(add("\t4\t,\t5").unwrap(), 9);
    }

    #[test]
    fn test_empty_tokens_skipped() {
        assert_eq!(add("1,,2").unwrap(), 3);
        assert_eq!(add(",\n,").unwrap(), 0);
        assert_eq!(add("   ").unwrap(), 0);
    }

    #[test]
    fn test_non_numeric_tokens_ignored() {
        let report = evaluate("1,x,2, y z ").unwrap();
        assert_eq!(report.sum, 3);
        assert_eq!(report.ignored, vec!["x".to_string(), "y z".to_string()]);
        assert!(report.has_ignored());
    }

    #[test]
    fn test_fractional_and_overflowing_tokens_ignored() {
        let report = evaluate("1.5,2,99999999999999999999").unwrap();
        assert_eq!(report.sum, 2);
        assert_eq!(report.ignored.len(), 2);
    }

    #[test]
    fn test_explicit_plus_sign() {
        assert_eq!(add("+3,4").unwrap(), 7);
    }

    #[test]
    fn test_header_without_newline_uses_defaults() {
        let report = evaluate("//;").unwrap();
        assert_eq!(report.sum, 0);
        assert!(report.custom_delimiter.is_none());
        assert_eq!(report.ignored, vec!["//;".to_string()]);

        // "1;2" is one non-numeric token without the header
        assert_eq!(add("//;1;2").unwrap(), 0);
    }

    #[test]
    fn test_header_with_empty_definition_is_a_token() {
        let report = evaluate("//\n1,2").unwrap();
        assert_eq!(report.sum, 3);
        assert!(report.custom_delimiter.is_none());
        assert_eq!(report.ignored, vec!["//".to_string()]);
    }

    #[test]
    fn test_custom_delimiter_can_be_a_default() {
        let report = evaluate("//,\n1,2").unwrap();
        assert_eq!(report.sum, 3);
        assert_eq!(report.custom_delimiter, Some(','));
        assert_eq!(report.delimiters.len(), 2);
    }

    #[test]
    fn test_sum_saturates() {
        let input = format!("{},1", i64::MAX);
        assert_eq!(add(&input).unwrap(), i64::MAX);
    }

    #[test]
    fn test_report_lists_delimiters() {
        let report = evaluate("//$\n1$2").unwrap();
        assert_eq!(report.delimiters.iter().collect::<Vec<_>>(), vec![',', '\n', '$']);
    }

    #[test]
    fn test_idempotent() {
        let calculator = StringCalculator::new();
        assert_eq!(calculator.add("1\n2,3"), calculator.add("1\n2,3"));
        assert_eq!(calculator.add("1,-2,-3"), calculator.add("1,-2,-3"));
        assert_eq!(calculator.evaluate("//;\n1;a"), calculator.evaluate("//;\n1;a"));
    }

    #[test]
    fn test_concurrent_callers() {
        let calculator = StringCalculator::default();
        let inputs = ["1,2,3", "//;\n4;5", "-1,2", ""];

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let input = inputs[i % inputs.len()];
                    scope.spawn(move || (input, calculator.add(input)))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (input, result) in results {
            assert_eq!(result, add(input));
        }
    }
}
