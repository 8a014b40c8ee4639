//! # Delimiter Module
//!
//! Delimiter sets and the optional custom delimiter header.
//!
//! ## Input Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   "//;\n1;2\n3"                                                         │
//! │    ├──┤├─────┤                                                          │
//! │    │   └── body: split on { ',', '\n', ';' }                            │
//! │    └────── header: "//" + delimiter char + "\n"                          │
//! │                                                                         │
//! │   "1,2\n3"        no header: split on { ',', '\n' }                     │
//! │   "//;"           no newline: not a header, whole string is the body    │
//! │   "//\n1,2"       empty definition: not a header, "//" is a token        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_DELIMITERS, HEADER_MARKER};

// =============================================================================
// Delimiter Set
// =============================================================================

/// The characters that separate number tokens.
///
/// Keeps insertion order so reports list the defaults first. Built fresh for
/// every call and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DelimiterSet(Vec<char>);

impl DelimiterSet {
    /// Adds a delimiter. Returns `false` if it was already present.
    ///
    /// ## Example
    /// ```rust
    /// use strcalc_core::DelimiterSet;
    ///
    /// let mut set = DelimiterSet::default();
    /// assert!(set.insert(';'));
    /// assert!(!set.insert(','));
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn insert(&mut self, delimiter: char) -> bool {
        if self.contains(delimiter) {
            return false;
        }
        self.0.push(delimiter);
        true
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Splits `text` on any delimiter in the set.
    ///
    /// Raw pieces are returned untrimmed; consecutive delimiters yield empty
    /// pieces.
    pub fn split<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(move |c: char| self.contains(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DelimiterSet {
    /// Comma and newline.
    fn default() -> Self {
        DelimiterSet(DEFAULT_DELIMITERS.to_vec())
    }
}

// =============================================================================
// Custom Delimiter Header
// =============================================================================

/// A recognized `//<char>\n` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomDelimiterHeader {
    delimiter: char,
}

impl CustomDelimiterHeader {
    /// Recognizes a header at the very start of `input`.
    ///
    /// ## Rules
    /// - `input` must start with `//`
    /// - A newline must follow somewhere; the text between the marker and the
    ///   first newline is the definition segment
    /// - The first character of the definition is the delimiter; anything
    ///   after it is dropped along with the header
    /// - An empty definition is not a header
    ///
    /// ## Returns
    /// The header and the remaining body, or `None` when the input should be
    /// parsed as-is.
    ///
    /// ## Example
    /// ```rust
    /// use strcalc_core::CustomDelimiterHeader;
    ///
    /// let (header, body) = CustomDelimiterHeader::parse("//;\n1;2").unwrap();
    /// assert_eq!(header.delimiter(), ';');
    /// assert_eq!(body, "1;2");
    ///
    /// assert!(CustomDelimiterHeader::parse("//;").is_none());
    /// assert!(CustomDelimiterHeader::parse("1,2").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<(Self, &str)> {
        let rest = input.strip_prefix(HEADER_MARKER)?;
        let (definition, body) = rest.split_once('\n')?;
        let delimiter = definition.chars().next()?;

        Some((CustomDelimiterHeader { delimiter }, body))
    }

    #[inline]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
