//! Error types for v6calc.

use thiserror::Error;

/// Main error type for v6calc operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Malformed address or prefix text
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Prefix mask outside the valid range
    #[error("Invalid mask: {mask} (must be 0..=128)")]
    InvalidMask { mask: u32 },
}

/// Errors related to address text parsing.
///
/// Running out of address space (increment/decrement at the extremes) is not
/// an error; those operations return `None` instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// More than 8 colon-separated groups
    #[error("too many groups: found {found}, expected at most 8")]
    TooManyGroups { found: usize },

    /// More than one `::` elision
    #[error("multiple elisions: second empty group at position {position}")]
    MultipleElisions { position: usize },

    /// Text starts with a single `:` rather than `::`
    #[error("illegal leading empty group")]
    IllegalLeadingEmpty,

    /// Text ends with a single `:` rather than `::`
    #[error("illegal trailing empty group")]
    IllegalTrailingEmpty,

    /// Fewer than 8 groups without an elision to fill the gap
    #[error("too few groups: found {found} with no elision")]
    TooFewGroups { found: usize },

    /// A group contains a character outside `[0-9a-fA-F]`
    #[error("invalid hex digit {digit:?} in group {group:?}")]
    InvalidHexDigit { group: String, digit: char },

    /// More than one `/` in a CIDR string
    #[error("too many '/' separators in prefix")]
    TooManySlashes,

    /// The mask part of a CIDR string is not a decimal number
    #[error("malformed mask {text:?}: not a decimal number")]
    MalformedMask { text: String },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
