//! 16-bit address groups.
//!
//! A group is one colon-separated field of an address: textually 1-4 hex
//! digits, numerically a 16-bit value.

use std::fmt;

use crate::error::ParseError;

/// One 16-bit field of a 128-bit address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Group(u16);

impl Group {
    /// Build a group from a character stream, keeping only hex digits.
    ///
    /// Non-hex and non-ASCII characters are discarded. Each accepted digit
    /// shifts the accumulated value left by one nibble, so only the last
    /// 4 hex digits of the stream survive.
    ///
    /// # Example
    ///
    /// ```
    /// use v6calc::Group;
    ///
    /// assert_eq!(Group::from_chars("869".chars()).value(), 0x869);
    /// assert_eq!(Group::from_chars("deadbeef".chars()).value(), 0xbeef);
    /// ```
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let value = chars.into_iter().fold(0u16, |acc, c| match c.to_digit(16) {
            Some(nibble) => (acc << 4) | nibble as u16,
            None => acc,
        });
        Group(value)
    }

    /// Parse a group from its text form, rejecting non-hex characters.
    ///
    /// Input longer than 4 digits accumulates the same way as
    /// [`Group::from_chars`]: only the low-order 16 bits survive.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut value = 0u16;
        for c in text.chars() {
            let nibble = c.to_digit(16).ok_or_else(|| ParseError::InvalidHexDigit {
                group: text.to_string(),
                digit: c,
            })?;
            value = (value << 4) | nibble as u16;
        }
        Ok(Group(value))
    }

    /// The 16-bit value of this group.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// Render as exactly 4 lowercase hex digits.
    pub fn padded(&self) -> String {
        format!("{:04x}", self.0)
    }
}

impl From<u16> for Group {
    fn from(value: u16) -> Self {
        Group(value)
    }
}

/// Lowercase hex with no leading zeros; the zero group renders as `"0"`.
impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chars_discards_non_hex() {
        // Non-ASCII and non-hex characters are skipped entirely
        assert_eq!(Group::from_chars("869ąłś".chars()).value(), 0x869);
        assert_eq!(Group::from_chars("a9x".chars()).value(), 0xa9);
        assert_eq!(Group::from_chars("zz".chars()).value(), 0);
    }

    #[test]
    fn test_from_chars_keeps_last_four_digits() {
        assert_eq!(Group::from_chars("12345".chars()).value(), 0x2345);
        assert_eq!(Group::from_chars("deadbeef".chars()).value(), 0xbeef);
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(Group::parse("0").unwrap().value(), 0);
        assert_eq!(Group::parse("ffff").unwrap().value(), 0xffff);
        assert_eq!(Group::parse("A9").unwrap().value(), 0xa9);
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let err = Group::parse("12g4").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidHexDigit {
                group: "12g4".to_string(),
                digit: 'g',
            }
        );
    }

    #[test]
    fn test_parse_truncates_overlong() {
        // Only the low-order 16 bits survive
        assert_eq!(Group::parse("12345").unwrap().value(), 0x2345);
        assert_eq!(Group::parse("00000001").unwrap().value(), 1);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Group::from(0u16).to_string(), "0");
        assert_eq!(Group::from(0xau16).to_string(), "a");
        assert_eq!(Group::from(0xau16).padded(), "000a");
        assert_eq!(Group::from(0xffffu16).padded(), "ffff");
    }
}
