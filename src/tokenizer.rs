//! Address text tokenization.
//!
//! Splits address text into exactly 8 group strings, resolving at most one
//! `::` elision. All legality rules live here; turning the group strings
//! into numeric values is [`crate::group::Group::parse`]'s job.

use crate::error::ParseError;

/// Split address text into exactly 8 group strings.
///
/// At most one elision is resolved: the empty interior part becomes `"0"`
/// and enough extra `"0"` groups are spliced in to reach 8. A leading or
/// trailing `::` leaves an empty edge part behind, which also normalizes to
/// `"0"`, so the output groups are always non-empty.
///
/// # Example
///
/// ```
/// use v6calc::tokenize;
///
/// let groups = tokenize("a::").unwrap();
/// assert_eq!(groups, ["a", "0", "0", "0", "0", "0", "0", "0"]);
/// ```
pub fn tokenize(text: &str) -> Result<[String; 8], ParseError> {
    let mut parts: Vec<String> = text.split(':').map(str::to_string).collect();
    if parts.len() > 8 {
        return Err(ParseError::TooManyGroups { found: parts.len() });
    }

    match find_elision(&parts)? {
        Some(elision) => {
            parts[elision] = "0".to_string();
            let missing = 8 - parts.len();
            for _ in 0..missing {
                parts.insert(elision, "0".to_string());
            }
        }
        None => {
            if parts.len() != 8 {
                return Err(ParseError::TooFewGroups { found: parts.len() });
            }
        }
    }

    for part in &mut parts {
        if part.is_empty() {
            // leftover edge part from a leading/trailing `::`
            *part = "0".to_string();
        } else if part.len() > 4 {
            tracing::debug!(group = %part, "group longer than 4 hex digits, keeping low-order bits");
        }
    }

    Ok(parts.try_into().expect("tokenizer always yields 8 groups"))
}

/// Locate the elision point, enforcing the empty-group legality rules.
fn find_elision(parts: &[String]) -> Result<Option<usize>, ParseError> {
    let last = parts.len() - 1;
    let mut elision = None;
    for (i, part) in parts.iter().enumerate().take(last).skip(1) {
        if part.is_empty() {
            if elision.is_some() {
                return Err(ParseError::MultipleElisions { position: i });
            }
            elision = Some(i);
        }
    }
    // An empty edge part is only the half of a `::` at the very start/end.
    if parts[0].is_empty() && elision != Some(1) {
        return Err(ParseError::IllegalLeadingEmpty);
    }
    if parts[last].is_empty() && elision != Some(last - 1) {
        return Err(ParseError::IllegalTrailingEmpty);
    }
    Ok(elision)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(text: &str) -> [String; 8] {
        tokenize(text).unwrap()
    }

    #[test]
    fn test_trailing_elision() {
        assert_eq!(groups("a::"), ["a", "0", "0", "0", "0", "0", "0", "0"]);
    }

    #[test]
    fn test_leading_elision() {
        assert_eq!(groups("::1"), ["0", "0", "0", "0", "0", "0", "0", "1"]);
    }

    #[test]
    fn test_interior_elision() {
        assert_eq!(groups("a::1"), ["a", "0", "0", "0", "0", "0", "0", "1"]);
        assert_eq!(
            groups("aa::1:0:0:0:1"),
            ["aa", "0", "0", "1", "0", "0", "0", "1"]
        );
    }

    #[test]
    fn test_double_colon_alone() {
        assert_eq!(groups("::"), ["0", "0", "0", "0", "0", "0", "0", "0"]);
    }

    #[test]
    fn test_full_address_no_elision() {
        assert_eq!(
            groups("1:2:3:4:5:6:7:8"),
            ["1", "2", "3", "4", "5", "6", "7", "8"]
        );
    }

    #[test]
    fn test_elision_with_nothing_missing() {
        // 8 parts where the elision stands for exactly one zero group
        assert_eq!(
            groups("1:2:3:4::6:7:8"),
            ["1", "2", "3", "4", "0", "6", "7", "8"]
        );
    }

    #[test]
    fn test_too_many_groups() {
        assert_eq!(
            tokenize("1:2:3:4:5:6:7:8:9").unwrap_err(),
            ParseError::TooManyGroups { found: 9 }
        );
    }

    #[test]
    fn test_too_few_groups() {
        assert_eq!(
            tokenize("1:2:3:4:5:6:7").unwrap_err(),
            ParseError::TooFewGroups { found: 7 }
        );
    }

    #[test]
    fn test_multiple_elisions() {
        assert_eq!(
            tokenize("1::2::3").unwrap_err(),
            ParseError::MultipleElisions { position: 3 }
        );
        assert!(tokenize("1:::2").is_err());
    }

    #[test]
    fn test_illegal_edge_empties() {
        assert_eq!(
            tokenize(":1:2:3:4:5:6:7").unwrap_err(),
            ParseError::IllegalLeadingEmpty
        );
        assert_eq!(
            tokenize("1:2:3:4:5:6:7:").unwrap_err(),
            ParseError::IllegalTrailingEmpty
        );
        assert_eq!(tokenize(":").unwrap_err(), ParseError::IllegalLeadingEmpty);
    }
}
