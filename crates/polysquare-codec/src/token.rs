//! Textual token grammar.
//!
//! A token is two 1-based decimal indices joined by a hyphen. A message
//! is tokens joined by single spaces. No signs, no padding, no other
//! separators.

use polysquare_core::{Coord, MalformedReason};
use smallvec::SmallVec;

/// Token separator inside a message.
pub const TOKEN_SEPARATOR: char = ' ';

/// Field separator inside a token.
pub const FIELD_SEPARATOR: char = '-';

// ── Writing ─────────────────────────────────────────────────────

/// Append the token for `coord` to `out`, preceded by a separator unless
/// `out` is empty.
pub fn push_token(out: &mut String, coord: Coord) {
    if !out.is_empty() {
        out.push(TOKEN_SEPARATOR);
    }
    let (row, col) = coord.one_based();
    out.push_str(&row.to_string());
    out.push(FIELD_SEPARATOR);
    out.push_str(&col.to_string());
}

// ── Reading ─────────────────────────────────────────────────────

/// Split a message into tokens. An empty message has no tokens.
///
/// Consecutive, leading, or trailing separators yield empty tokens,
/// which [`parse_token`] rejects.
pub fn split_message(message: &str) -> impl Iterator<Item = &str> {
    let mut tokens = message.split(TOKEN_SEPARATOR);
    if message.is_empty() {
        tokens.next();
    }
    tokens
}

/// Parse one token into a zero-based coordinate.
///
/// Returns `Ok(None)` for a token that is well-formed but cannot address
/// any cell: an index of zero, or one too large to represent. Bounds
/// against a particular table are checked by the caller.
pub fn parse_token(token: &str) -> Result<Option<Coord>, MalformedReason> {
    if token.is_empty() {
        return Err(MalformedReason::Empty);
    }
    let fields: SmallVec<[&str; 2]> = token.split(FIELD_SEPARATOR).collect();
    if fields.len() != 2 {
        return Err(MalformedReason::FieldCount {
            found: fields.len(),
        });
    }
    let row = parse_index(fields[0])?;
    let col = parse_index(fields[1])?;
    Ok(row.zip(col).map(|(row, col)| Coord::new(row, col)))
}

/// Parse a 1-based index field into a zero-based index.
///
/// `Ok(None)` means the digits are valid but name no cell (`0`, or an
/// overflow of `usize`).
fn parse_index(field: &str) -> Result<Option<usize>, MalformedReason> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedReason::NotDecimal);
    }
    Ok(field
        .parse::<usize>()
        .ok()
        .and_then(|one_based| one_based.checked_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_token_separates() {
        let mut out = String::new();
        push_token(&mut out, Coord::new(0, 0));
        push_token(&mut out, Coord::new(0, 1));
        push_token(&mut out, Coord::new(9, 10));
        assert_eq!(out, "1-1 1-2 10-11");
    }

    #[test]
    fn push_token_multi_digit_axes() {
        let mut out = String::new();
        push_token(&mut out, Coord::new(99, 1233));
        assert_eq!(out, "100-1234");
        assert_eq!(parse_token(&out), Ok(Some(Coord::new(99, 1233))));
    }

    #[test]
    fn split_empty_message_has_no_tokens() {
        assert_eq!(split_message("").count(), 0);
        assert_eq!(split_message("1-1").collect::<Vec<_>>(), vec!["1-1"]);
        assert_eq!(
            split_message("1-1  2-2").collect::<Vec<_>>(),
            vec!["1-1", "", "2-2"]
        );
    }

    #[test]
    fn parse_valid_tokens() {
        assert_eq!(parse_token("1-1"), Ok(Some(Coord::new(0, 0))));
        assert_eq!(parse_token("5-2"), Ok(Some(Coord::new(4, 1))));
        assert_eq!(parse_token("007-01"), Ok(Some(Coord::new(6, 0))));
    }

    #[test]
    fn zero_and_overflow_address_nothing() {
        assert_eq!(parse_token("0-1"), Ok(None));
        assert_eq!(parse_token("1-0"), Ok(None));
        assert_eq!(parse_token("99999999999999999999999-1"), Ok(None));
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(
            parse_token("bad"),
            Err(MalformedReason::FieldCount { found: 1 })
        );
        assert_eq!(
            parse_token("1-2-3"),
            Err(MalformedReason::FieldCount { found: 3 })
        );
    }

    #[test]
    fn non_decimal_fields() {
        for t in ["+1-1", "1-+1", "a-1", "1-", "-1", "1.0-1", " 1-1", "١-1"] {
            assert!(parse_token(t).is_err(), "{t:?} should be rejected");
        }
        assert_eq!(parse_token("+1-1"), Err(MalformedReason::NotDecimal));
        assert_eq!(parse_token("-1"), Err(MalformedReason::NotDecimal));
    }

    #[test]
    fn empty_token() {
        assert_eq!(parse_token(""), Err(MalformedReason::Empty));
    }
}
