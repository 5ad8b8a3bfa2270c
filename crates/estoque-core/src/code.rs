//! # Product Code Generator
//!
//! Codes are derived from the number of rows already in the store:
//!
//! ```text
//!   rows in produtos    next code
//!   ────────────────    ─────────
//!          0            P00001
//!          1            P00002
//!        41             P00042
//!     99999             P100000   (width grows, never truncates)
//! ```
//!
//! There is no collision check. If rows are removed out of band the count
//! goes backwards and a generated code can already exist; the insert then
//! fails on the primary key.

use crate::{CODE_DIGITS, CODE_PREFIX};

/// Returns the code for the next product given the current row count.
///
/// ## Example
/// ```rust
/// use estoque_core::code::next_product_code;
///
/// assert_eq!(next_product_code(0), "P00001");
/// assert_eq!(next_product_code(9), "P00010");
/// ```
pub fn next_product_code(row_count: u64) -> String {
    format!(
        "{}{:0width$}",
        CODE_PREFIX,
        row_count.saturating_add(1),
        width = CODE_DIGITS
    )
}

/// Returns true if `s` looks like a generated code (`P` + at least 5 digits).
///
/// Lookups never reject input on this basis. Not-found warnings log it to
/// separate misreads from unknown products.
pub fn is_product_code(s: &str) -> bool {
    let Some(digits) = s.strip_prefix(CODE_PREFIX) else {
        return false;
    };
    digits.len() >= CODE_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_from_empty_table() {
        let codes: Vec<String> = (0..3).map(next_product_code).collect();
        assert_eq!(codes, vec!["P00001", "P00002", "P00003"]);
    }

    #[test]
    fn test_padding_is_minimum_width() {
        assert_eq!(next_product_code(12344), "P12345");
        assert_eq!(next_product_code(99999), "P100000");
    }

    #[test]
    fn test_is_product_code() {
        assert!(is_product_code("P00001"));
        assert!(is_product_code("P100000"));
        assert!(!is_product_code("p00001"));
        assert!(!is_product_code("P0001"));
        assert!(!is_product_code("P0000A"));
        assert!(!is_product_code(""));
    }
}
