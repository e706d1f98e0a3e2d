//! GS1 mod-10 check digit computation and validation.

/// Compute the GS1 check digit for a digit string that does not yet carry
/// one.
///
/// Walks the body right to left, alternating multiplier weights 3 and 1
/// starting with 3 on the rightmost digit, and returns
/// `(10 - sum mod 10) mod 10`.
///
/// Returns `None` when the body is empty or contains non-digits.
pub fn compute_check_digit(body: &str) -> Option<u8> {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let sum: u32 = body
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                digit * 3
            } else {
                digit
            }
        })
        .sum();
    Some(((10 - sum % 10) % 10) as u8)
}

/// Whether `code` is a well-formed GTIN: all digits, GTIN-family length
/// (8, 12, 13, or 14), and a trailing digit that matches the computed check
/// digit of the rest.
///
/// Malformed input is simply `false`; there is no error case.
pub fn is_valid_gtin(code: &str) -> bool {
    if !matches!(code.len(), 8 | 12 | 13 | 14) {
        return false;
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (body, check) = code.split_at(code.len() - 1);
    match compute_check_digit(body) {
        Some(expected) => expected == check.as_bytes()[0] - b'0',
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_known_upc_a_check_digit() {
        // 036000291452 is a published valid UPC-A
        assert_eq!(compute_check_digit("03600029145"), Some(2));
    }

    #[test]
    fn computes_ean_13_check_digit() {
        assert_eq!(compute_check_digit("400638133393"), Some(1));
        assert_eq!(compute_check_digit("01234567890"), Some(5));
    }

    #[test]
    fn rejects_empty_and_non_digit_bodies() {
        assert_eq!(compute_check_digit(""), None);
        assert_eq!(compute_check_digit("12a4"), None);
    }

    #[test]
    fn validates_gtin_family_lengths() {
        assert!(is_valid_gtin("036000291452")); // UPC-A
        assert!(is_valid_gtin("0036000291452")); // EAN-13
        assert!(is_valid_gtin("00036000291452")); // GTIN-14
        assert!(is_valid_gtin("40170725")); // EAN-8
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!is_valid_gtin("036000291453"));
        assert!(!is_valid_gtin("40170726"));
    }

    #[test]
    fn rejects_off_lengths_and_non_digits() {
        assert!(!is_valid_gtin(""));
        assert!(!is_valid_gtin("0360002914"));
        assert!(!is_valid_gtin("03600029145x"));
    }

    #[test]
    fn valid_iff_last_digit_matches_computed() {
        for code in ["036000291452", "0036000291452", "40170725"] {
            let (body, check) = code.split_at(code.len() - 1);
            let expected = compute_check_digit(body).unwrap();
            assert_eq!(
                is_valid_gtin(code),
                expected == check.as_bytes()[0] - b'0'
            );
        }
    }
}
