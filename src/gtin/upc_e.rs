//! UPC-E to UPC-A expansion.

/// Expand an 8-digit UPC-E code into its 12-digit UPC-A form.
///
/// The input must be exactly 8 ASCII digits with number system 0 or 1; any
/// other leading digit has no defined expansion and yields `None`. With
/// digits `N X1 X2 X3 X4 X5 X6 C`, the expansion branches on `X6`:
///
/// - `X6` in 0..=2: `N X1 X2 X6 0000 X3 X4 X5 C`
/// - `X6` = 3:      `N X1 X2 X3 00000 X4 X5 C`
/// - `X6` = 4:      `N X1 X2 X3 X4 00000 X5 C`
/// - otherwise:     `N X1 X2 X3 X4 X5 0000 X6 C`
///
/// The check digit `C` is carried through unchanged, not recomputed. The
/// expanded form can therefore fail GS1 validation when a scanner
/// misreported the trailing digit; callers surface that through
/// [`is_valid_gtin`](super::is_valid_gtin) rather than rejecting the
/// expansion.
pub fn expand_upc_e(code: &str) -> Option<String> {
    if code.len() != 8 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let d = code.as_bytes();
    let number_system = d[0];
    if number_system != b'0' && number_system != b'1' {
        return None;
    }

    let (x1, x2, x3, x4, x5, x6, check) =
        (d[1], d[2], d[3], d[4], d[5], d[6], d[7]);

    let mut expanded = String::with_capacity(12);
    expanded.push(number_system as char);
    match x6 {
        b'0' | b'1' | b'2' => {
            expanded.push(x1 as char);
            expanded.push(x2 as char);
            expanded.push(x6 as char);
            expanded.push_str("0000");
            expanded.push(x3 as char);
            expanded.push(x4 as char);
            expanded.push(x5 as char);
        }
        b'3' => {
            expanded.push(x1 as char);
            expanded.push(x2 as char);
            expanded.push(x3 as char);
            expanded.push_str("00000");
            expanded.push(x4 as char);
            expanded.push(x5 as char);
        }
        b'4' => {
            expanded.push(x1 as char);
            expanded.push(x2 as char);
            expanded.push(x3 as char);
            expanded.push(x4 as char);
            expanded.push_str("00000");
            expanded.push(x5 as char);
        }
        _ => {
            expanded.push(x1 as char);
            expanded.push(x2 as char);
            expanded.push(x3 as char);
            expanded.push(x4 as char);
            expanded.push(x5 as char);
            expanded.push_str("0000");
            expanded.push(x6 as char);
        }
    }
    expanded.push(check as char);

    debug_assert_eq!(expanded.len(), 12);
    Some(expanded)
}
