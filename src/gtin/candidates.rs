//! Candidate generation - one raw scan in, ordered identifier variants out.

use crate::models::Candidate;

use super::upc_e::expand_upc_e;

/// Turn a raw scanned or typed string into an ordered, deduplicated list of
/// normalized identifier candidates.
///
/// Steps:
/// 1. Trim whitespace and strip a leading AIM symbology prefix (`]` marker
///    followed by at least two more characters, e.g. `]C1` or `]E0`).
/// 2. Extract the longest contiguous run of digits; no run means no
///    candidates.
/// 3. Seed with the run itself when it has a GTIN-family length, then apply
///    the cross-representation rules (all additive):
///    - 13 digits with a leading zero: the 12-digit UPC-A form is added
///      *before* the 13-digit form. UPC-A keys hit more catalog entries.
///    - 12 digits: the zero-padded EAN-13 form is added.
///    - 14 digits with a leading zero: the 13-digit form is added, and the
///      12-digit form too when another zero falls away.
///    - 8 digits: on a successful UPC-E expansion, both the UPC-A form and
///      its EAN-13 padding are added.
/// 4. Deduplicate preserving first-seen order, then stable-sort candidates
///    with a valid check digit ahead of the rest.
pub fn candidates_for(raw: &str) -> Vec<Candidate> {
    let input = strip_symbology_prefix(raw.trim());

    let digits = longest_digit_run(input);
    if digits.is_empty() {
        return Vec::new();
    }

    let mut codes: Vec<String> = Vec::new();
    match digits.len() {
        13 => {
            if let Some(upc_a) = digits.strip_prefix('0') {
                codes.push(upc_a.to_string());
            }
            codes.push(digits.to_string());
        }
        12 => {
            codes.push(digits.to_string());
            codes.push(format!("0{digits}"));
        }
        14 => {
            codes.push(digits.to_string());
            if let Some(ean) = digits.strip_prefix('0') {
                codes.push(ean.to_string());
                if let Some(upc_a) = ean.strip_prefix('0') {
                    codes.push(upc_a.to_string());
                }
            }
        }
        8 => {
            codes.push(digits.to_string());
            if let Some(upc_a) = expand_upc_e(digits) {
                let ean = format!("0{upc_a}");
                codes.push(upc_a);
                codes.push(ean);
            }
        }
        _ => {}
    }

    let mut seen: Vec<Candidate> = Vec::with_capacity(codes.len());
    for code in codes {
        if seen.iter().any(|c| c.code() == code) {
            continue;
        }
        if let Some(candidate) = Candidate::new(code) {
            seen.push(candidate);
        }
    }

    // Stable: generation order is the tie-break within each group.
    seen.sort_by_key(|c| !c.check_digit_valid());
    seen
}

/// Drop an AIM-style symbology identifier: a `]` marker followed by at
/// least two more characters (code character + modifier).
fn strip_symbology_prefix(input: &str) -> &str {
    if input.starts_with(']') {
        match input.char_indices().nth(3) {
            Some((idx, _)) => return &input[idx..],
            None if input.chars().count() == 3 => return "",
            None => {}
        }
    }
    input
}

/// The longest contiguous digit run in `input`; the first one wins a tie.
fn longest_digit_run(input: &str) -> &str {
    let mut best = "";
    for run in input.split(|c: char| !c.is_ascii_digit()) {
        if run.len() > best.len() {
            best = run;
        }
    }
    best
}
