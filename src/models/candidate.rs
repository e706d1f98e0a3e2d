use crate::gtin::is_valid_gtin;

/// Length class of a GTIN-family identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GtinLength {
    /// EAN-8 / GTIN-8
    Gtin8,
    /// UPC-A / GTIN-12
    Gtin12,
    /// EAN-13 / GTIN-13
    Gtin13,
    /// ITF-14 / GTIN-14
    Gtin14,
}

impl GtinLength {
    /// Map a digit count onto its length class, if it is one of the
    /// GTIN-family lengths.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            8 => Some(Self::Gtin8),
            12 => Some(Self::Gtin12),
            13 => Some(Self::Gtin13),
            14 => Some(Self::Gtin14),
            _ => None,
        }
    }

    pub fn digits(&self) -> usize {
        match self {
            Self::Gtin8 => 8,
            Self::Gtin12 => 12,
            Self::Gtin13 => 13,
            Self::Gtin14 => 14,
        }
    }
}

/// One normalized representation of a scanned identifier.
///
/// Candidates are produced by [`candidates_for`](crate::gtin::candidates_for)
/// and never mutated. The constructor enforces that the code is all digits
/// with a GTIN-family length, so downstream consumers can key caches and
/// provider queries on `code()` without re-validating.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    code: String,
    length: GtinLength,
    check_digit_valid: bool,
}

impl Candidate {
    /// Build a candidate from a digit string.
    ///
    /// Returns `None` when the input contains non-digits or its length is
    /// not one of 8, 12, 13, or 14.
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let length = GtinLength::from_len(code.len())?;
        let check_digit_valid = is_valid_gtin(&code);
        Some(Self {
            code,
            length,
            check_digit_valid,
        })
    }

    /// The normalized digit string.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn length(&self) -> GtinLength {
        self.length
    }

    /// Whether the trailing digit matches the GS1 check digit of the rest.
    ///
    /// Candidates with an invalid check digit are still tried (some
    /// scanners misreport the trailing digit), just after valid ones.
    pub fn check_digit_valid(&self) -> bool {
        self.check_digit_valid
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
