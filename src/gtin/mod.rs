//! GTIN normalization: check digits, UPC-E expansion, and candidate
//! generation.
//!
//! The same physical product can be encoded in several numerically-different
//! but equivalent barcode forms (UPC-A vs. its zero-padded EAN-13, UPC-E
//! compressions, GTIN-14 logistic wrappers). This module turns one raw scan
//! into the ordered list of forms worth trying against caches and catalogs.
//!
//! Everything here is pure: no I/O, no clocks, no shared state.

mod candidates;
mod check_digit;
mod upc_e;

pub use candidates::candidates_for;
pub use check_digit::{compute_check_digit, is_valid_gtin};
pub use upc_e::expand_upc_e;
