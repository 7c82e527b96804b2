//! Text canonicalization
//!
//! Every field comparison in the matcher runs on canonical text so that
//! punctuation, spacing and casing differences ("B.S." vs "bs",
//! "Computer Science " vs "computerscience") never produce false negatives.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
}

/// Canonical form of a string: letters lowercased, everything that is not a
/// letter or digit removed.
///
/// Lowercasing happens before the strip pass; a lowercase expansion that
/// introduces a combining mark loses the mark in the strip, which keeps the
/// function idempotent.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_ALNUM.replace_all(&lowered, "").into_owned()
}

/// Decimal string form of a numeric graduation year.
///
/// Spreadsheet cells store years as floats ("2016.0"); comparisons need the
/// plain integer form without a decimal point or leading zeros.
pub fn normalize_year(raw: f64) -> String {
    (raw.trunc() as i64).to_string()
}
