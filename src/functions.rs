//! The future-function name set and its matching order.
//!
//! OOXML froze its function list with the original file format; everything
//! Excel added later (MAXIFS, XLOOKUP, LAMBDA, ...) is a "future function"
//! and must be stored with a reserved namespace prefix. Excel and Google
//! Sheets add the prefix silently on save; strict readers such as
//! LibreOffice show #NAME? when it is missing.

use once_cell::sync::Lazy;

/// Namespace prefix OOXML requires before a future function name.
pub const XLFN_PREFIX: &str = "_xlfn.";

/// Future functions, as introduced after the OOXML function list was frozen.
pub const FUTURE_FUNCTIONS: &[&str] = &[
    // Excel 2019 / Office 365
    "CONCAT",
    "IFS",
    "MAXIFS",
    "MINIFS",
    "SWITCH",
    "TEXTJOIN",
    // Lookup (365)
    "XLOOKUP",
    "XMATCH",
    // Dynamic arrays (365)
    "FILTER",
    "RANDARRAY",
    "SEQUENCE",
    "SORT",
    "SORTBY",
    "UNIQUE",
    // Advanced (365)
    "LET",
    "LAMBDA",
    // Forecast (2016+)
    "FORECAST.ETS",
    "FORECAST.ETS.CONFINT",
    "FORECAST.ETS.SEASONALITY",
    "FORECAST.ETS.STAT",
    "FORECAST.LINEAR",
    // Math & trig (2013+)
    "ACOT",
    "ACOTH",
    "ARABIC",
    "BASE",
    "CEILING.MATH",
    "CEILING.PRECISE",
    "COMBINA",
    "COT",
    "COTH",
    "CSC",
    "CSCH",
    "DECIMAL",
    "FLOOR.MATH",
    "FLOOR.PRECISE",
    "GAMMA",
    "GAUSS",
    "MUNIT",
    "PERMUTATIONA",
    "PHI",
    "RRI",
    "SEC",
    "SECH",
    // Logical / info (2013+)
    "BITAND",
    "BITOR",
    "BITXOR",
    "BITLSHIFT",
    "BITRSHIFT",
    "IFNA",
    "ISFORMULA",
    "NUMBERVALUE",
    "PDURATION",
    "SHEET",
    "SHEETS",
    "SKEW.P",
    "UNICHAR",
    "UNICODE",
    "XOR",
    // Date (2013+)
    "DAYS",
    "ISO.CEILING",
    "ISOWEEKNUM",
    // Web / text (2013+)
    "ENCODEURL",
    "FILTERXML",
    "FORMULATEXT",
    "WEBSERVICE",
];

/// Names sorted longest-first, computed once per process.
///
/// Several names are prefixes of others (FORECAST.ETS is a strict prefix of
/// FORECAST.ETS.CONFINT etc.); the matcher tries alternatives in this order
/// so the longest valid name wins. Equal-length ties keep list order via the
/// stable sort; no two equal-length names prefix one another.
pub fn names_longest_first() -> &'static [&'static str] {
    static SORTED: Lazy<Vec<&'static str>> = Lazy::new(|| {
        let mut names = FUTURE_FUNCTIONS.to_vec();
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        names
    });
    &SORTED
}
