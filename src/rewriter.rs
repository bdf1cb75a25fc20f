//! Formula rewriting - add the _xlfn. prefix to future function calls.
//!
//! A name counts as a future function call only when it is not the tail of a
//! longer identifier (or already namespaced) and is followed, after optional
//! whitespace, by an opening parenthesis. Everything else in the formula,
//! including the matched name's original casing, is left untouched.

use crate::functions::{names_longest_first, XLFN_PREFIX};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a future function name followed by `\s*(`, case-insensitively.
///
/// Alternatives are tried longest-first (regex alternation is
/// leftmost-first), so FORECAST.ETS.CONFINT wins over FORECAST.ETS. The
/// "not preceded by [A-Za-z0-9_.]" half of the contract is checked in
/// `rewrite_formula`; the regex crate has no look-behind.
static FUTURE_CALL: Lazy<Regex> = Lazy::new(|| {
    let names = names_longest_first()
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)({})\s*\(", names)).unwrap()
});

/// Character class that blocks a match when it precedes the name.
///
/// A letter or digit means the name is the tail of a longer identifier; a
/// period means it already carries a namespace such as _xlfn.
fn blocks_match(prev: char) -> bool {
    prev.is_ascii_alphanumeric() || prev == '_' || prev == '.'
}

/// Rewrite formula text, prefixing every unprefixed future function call.
///
/// Works on formula text with or without the leading `=` (xlsx stores the
/// body only; openpyxl-style cell values keep the marker). Returns
/// `Some(rewritten)` when at least one prefix was added, `None` when the
/// text is already compliant.
///
/// Example:
/// - Input: `=MAXIFS(A1:A10,B1:B10,">5")`
/// - Output: `=_xlfn.MAXIFS(A1:A10,B1:B10,">5")`
pub fn rewrite_formula(formula: &str) -> Option<String> {
    let mut result = String::with_capacity(formula.len() + XLFN_PREFIX.len());
    let mut copied_to = 0;
    let mut changed = false;

    for captures in FUTURE_CALL.captures_iter(formula) {
        let name = captures.get(1).unwrap();

        // Look-behind check: skip names that sit inside a longer identifier
        // or already carry a namespace prefix
        if let Some(prev) = formula[..name.start()].chars().next_back() {
            if blocks_match(prev) {
                continue;
            }
        }

        result.push_str(&formula[copied_to..name.start()]);
        result.push_str(XLFN_PREFIX);
        copied_to = name.start();
        changed = true;
    }

    if !changed {
        return None;
    }

    result.push_str(&formula[copied_to..]);
    Some(result)
}

/// Rewrite a raw cell value, if it is formula text.
///
/// Values not starting with the `=` formula marker are not formulas and are
/// reported unchanged (`None`); this is the precondition the workbook walker
/// relies on for openpyxl-style string values.
pub fn rewrite_cell_text(value: &str) -> Option<String> {
    if !value.starts_with('=') {
        return None;
    }
    rewrite_formula(value)
}
