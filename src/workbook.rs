//! Workbook walker - apply the formula rewrite to every cell.
//!
//! umya-spreadsheet keeps formula text separate from cached cell values, so
//! "is a formula cell" is simply "has formula text"; plain string and
//! numeric cells are skipped untouched. openpyxl keeps the `=` marker in
//! the value instead - `rewrite_cell_text` covers that contract for callers
//! holding raw strings.

use crate::rewriter::rewrite_formula;
use umya_spreadsheet::Spreadsheet;

/// Add the _xlfn. prefix to future functions in all formulas.
///
/// Walks worksheets in workbook order and cells in row-major order, writes
/// each changed formula back to its cell, and returns the count of modified
/// cells. Running it again on the result changes nothing and returns 0.
pub fn add_xlfn_prefixes(workbook: &mut Spreadsheet) -> usize {
    let mut modified = 0;

    for worksheet in workbook.get_sheet_collection_mut().iter_mut() {
        // Collect first: the sorted collection borrows the sheet
        let mut changes: Vec<((u32, u32), String)> = Vec::new();

        for cell in worksheet.get_cell_collection_sorted() {
            let formula = cell.get_formula();
            if formula.is_empty() {
                continue; // Not a formula cell
            }
            if let Some(rewritten) = rewrite_formula(formula) {
                let coordinate = cell.get_coordinate();
                changes.push((
                    (*coordinate.get_col_num(), *coordinate.get_row_num()),
                    rewritten,
                ));
            }
        }

        for ((col, row), formula) in changes {
            worksheet.get_cell_mut((col, row)).set_formula(formula);
            modified += 1;
        }
    }

    modified
}

/// Report the changes `add_xlfn_prefixes` would make, without applying them.
///
/// Returns (sheet name, cell reference, current formula, rewritten formula)
/// in walk order.
pub fn scan_workbook(workbook: &Spreadsheet) -> Vec<(String, String, String, String)> {
    let mut changes = Vec::new();

    for worksheet in workbook.get_sheet_collection().iter() {
        for cell in worksheet.get_cell_collection_sorted() {
            let formula = cell.get_formula();
            if formula.is_empty() {
                continue;
            }
            if let Some(rewritten) = rewrite_formula(formula) {
                let coordinate = cell.get_coordinate();
                let reference = format!(
                    "{}{}",
                    column_letter(*coordinate.get_col_num()),
                    coordinate.get_row_num()
                );
                changes.push((
                    worksheet.get_name().to_string(),
                    reference,
                    formula.to_string(),
                    rewritten,
                ));
            }
        }
    }

    changes
}

/// Convert a 1-based column number to its letter (1 → A, 26 → Z, 27 → AA)
fn column_letter(col: u32) -> String {
    let mut result = String::new();
    let mut idx = (col - 1) as usize;

    loop {
        let remainder = idx % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}
