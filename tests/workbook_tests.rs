//! Workbook walker integration tests
//!
//! Builds in-memory workbooks and checks the full walk: which cells get
//! rewritten, what the modification counter reports, and what stays
//! untouched.

use pretty_assertions::assert_eq;
use umya_spreadsheet::Spreadsheet;
use xlfn_patch::workbook::{add_xlfn_prefixes, scan_workbook};

fn formula_of(book: &Spreadsheet, sheet: &str, cell: &str) -> String {
    book.get_sheet_by_name(sheet)
        .unwrap()
        .get_cell(cell)
        .unwrap()
        .get_formula()
        .to_string()
}

#[test]
fn test_patches_future_function_and_counts() {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    sheet
        .get_cell_mut("A1")
        .set_formula(r#"MAXIFS(A1:A10,B1:B10,">5")"#);
    sheet.get_cell_mut("A2").set_formula("SUM(A1:A10)");

    let modified = add_xlfn_prefixes(&mut book);

    assert_eq!(modified, 1);
    assert_eq!(
        formula_of(&book, "Sheet1", "A1"),
        r#"_xlfn.MAXIFS(A1:A10,B1:B10,">5")"#
    );
    assert_eq!(formula_of(&book, "Sheet1", "A2"), "SUM(A1:A10)");
}

#[test]
fn test_already_prefixed_not_counted() {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    sheet
        .get_cell_mut("B2")
        .set_formula("_xlfn.MAXIFS(A1:A10,1,1)");

    let modified = add_xlfn_prefixes(&mut book);

    assert_eq!(modified, 0);
    assert_eq!(
        formula_of(&book, "Sheet1", "B2"),
        "_xlfn.MAXIFS(A1:A10,1,1)"
    );
}

#[test]
fn test_second_pass_reports_zero() {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    sheet.get_cell_mut("A1").set_formula("XLOOKUP(A1,B:B,C:C)");
    sheet
        .get_cell_mut("A2")
        .set_formula("IFS(A1>0,CONCAT(B1,C1))");

    assert_eq!(add_xlfn_prefixes(&mut book), 2);
    assert_eq!(add_xlfn_prefixes(&mut book), 0);
    assert_eq!(
        formula_of(&book, "Sheet1", "A2"),
        "_xlfn.IFS(A1>0,_xlfn.CONCAT(B1,C1))"
    );
}

#[test]
fn test_plain_cells_untouched() {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    // A string that happens to name a future function is not a formula
    sheet.get_cell_mut("A1").set_value("MAXIFS");
    sheet.get_cell_mut("A2").set_value_number(42);
    sheet.get_cell_mut("A3").set_value_bool(true);

    let modified = add_xlfn_prefixes(&mut book);
    let sheet = book.get_sheet_by_name("Sheet1").unwrap();

    assert_eq!(modified, 0);
    assert_eq!(sheet.get_value("A1"), "MAXIFS");
    assert_eq!(sheet.get_value("A2"), "42");
}

#[test]
fn test_counts_across_worksheets() {
    let mut book = umya_spreadsheet::new_file();
    book.get_sheet_by_name_mut("Sheet1")
        .unwrap()
        .get_cell_mut("A1")
        .set_formula("MAXIFS(A:A,B:B,1)");

    let revenue = book.new_sheet("Revenue").unwrap();
    revenue.get_cell_mut("B2").set_formula("SORTBY(A1:A5,B1:B5)");
    revenue
        .get_cell_mut("B3")
        .set_formula("TEXTJOIN(\",\",TRUE,A1:A3)");

    // Third sheet needs nothing
    let notes = book.new_sheet("Notes").unwrap();
    notes.get_cell_mut("A1").set_formula("SUM(A2:A9)");

    assert_eq!(add_xlfn_prefixes(&mut book), 3);
    assert_eq!(
        formula_of(&book, "Revenue", "B2"),
        "_xlfn.SORTBY(A1:A5,B1:B5)"
    );
    assert_eq!(formula_of(&book, "Notes", "A1"), "SUM(A2:A9)");
}

#[test]
fn test_forecast_family_patched_whole() {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    sheet
        .get_cell_mut("C1")
        .set_formula("FORECAST.ETS.CONFINT(1,A1:A5,B1:B5,0.95)");

    assert_eq!(add_xlfn_prefixes(&mut book), 1);
    assert_eq!(
        formula_of(&book, "Sheet1", "C1"),
        "_xlfn.FORECAST.ETS.CONFINT(1,A1:A5,B1:B5,0.95)"
    );
}

#[test]
fn test_scan_reports_without_modifying() {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    sheet.get_cell_mut("A1").set_formula("maxifs(A:A,B:B,1)");
    sheet.get_cell_mut("A2").set_formula("SUM(A1:A9)");

    let changes = scan_workbook(&book);

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].0, "Sheet1");
    assert_eq!(changes[0].1, "A1");
    assert_eq!(changes[0].2, "maxifs(A:A,B:B,1)");
    assert_eq!(changes[0].3, "_xlfn.maxifs(A:A,B:B,1)");

    // Scan never writes back
    assert_eq!(formula_of(&book, "Sheet1", "A1"), "maxifs(A:A,B:B,1)");
}
