use crate::error::{PatchError, PatchResult};
use crate::workbook::{add_xlfn_prefixes, scan_workbook};
use colored::Colorize;
use std::path::{Path, PathBuf};
use umya_spreadsheet::Spreadsheet;

/// Read an xlsx workbook
fn read_workbook(path: &Path) -> PatchResult<Spreadsheet> {
    umya_spreadsheet::reader::xlsx::read(path)
        .map_err(|e| PatchError::Workbook(format!("Failed to open {}: {:?}", path.display(), e)))
}

/// Write an xlsx workbook
fn write_workbook(book: &Spreadsheet, path: &Path) -> PatchResult<()> {
    umya_spreadsheet::writer::xlsx::write(book, path)
        .map_err(|e| PatchError::Workbook(format!("Failed to write {}: {:?}", path.display(), e)))
}

/// Execute the patch command
pub fn patch(
    input: PathBuf,
    output: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
) -> PatchResult<()> {
    let destination = output.unwrap_or_else(|| input.clone());

    println!("{}", "xlfn-patch - Future function compatibility".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", destination.display());

    if dry_run {
        println!("{}", "DRY RUN MODE - No changes will be written\n".yellow());
    }

    if verbose {
        println!("{}", "Reading workbook...".cyan());
    }
    let mut book = read_workbook(&input)?;

    if verbose {
        println!("   Found {} worksheets\n", book.get_sheet_collection().len());
        for (sheet, reference, before, after) in scan_workbook(&book) {
            println!("   {}!{}: {} -> {}", sheet, reference.cyan(), before, after);
        }
        println!();
    }

    let modified = add_xlfn_prefixes(&mut book);

    if modified == 0 {
        println!("{}", "No formulas needed patching".green());
        return Ok(());
    }

    if dry_run {
        println!(
            "{}",
            format!("Dry run complete - {} cells would be patched", modified).yellow()
        );
        return Ok(());
    }

    write_workbook(&book, &destination)?;

    println!("{}", "Patch complete".bold().green());
    println!("   Modified cells: {}", modified.to_string().bold());

    Ok(())
}

/// Execute the scan command - report changes without modifying the file
pub fn scan(input: PathBuf) -> PatchResult<()> {
    println!("{}", "xlfn-patch - Scan".bold().green());
    println!("   File: {}\n", input.display());

    let book = read_workbook(&input)?;
    let changes = scan_workbook(&book);

    if changes.is_empty() {
        println!("{}", "All formulas are compliant".green());
        return Ok(());
    }

    for (sheet, reference, before, after) in &changes {
        println!("   {}!{}", sheet.bright_blue().bold(), reference.cyan());
        println!("      before: {}", before);
        println!("      after:  {}", after.bright_yellow());
    }

    println!(
        "\n{}",
        format!("{} cells need patching", changes.len()).bold().yellow()
    );

    Ok(())
}
