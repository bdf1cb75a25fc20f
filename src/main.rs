use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xlfn_patch::cli;
use xlfn_patch::error::PatchResult;

#[derive(Parser)]
#[command(name = "xlfn-patch")]
#[command(about = "Add the _xlfn. prefix OOXML requires for future spreadsheet functions")]
#[command(long_about = "xlfn-patch - Future function compatibility for xlsx files

OOXML requires functions added after the base file format was frozen
(MAXIFS, XLOOKUP, LAMBDA, FORECAST.ETS, ...) to be stored with the _xlfn.
namespace prefix. Excel and Google Sheets add it silently on save, but
generated files often lack it and strict readers such as LibreOffice show
#NAME? errors instead of results.

COMMANDS:
  patch - Rewrite formulas in place (or to a new file)
  scan  - Report non-compliant formulas without modifying anything

EXAMPLES:
  xlfn-patch patch report.xlsx                  # Patch in place
  xlfn-patch patch report.xlsx -o fixed.xlsx    # Patch to a copy
  xlfn-patch patch report.xlsx --dry-run        # Count only
  xlfn-patch scan report.xlsx                   # Show before/after")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add missing _xlfn. prefixes to all formula cells
    Patch {
        /// Path to the xlsx file to patch
        input: PathBuf,

        /// Write the patched workbook here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report the cell count without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show each rewritten formula
        #[arg(short, long)]
        verbose: bool,
    },

    /// List formulas that need the prefix, without modifying the file
    Scan {
        /// Path to the xlsx file to scan
        input: PathBuf,
    },
}

fn main() -> PatchResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Patch {
            input,
            output,
            dry_run,
            verbose,
        } => cli::patch(input, output, dry_run, verbose),

        Commands::Scan { input } => cli::scan(input),
    }
}
