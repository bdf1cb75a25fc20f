//! xlfn-patch - future-function compatibility for xlsx formulas
//!
//! OOXML requires functions added after the base file format was frozen
//! ("future functions": MAXIFS, XLOOKUP, LAMBDA, ...) to be stored with the
//! `_xlfn.` namespace prefix. Excel and Google Sheets add it silently when
//! saving; generated files often lack it and strict readers such as
//! LibreOffice show #NAME? instead of the result. This crate scans every
//! formula cell in a workbook and adds the missing prefixes in place.
//!
//! # Example
//!
//! ```no_run
//! use xlfn_patch::workbook::add_xlfn_prefixes;
//!
//! let path = std::path::Path::new("report.xlsx");
//! let mut book = umya_spreadsheet::reader::xlsx::read(path)
//!     .map_err(|e| xlfn_patch::error::PatchError::Workbook(format!("{:?}", e)))?;
//!
//! let modified = add_xlfn_prefixes(&mut book);
//! println!("Patched {} cells", modified);
//!
//! umya_spreadsheet::writer::xlsx::write(&book, path)
//!     .map_err(|e| xlfn_patch::error::PatchError::Workbook(format!("{:?}", e)))?;
//! # Ok::<(), xlfn_patch::error::PatchError>(())
//! ```

pub mod cli;
pub mod error;
pub mod functions;
pub mod rewriter;
pub mod workbook;

// Re-export commonly used items
pub use error::{PatchError, PatchResult};
pub use rewriter::{rewrite_cell_text, rewrite_formula};
pub use workbook::add_xlfn_prefixes;
