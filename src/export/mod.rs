//! Roster rendering and spreadsheet export.
//!
//! The roster itself carries raw name lists; this module turns them into
//! display strings and writes them to an XLSX workbook.

mod table;
mod xlsx;

pub use table::RosterTable;
pub use xlsx::{XLSX_CONTENT_TYPE, write_xlsx};
