//! Input suppliers.
//!
//! Preference data reaches the engine as an uploaded Excel workbook, an
//! uploaded CSV sheet or a manual entry form. All of them end up as rows the
//! roster module understands.

mod csv_upload;
mod manual_form;
mod xlsx_upload;

pub use csv_upload::read_csv;
pub use manual_form::{ManualEntry, ManualEntryForm};
pub use xlsx_upload::read_xlsx;
