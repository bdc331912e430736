//! XLSX export for rendered rosters.

use rust_xlsxwriter::{Format, FormatBorder, Workbook};

use crate::error::RosterResult;

use super::table::RosterTable;

/// MIME type of the exported workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Writes `table` to a single-sheet workbook and returns the file bytes.
///
/// # Errors
///
/// Returns [`RosterError::ExportError`](crate::error::RosterError::ExportError)
/// if the sheet name is not acceptable to Excel or the workbook cannot be
/// assembled.
pub fn write_xlsx(table: &RosterTable, sheet_name: &str) -> RosterResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header = Format::new().set_bold().set_border(FormatBorder::Thin);
    let text = Format::new().set_border(FormatBorder::Thin).set_text_wrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, title) in table.headers.iter().enumerate() {
        sheet.write_with_format(0, col as u16, title.as_str(), &header)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let excel_row = index as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            sheet.write_with_format(excel_row, col as u16, cell.as_str(), &text)?;
        }
    }

    sheet.set_column_width(0, 16)?;
    sheet.set_column_width(1, 40)?;
    sheet.set_column_width(2, 40)?;

    Ok(workbook.save_to_buffer()?)
}
