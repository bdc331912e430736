//! Excel decoding for uploaded preference workbooks.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::models::PreferenceTable;

/// Decodes the first worksheet of an `.xlsx` workbook into a
/// [`PreferenceTable`].
///
/// The first used row is the header. Blank cells read as `""`; numbers,
/// booleans and dates read as their display text.
///
/// # Errors
///
/// Returns [`RosterError::MalformedInput`] if the bytes are not an xlsx
/// workbook or the workbook has no worksheet.
pub fn read_xlsx(bytes: &[u8]) -> RosterResult<PreferenceTable> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RosterError::MalformedInput {
            message: "workbook has no worksheets".to_string(),
        })??;

    let mut rows = range
        .rows()
        .map(|cells| cells.iter().map(cell_text).collect::<Vec<String>>());
    let columns = rows.next().unwrap_or_default();
    let rows: Vec<Vec<String>> = rows.collect();

    debug!(columns = columns.len(), rows = rows.len(), "Workbook decoded");

    Ok(PreferenceTable::new(columns, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        other => other.to_string(),
    }
}
