//! CSV decoding for uploaded preference sheets.

use std::io::Read;

use crate::error::RosterResult;
use crate::models::PreferenceTable;

/// Decodes a CSV document with a header row into a [`PreferenceTable`].
///
/// Rows may have fewer or more cells than the header. Header names and cell
/// values are kept exactly as written; whitespace handling is left to the
/// validator.
///
/// # Errors
///
/// Returns [`RosterError::MalformedInput`](crate::error::RosterError::MalformedInput)
/// if the document is not valid UTF-8 CSV.
///
/// # Example
///
/// ```
/// use shift_roster::input::read_csv;
///
/// let data = "Employee,Mon\nAnn,7-15\n";
/// let table = read_csv(data.as_bytes()).unwrap();
/// assert_eq!(table.columns, vec!["Employee", "Mon"]);
/// assert_eq!(table.cell(0, 1), "7-15");
/// ```
pub fn read_csv<R: Read>(reader: R) -> RosterResult<PreferenceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let columns = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(String::from).collect());
    }

    Ok(PreferenceTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn test_reads_header_and_rows() {
        let data = "Employee,Mon,Tue\nAnn,7-15,day-off\nBob,,15-23\n";

        let table = read_csv(data.as_bytes()).unwrap();

        assert_eq!(table.columns, vec!["Employee", "Mon", "Tue"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, 1), "");
        assert_eq!(table.cell(1, 2), "15-23");
    }

    #[test]
    fn test_short_rows_are_accepted() {
        let data = "Employee,Mon,Tue\nAnn\n";

        let table = read_csv(data.as_bytes()).unwrap();

        assert_eq!(table.cell(0, 0), "Ann");
        assert_eq!(table.cell(0, 2), "");
    }

    #[test]
    fn test_quoted_cells_keep_commas_and_spaces() {
        let data = "Employee,Mon\n\"Smith, Ann \",7-15\n";

        let table = read_csv(data.as_bytes()).unwrap();

        assert_eq!(table.cell(0, 0), "Smith, Ann ");
    }

    #[test]
    fn test_header_only_yields_empty_table() {
        let table = read_csv("Employee,Mon\n".as_bytes()).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn test_invalid_utf8_is_malformed_input() {
        let data: &[u8] = b"Employee,Mon\n\xff\xfe,7-15\n";

        let result = read_csv(data);

        assert!(matches!(result, Err(RosterError::MalformedInput { .. })));
    }
}
