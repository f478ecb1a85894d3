//! CSV parsing for spreadsheet exports.
//!
//! The export format is fixed: comma-separated, quoted-field escaping,
//! first row = headers. Rows are normalized to the header width so the
//! field mapper can index columns without bounds checks.

use csv::ReaderBuilder;

use crate::errors::{Error, ValidationError};
use crate::Result;

/// Headers and data rows extracted from one sheet tab.
#[derive(Debug, Clone)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parses the CSV text of one tab.
///
/// Empty rows are dropped. Rows shorter than the header are padded with
/// empty strings; longer rows are truncated. A completely empty export is
/// an error (the tab itself failed, not a record in it).
pub fn parse_sheet(content: &str) -> Result<ParsedSheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }
                records.push(row);
            }
            Err(e) => {
                log::warn!("Skipping malformed CSV row: {}", e);
            }
        }
    }

    if records.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Sheet export is empty or contains no valid records".to_string(),
        )));
    }

    let mut rows = records;
    let headers: Vec<String> = rows.remove(0).iter().map(|h| h.trim().to_string()).collect();

    let width = headers.len();
    for row in &mut rows {
        if row.len() < width {
            row.resize(width, String::new());
        } else if row.len() > width {
            row.truncate(width);
        }
    }

    Ok(ParsedSheet { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_sheet() {
        let content = "Nama,No HP\nSiti,0812\nAminah,0813";
        let sheet = parse_sheet(content).unwrap();
        assert_eq!(sheet.headers, vec!["Nama", "No HP"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0], vec!["Siti", "0812"]);
    }

    #[test]
    fn test_quoted_fields() {
        let content = "Nama,Keterangan\nSiti,\"Bayar, minggu depan\"";
        let sheet = parse_sheet(content).unwrap();
        assert_eq!(sheet.rows[0][1], "Bayar, minggu depan");
    }

    #[test]
    fn test_empty_rows_dropped_and_widths_normalized() {
        let content = "a,b,c\n1,2\n\n3,4,5,6";
        let sheet = parse_sheet(content).unwrap();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0], vec!["1", "2", ""]);
        assert_eq!(sheet.rows[1], vec!["3", "4", "5"]);
    }

    #[test]
    fn test_empty_export_is_error() {
        assert!(parse_sheet("").is_err());
        assert!(parse_sheet("\n\n").is_err());
    }
}
