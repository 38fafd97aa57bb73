//! Tabular source loading for exchange-rate files.
//!
//! Turns a CSV or Excel file into a `Table`: trimmed headers plus raw cell
//! text per row. Format-specific readers are interchangeable strategies
//! selected by file extension; no runtime type inspection. Malformed CSV
//! rows are skipped (and reported), not fatal.

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use log::{debug, warn};

use crate::error::{FincalcError, Result};

/// UTF-8 byte-order mark, present on exports from Excel and some bank portals
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A decoded tabular source: column names in file order plus raw cell text
#[derive(Debug, Clone)]
pub struct Table {
    /// Trimmed column names, BOM stripped
    pub headers: Vec<String>,
    /// Raw cell text per data row, positionally aligned with `headers`.
    /// Short rows are allowed; missing cells read as empty.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Cell text at (row, column), empty string when the row is short
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// A format-specific table decoding strategy
trait TableReader {
    fn read(&self, path: &Path) -> Result<Table>;
}

/// Load a rate table from disk, dispatching on the file extension:
/// `.xlsx`/`.xls` decode as a spreadsheet, anything else as CSV.
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(FincalcError::FileNotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let reader: &dyn TableReader = match ext.as_str() {
        "xlsx" | "xls" => &SpreadsheetReader,
        _ => &CsvReader,
    };
    reader.read(path)
}

/// CSV strategy: tries a BOM-aware UTF-8 decode first, then plain UTF-8
struct CsvReader;

impl TableReader for CsvReader {
    fn read(&self, path: &Path) -> Result<Table> {
        let bytes = std::fs::read(path)?;

        // utf-8-sig first, then plain utf-8
        let attempts: [&[u8]; 2] = [bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes), &bytes];
        for (i, attempt) in attempts.iter().enumerate() {
            if let Ok(text) = std::str::from_utf8(attempt) {
                debug!(
                    "decoded '{}' as {}",
                    path.display(),
                    if i == 0 { "BOM-aware UTF-8" } else { "plain UTF-8" }
                );
                return parse_csv(path, text);
            }
        }
        Err(FincalcError::TableUnreadable(path.to_path_buf()))
    }
}

fn parse_csv(path: &Path, text: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| {
            debug!("failed to read CSV headers from '{}': {e}", path.display());
            FincalcError::TableUnreadable(path.to_path_buf())
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // 1-based data line, after the header line
        let line = i + 2;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping malformed CSV row at line {line}: {e}");
                continue;
            }
        };
        if record.len() > headers.len() {
            warn!(
                "skipping CSV row at line {line}: {} fields, expected at most {}",
                record.len(),
                headers.len()
            );
            continue;
        }
        rows.push(record.iter().map(|c| c.trim().to_string()).collect());
    }

    Ok(Table { headers, rows })
}

/// Spreadsheet strategy: first worksheet, first row as headers
struct SpreadsheetReader;

impl TableReader for SpreadsheetReader {
    fn read(&self, path: &Path) -> Result<Table> {
        let mut workbook = open_workbook_auto(path).map_err(|e| {
            debug!("failed to open workbook '{}': {e}", path.display());
            FincalcError::TableUnreadable(path.to_path_buf())
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| FincalcError::TableUnreadable(path.to_path_buf()))?
            .map_err(|e| {
                debug!("failed to read first worksheet of '{}': {e}", path.display());
                FincalcError::TableUnreadable(path.to_path_buf())
            })?;

        let mut rows_iter = range.rows();
        let headers: Vec<String> = rows_iter
            .next()
            .map(|cells| cells.iter().map(|c| c.to_string().trim().to_string()).collect())
            .unwrap_or_default();

        let rows: Vec<Vec<String>> = rows_iter
            .map(|cells| cells.iter().map(|c| c.to_string().trim().to_string()).collect())
            .collect();

        debug!(
            "decoded '{}' as spreadsheet: {} columns, {} data rows",
            path.display(),
            headers.len(),
            rows.len()
        );
        Ok(Table { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, bytes: &[u8]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = load_table(Path::new("definitely_not_here.csv")).unwrap_err();
        assert!(matches!(err, FincalcError::FileNotFound(_)));
    }

    #[test]
    fn bom_prefixed_csv_loads_with_clean_headers() {
        let (_dir, path) = write_temp(
            "rates.csv",
            b"\xef\xbb\xbfDate,USD/CAD\n2024-01-02,1.35\n2024-01-03,1.36\n",
        );
        let table = load_table(&path).unwrap();
        assert_eq!(table.headers, vec!["Date", "USD/CAD"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, 1), "1.36");
    }

    #[test]
    fn plain_utf8_csv_loads() {
        let (_dir, path) = write_temp("rates.csv", b"Date,USD/CAD\n2024-01-02,1.35\n");
        let table = load_table(&path).unwrap();
        assert_eq!(table.headers, vec!["Date", "USD/CAD"]);
        assert_eq!(table.cell(0, 1), "1.35");
    }

    #[test]
    fn rows_with_extra_fields_are_skipped() {
        let (_dir, path) = write_temp(
            "rates.csv",
            b"Date,USD/CAD\n2024-01-02,1.35\n2024-01-03,1.99,stray,fields\n2024-01-04,1.36\n",
        );
        let table = load_table(&path).unwrap();
        assert_eq!(table.rows.len(), 2);
        // The last valid row survives as the latest observation
        assert_eq!(table.cell(1, 1), "1.36");
    }

    #[test]
    fn short_rows_read_missing_cells_as_empty() {
        let (_dir, path) = write_temp("rates.csv", b"Date,USD/CAD\n2024-01-02\n");
        let table = load_table(&path).unwrap();
        assert_eq!(table.cell(0, 1), "");
    }

    #[test]
    fn non_utf8_csv_is_table_unreadable() {
        let (_dir, path) = write_temp("rates.csv", b"\xffDate,USD/CAD\n\xfe2024,1.35\n");
        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, FincalcError::TableUnreadable(_)));
    }

    #[test]
    fn garbage_xlsx_is_table_unreadable() {
        let (_dir, path) = write_temp("rates.xlsx", b"this is not a zip archive");
        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, FincalcError::TableUnreadable(_)));
    }
}
