//! Reading the list of article URLs.
//!
//! The input is a table with a header row containing a `URL` column. Spreadsheets
//! (`.xlsx`, `.xlsm`, `.xls`, `.ods`) are read with calamine from their first
//! worksheet; `.csv` files with the csv crate. Empty URL cells are skipped.

use crate::error::{AnalyzerError, Result};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;
use tracing::{info, instrument};

/// Header of the column holding article URLs.
pub const URL_COLUMN: &str = "URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Spreadsheet,
    Csv,
}

impl InputFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Some(InputFormat::Spreadsheet),
            "csv" => Some(InputFormat::Csv),
            _ => None,
        }
    }
}

/// Read every URL from the `URL` column of the table at `path`, in row order.
///
/// Blank cells are skipped and each URL is trimmed.
///
/// # Errors
///
/// - [`AnalyzerError::UnsupportedFormat`] for an unknown extension
/// - [`AnalyzerError::MissingColumn`] when no header cell reads `URL`
/// - any read or parse failure from the underlying workbook or CSV reader
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    let urls = match InputFormat::from_path(path) {
        Some(InputFormat::Spreadsheet) => read_spreadsheet_urls(path)?,
        Some(InputFormat::Csv) => read_csv_urls(path)?,
        None => return Err(AnalyzerError::UnsupportedFormat(path.to_path_buf())),
    };
    info!(count = urls.len(), "Read input URLs");
    Ok(urls)
}

fn missing_column(path: &Path) -> AnalyzerError {
    AnalyzerError::MissingColumn {
        path: path.to_path_buf(),
        column: URL_COLUMN.to_string(),
    }
}

fn read_spreadsheet_urls(path: &Path) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(missing_column(path)),
    };

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| missing_column(path))?;
    let column = header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s == URL_COLUMN))
        .ok_or_else(|| missing_column(path))?;

    Ok(rows
        .filter_map(|row| row.get(column).and_then(cell_text))
        .collect())
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

fn read_csv_urls(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let column = reader
        .headers()?
        .iter()
        .position(|h| h == URL_COLUMN)
        .ok_or_else(|| missing_column(path))?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(url) = record.get(column).map(str::trim).filter(|u| !u.is_empty()) {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}
