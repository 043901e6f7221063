//! Writing the result table.
//!
//! The output format is chosen from the output file's extension:
//!
//! | Extension | Module | Layout |
//! |-----------|--------|--------|
//! | `.xlsx` | [`spreadsheet`] | one worksheet, header row then one row per article |
//! | `.csv` | [`delimited`] | header record then one record per article |
//! | `.json` | [`json`] | array of objects keyed by column name |
//!
//! Every writer renders the whole table in memory and writes the file in one
//! step, so a failed run never leaves a partial table behind.

pub mod delimited;
pub mod json;
pub mod spreadsheet;

use crate::error::{AnalyzerError, Result};
use crate::models::{Projection, ResultRow};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Supported output table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
    Json,
}

impl OutputFormat {
    /// Pick the format from `path`'s extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("xlsx") => Ok(OutputFormat::Xlsx),
            Some("csv") => Ok(OutputFormat::Csv),
            Some("json") => Ok(OutputFormat::Json),
            _ => Err(AnalyzerError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Render `rows` through `projection` and write them to `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display(), rows = rows.len()))]
pub async fn write_table(path: &Path, projection: &Projection, rows: &[ResultRow]) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    let bytes = match format {
        OutputFormat::Xlsx => spreadsheet::render(projection, rows)?,
        OutputFormat::Csv => delimited::render(projection, rows)?,
        OutputFormat::Json => json::render(projection, rows)?,
    };

    fs::write(path, &bytes)
        .await
        .map_err(|e| AnalyzerError::io(path, e))?;
    info!(?format, bytes = bytes.len(), "Wrote result table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_row;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out.XLSX")).unwrap(), OutputFormat::Xlsx);
        assert_eq!(OutputFormat::from_path(Path::new("a/b.csv")).unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("r.json")).unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::from_path(Path::new("out.txt")),
            Err(AnalyzerError::UnsupportedFormat(_))
        ));
        assert!(OutputFormat::from_path(Path::new("out")).is_err());
    }

    #[tokio::test]
    async fn test_write_table_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_table(&path, &Projection::metrics_only(), &[sample_row()])
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert!(lines.next().unwrap().starts_with("positive_score,negative_score,"));
        assert!(lines.next().unwrap().starts_with("3,1,0.4,0.2,6.5,10,"));
        assert!(lines.next().is_none());
    }

    #[tokio::test]
    async fn test_write_table_unsupported_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let err = write_table(&path, &Projection::metrics_only(), &[sample_row()])
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }
}
