//! Helpers for log formatting and output path validation.

use crate::error::{AnalyzerError, Result};
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` bytes are cut at the nearest char boundary at or
/// below `max`, with `"…(+N bytes)"` appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure the directory that will hold `output` exists and is writable.
///
/// Creates the parent directory if needed, then creates and removes a scratch
/// file next to the output path. Nothing is left behind on success.
#[instrument(level = "info", skip_all, fields(output = %output.display()))]
pub async fn ensure_writable_parent(output: &Path) -> Result<()> {
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };

    fs::create_dir_all(&dir)
        .await
        .map_err(|e| AnalyzerError::io(&dir, e))?;

    let scratch_path = dir.join("..__write_check__");
    match stdfs::File::create(&scratch_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&scratch_path);
            info!(dir = %dir.display(), "Output directory is writable");
            Ok(())
        }
        Err(e) => Err(AnalyzerError::io(dir, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.ends_with("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // each 'é' is two bytes; byte 3 is mid-char
        let result = truncate_for_log("éééé", 3);
        assert_eq!(result, "é…(+6 bytes)");
    }

    #[tokio::test]
    async fn test_ensure_writable_parent_creates_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("reports/2024/out.xlsx");

        ensure_writable_parent(&output).await.unwrap();

        let parent = output.parent().unwrap();
        assert!(parent.is_dir());
        assert!(!parent.join("..__write_check__").exists());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_ensure_writable_parent_bare_filename() {
        ensure_writable_parent(Path::new("out.csv")).await.unwrap();
    }
}
