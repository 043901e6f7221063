//! Error types for the article metrics pipeline.
//!
//! Every stage returns [`AnalyzerError`]. Nothing is retried or isolated per row:
//! the first error propagates up to `main` and terminates the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading lexicons, fetching articles, or reading and
/// writing tables.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A file or directory could not be read or written.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request for an article failed (transport, status, or body).
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed from the configured options.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// An input row held something that is not an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The input table has no column with the expected header.
    #[error("input table {} has no {column:?} column", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// A mandatory configuration value was not supplied by any source.
    #[error("missing required configuration value `{0}`")]
    MissingConfig(&'static str),

    /// The file extension does not map to a supported table format.
    #[error("unsupported table format for {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Syllables were requested for an empty word.
    #[error("cannot count syllables of an empty word")]
    EmptyWord,
}

impl AnalyzerError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalyzerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a reqwest error with the URL being fetched.
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        AnalyzerError::Http {
            url: url.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
