//! Run configuration.
//!
//! Values are merged from two layers:
//!
//! 1. [`Cli`] flags, which clap has already merged with their environment variables
//! 2. an optional YAML [`FileConfig`]
//!
//! The first layer that sets a value wins. The four paths are mandatory.
//!
//! ```yaml
//! stop_words_dir: ./StopWords
//! master_dict_dir: ./MasterDictionary
//! input: ./Input.xlsx
//! output: ./Output.xlsx
//! timeout_secs: 30
//! match_mode: exact
//! keep_source_columns: false
//! ```

use crate::cli::Cli;
use crate::error::{AnalyzerError, Result};
use crate::metrics::MatchMode;
use crate::models::Projection;
use crate::scrapers::FetchOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::{debug, instrument};

/// Contents of a YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub stop_words_dir: Option<PathBuf>,
    pub master_dict_dir: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub keep_source_columns: Option<bool>,
    pub match_mode: Option<MatchMode>,
}

impl FileConfig {
    /// Read and parse a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| AnalyzerError::io(path, e))?;
        Ok(serde_yaml::from_str(&raw)?)
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub stop_words_dir: PathBuf,
    pub master_dict_dir: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub fetch: FetchOptions,
    pub keep_source_columns: bool,
    pub match_mode: MatchMode,
}

impl Config {
    /// Load the config file named by `--config` (if any) and merge it under `cli`.
    pub async fn from_cli(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path).await?,
            None => FileConfig::default(),
        };
        Self::resolve(cli, file)
    }

    /// Merge `cli` over `file`, failing on the first missing mandatory path.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let required = |cli_value: &Option<PathBuf>, file_value: Option<PathBuf>, key| {
            cli_value
                .clone()
                .or(file_value)
                .ok_or(AnalyzerError::MissingConfig(key))
        };

        let config = Config {
            stop_words_dir: required(&cli.stop_words_dir, file.stop_words_dir, "stop_words_dir")?,
            master_dict_dir: required(&cli.master_dict_dir, file.master_dict_dir, "master_dict_dir")?,
            input: required(&cli.input, file.input, "input")?,
            output: required(&cli.output, file.output, "output")?,
            fetch: FetchOptions {
                timeout: cli
                    .timeout_secs
                    .or(file.timeout_secs)
                    .map(Duration::from_secs),
                user_agent: cli.user_agent.clone().or(file.user_agent),
            },
            keep_source_columns: cli.keep_source_columns
                || file.keep_source_columns.unwrap_or(false),
            match_mode: cli.match_mode.or(file.match_mode).unwrap_or_default(),
        };
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Columns written to the output table.
    pub fn projection(&self) -> Projection {
        if self.keep_source_columns {
            Projection::with_source_columns()
        } else {
            Projection::metrics_only()
        }
    }
}
