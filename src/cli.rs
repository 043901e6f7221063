//! Command-line interface definitions.
//!
//! The four paths can come from flags, from environment variables, or from a
//! YAML file passed with `--config`. Flags and environment variables win over
//! the file; see [`crate::config::Config::resolve`].

use crate::metrics::MatchMode;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// article_metrics -s ./StopWords -d ./MasterDictionary -i Input.xlsx -o Output.xlsx
///
/// # Everything from a file, output overridden
/// article_metrics -c metrics.yaml -o /tmp/out.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory of stop-word files (one word per line, any file names)
    #[arg(short, long, env = "ARTICLE_METRICS_STOP_WORDS_DIR")]
    pub stop_words_dir: Option<PathBuf>,

    /// Directory containing positive-words.txt and negative-words.txt
    #[arg(short = 'd', long, env = "ARTICLE_METRICS_MASTER_DICT_DIR")]
    pub master_dict_dir: Option<PathBuf>,

    /// Input table (.xlsx, .xls, .ods or .csv) with a URL column
    #[arg(short, long, env = "ARTICLE_METRICS_INPUT")]
    pub input: Option<PathBuf>,

    /// Output table (.xlsx, .csv or .json)
    #[arg(short, long, env = "ARTICLE_METRICS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with each request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Also write the Title and URL columns
    #[arg(long)]
    pub keep_source_columns: bool,

    /// How tokens are matched against the word lists
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchMode>,
}
