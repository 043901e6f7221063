//! # Article Metrics
//!
//! Scrapes article pages from a list of URLs and computes readability and
//! sentiment metrics for each article, writing the results to a spreadsheet.
//!
//! ## Metrics
//!
//! - Positive and negative word counts, polarity and subjectivity scores
//! - Average sentence length, percentage of complex words and the Gunning fog index
//! - Word count, complex word count, syllables per word and average word length
//! - Personal pronoun count
//!
//! ## Usage
//!
//! ```sh
//! article_metrics -s ./StopWords -d ./MasterDictionary -i Input.xlsx -o Output.xlsx
//! ```
//!
//! ## Architecture
//!
//! The application is a sequential pipeline:
//! 1. **Lexicons**: Load stop words and the positive/negative master dictionary
//! 2. **Input**: Read the `URL` column of the input table
//! 3. **Scraping**: Fetch each page and extract its `h1` title and `p` body text
//! 4. **Analysis**: Compute the metrics record for each body
//! 5. **Output**: Write the fixed 13-column table

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod inputs;
mod lexicon;
mod metrics;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!("article_metrics starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = Config::from_cli(&args).await.inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    let summary = pipeline::run(&config).await.inspect_err(|e| {
        error!(error = %e, "Run aborted");
    })?;

    info!(
        articles = summary.articles,
        secs = summary.elapsed.as_secs(),
        millis = summary.elapsed.subsec_millis(),
        "Execution complete"
    );
    println!(
        "Analysis completed. Results for {} articles saved to {}.",
        summary.articles,
        config.output.display()
    );

    Ok(())
}
