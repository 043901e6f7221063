//! Batch driver.
//!
//! 1. **Preflight**: validate the output format and make sure its directory is writable
//! 2. **Lexicons**: load stop words and the master dictionary
//! 3. **Input**: read the URL list
//! 4. **Analysis**: fetch and analyze each URL strictly in order
//! 5. **Output**: project the rows and write the table
//!
//! The first error from any step aborts the run. No output file is written
//! unless every URL was processed.

use crate::config::Config;
use crate::error::Result;
use crate::inputs::read_urls;
use crate::lexicon::{Lexicons, load_lexicons};
use crate::metrics::{MatchMode, analyze};
use crate::models::ResultRow;
use crate::outputs::{OutputFormat, write_table};
use crate::scrapers::ArticleFetcher;
use crate::utils::ensure_writable_parent;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub articles: usize,
    pub elapsed: Duration,
}

/// Execute the whole pipeline described by `config`.
#[instrument(level = "info", skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub async fn run(config: &Config) -> Result<RunSummary> {
    let t0 = Instant::now();

    OutputFormat::from_path(&config.output)?;
    ensure_writable_parent(&config.output).await?;

    let lexicons = load_lexicons(&config.stop_words_dir, &config.master_dict_dir).await?;
    let urls = read_urls(&config.input)?;
    let fetcher = ArticleFetcher::new(&config.fetch)?;

    let rows = analyze_urls(&fetcher, &urls, &lexicons, config.match_mode).await?;

    write_table(&config.output, &config.projection(), &rows).await?;

    let summary = RunSummary {
        articles: rows.len(),
        elapsed: t0.elapsed(),
    };
    info!(articles = summary.articles, ?summary.elapsed, "Run complete");
    Ok(summary)
}

/// Fetch and analyze `urls` one at a time, keeping input order.
///
/// # Arguments
///
/// * `fetcher` - Shared HTTP client used for every page
/// * `urls` - Article URLs in input order
/// * `lexicons` - Word sets the metrics are computed against
/// * `mode` - How tokens are compared with the lexicons
///
/// # Returns
///
/// One [`ResultRow`] per URL, in the same order. Pages served with an error
/// status still produce a row. The first transport failure stops the loop and
/// is returned instead.
#[instrument(level = "info", skip_all, fields(count = urls.len()))]
pub async fn analyze_urls(
    fetcher: &ArticleFetcher,
    urls: &[String],
    lexicons: &Lexicons,
    mode: MatchMode,
) -> Result<Vec<ResultRow>> {
    let mut rows = Vec::with_capacity(urls.len());
    for (index, url) in urls.iter().enumerate() {
        let article = fetcher.extract_article_text(url).await?;
        let metrics = analyze(&article.body_text, lexicons, mode);
        debug!(index, %url, word_count = metrics.word_count, "Analyzed article");

        rows.push(ResultRow {
            title: article.title,
            url: article.url,
            metrics,
        });
    }
    info!(count = rows.len(), "Analyzed all articles");
    Ok(rows)
}
