//! Word lists used by the metrics engine.
//!
//! Two sources feed the lexicons:
//!
//! - a directory of stop-word files with arbitrary names, one word per line
//! - a master dictionary directory holding `positive-words.txt` and
//!   `negative-words.txt`
//!
//! Files are decoded lossily so Latin-1 word lists still load.

use crate::error::{AnalyzerError, Result};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

pub const POSITIVE_WORDS_FILE: &str = "positive-words.txt";
pub const NEGATIVE_WORDS_FILE: &str = "negative-words.txt";

/// The three word sets an analysis runs against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicons {
    pub stop_words: HashSet<String>,
    pub positive_words: HashSet<String>,
    pub negative_words: HashSet<String>,
}

/// Load stop words and the master dictionary.
#[instrument(level = "info", skip_all, fields(stop_words_dir = %stop_words_dir.display(), master_dict_dir = %master_dict_dir.display()))]
pub async fn load_lexicons(stop_words_dir: &Path, master_dict_dir: &Path) -> Result<Lexicons> {
    let stop_words = load_stop_words(stop_words_dir).await?;
    let (positive_words, negative_words) = load_master_dictionary(master_dict_dir).await?;
    Ok(Lexicons {
        stop_words,
        positive_words,
        negative_words,
    })
}

/// Union every line of every file in `folder` into one set.
///
/// Lines are kept verbatim (no trimming, case preserved) except that empty
/// lines are not inserted. `\n`, `\r\n` and a lone `\r` all end a line.
/// Subdirectories are skipped.
///
/// # Arguments
///
/// * `folder` - Directory of word lists; every regular file in it is read
///
/// # Returns
///
/// The set of all lines, or an [`AnalyzerError::Io`] naming the folder or file
/// that could not be read.
#[instrument(level = "info", skip_all, fields(folder = %folder.display()))]
pub async fn load_stop_words(folder: &Path) -> Result<HashSet<String>> {
    let mut entries = fs::read_dir(folder)
        .await
        .map_err(|e| AnalyzerError::io(folder, e))?;

    let mut stop_words = HashSet::new();
    let mut files = 0usize;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AnalyzerError::io(folder, e))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| AnalyzerError::io(&path, e))?;
        if file_type.is_dir() {
            debug!(path = %path.display(), "Skipping directory in stop-words folder");
            continue;
        }

        let content = read_lossy(&path).await?;
        stop_words.extend(split_lines(&content).map(str::to_string));
        files += 1;
    }

    info!(files, count = stop_words.len(), "Loaded stop words");
    Ok(stop_words)
}

/// Read `positive-words.txt` and `negative-words.txt` from `folder`.
///
/// Each line is trimmed; blank lines are discarded.
///
/// # Returns
///
/// `(positive, negative)` word sets.
#[instrument(level = "info", skip_all, fields(folder = %folder.display()))]
pub async fn load_master_dictionary(folder: &Path) -> Result<(HashSet<String>, HashSet<String>)> {
    let positive = load_word_list(&folder.join(POSITIVE_WORDS_FILE)).await?;
    let negative = load_word_list(&folder.join(NEGATIVE_WORDS_FILE)).await?;

    info!(
        positive = positive.len(),
        negative = negative.len(),
        "Loaded master dictionary"
    );
    Ok((positive, negative))
}

async fn load_word_list(path: &Path) -> Result<HashSet<String>> {
    let content = read_lossy(path).await?;
    Ok(split_lines(&content)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect())
}

/// Non-empty lines of `content`, split on `\n`, `\r\n` and lone `\r`.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(['\r', '\n']).filter(|l| !l.is_empty())
}

async fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| AnalyzerError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
