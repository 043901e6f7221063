//! Generic article page scraper.

use crate::error::{AnalyzerError, Result};
use crate::models::Article;
use crate::utils::truncate_for_log;
use encoding_rs::{Encoding, UTF_8};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Title used when a page has no `h1`.
pub const NO_TITLE: &str = "No Title";

static HEADLINE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("valid h1 selector"));
static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("valid p selector"));
static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]+charset\s*=\s*["']?([a-z0-9_.:\-]+)"#)
        .expect("valid meta charset regex")
});

/// How far into the document to look for a `<meta charset>` declaration.
const META_SNIFF_BYTES: usize = 2048;

/// HTTP client options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOptions {
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Overrides the client's default `User-Agent` header.
    pub user_agent: Option<String>,
}

/// Fetches article pages and extracts their title and body text.
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
    client: Client,
}

impl ArticleFetcher {
    /// Build a fetcher with one shared HTTP client.
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(ua) = &options.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        let client = builder.build().map_err(AnalyzerError::Client)?;
        Ok(Self { client })
    }

    /// Fetch `url` and extract its title and body text.
    ///
    /// The page is parsed whatever the response status: an error page still
    /// yields an article (usually with its own heading as the title). Non-2xx
    /// statuses are logged at `warn`.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL of the article page
    ///
    /// # Returns
    ///
    /// The scraped [`Article`], with `body_text` decoded using the charset from
    /// the `Content-Type` header, else the document's `<meta charset>`, else UTF-8.
    ///
    /// # Errors
    ///
    /// - [`AnalyzerError::InvalidUrl`] if `url` does not parse
    /// - [`AnalyzerError::Http`] on transport failure or when the body cannot
    ///   be read
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn extract_article_text(&self, url: &str) -> Result<Article> {
        let parsed = Url::parse(url).map_err(|source| AnalyzerError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| AnalyzerError::http(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Non-success status; parsing the page anyway");
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AnalyzerError::http(url, e))?;
        let body = decode_body(&bytes, content_type.as_deref());

        let (title, body_text) = parse_article(&body);
        info!(
            bytes = body.len(),
            body_chars = body_text.len(),
            %title,
            "Parsed article"
        );
        debug!(preview = %truncate_for_log(&body_text, 200), "Article body");

        Ok(Article {
            title,
            url: url.to_string(),
            body_text,
        })
    }
}

/// Decode an HTML body, preferring the header charset over a `<meta charset>`.
///
/// Unknown labels are ignored. A UTF-8 or UTF-16 BOM always wins, and
/// malformed sequences become U+FFFD.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(header_charset)
        .or_else(|| meta_charset(body))
        .unwrap_or(UTF_8);
    let (decoded, used, had_errors) = encoding.decode(body);
    if had_errors {
        debug!(encoding = used.name(), "Body had malformed sequences");
    }
    decoded.into_owned()
}

fn header_charset(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches(|c: char| c == '"' || c == '\''))
        })
        .find_map(|label| Encoding::for_label(label.as_bytes()))
}

fn meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SNIFF_BYTES)];
    let caps = META_CHARSET.captures(head)?;
    Encoding::for_label(caps.get(1)?.as_bytes())
}

/// Extract `(title, body_text)` from an HTML document.
pub fn parse_article(html: &str) -> (String, String) {
    let document = Html::parse_document(html);

    let title = document
        .select(&HEADLINE_SELECTOR)
        .next()
        .map(|h1| h1.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let body_text = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .join(" ");

    (title, body_text)
}
