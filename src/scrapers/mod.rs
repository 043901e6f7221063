//! Article scraping.
//!
//! Pages are fetched with a single GET and parsed with fixed tag selectors:
//!
//! | Field | Selector | Rule |
//! |-------|----------|------|
//! | title | `h1` | first match, trimmed; `"No Title"` when absent |
//! | body  | `p`  | every match in document order, each trimmed, joined by one space |
//!
//! Any response status is parsed, so an error page still produces an article.
//! There is no retry. A transport failure surfaces as an error to the caller,
//! which aborts the batch.

pub mod article;

pub use article::{ArticleFetcher, FetchOptions};
