// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits rather
// than concrete loaders:
//   - XmlArticleSource implements ArticleSource
//   - CsvRowSource     implements RowSource
//
// Tests substitute in-memory implementations.

use anyhow::Result;

use crate::domain::{article::ArticleRecord, news_row::NewsRow};

// ─── ArticleSource ────────────────────────────────────────────────────────────
/// Anything that can yield the metadata articles in document order.
pub trait ArticleSource {
    fn load_articles(&self) -> Result<Vec<ArticleRecord>>;
}

// ─── RowSource ────────────────────────────────────────────────────────────────
/// Anything that can yield the raw (un-normalised) dataset rows.
pub trait RowSource {
    fn load_rows(&self) -> Result<Vec<NewsRow>>;
}

/// A fixed list of rows is its own source.
impl RowSource for Vec<NewsRow> {
    fn load_rows(&self) -> Result<Vec<NewsRow>> {
        Ok(self.clone())
    }
}
