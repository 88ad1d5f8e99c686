// ============================================================
// Layer 3 - NewsRow Domain Type
// ============================================================
// A single labelled example of the news-bias dataset.
//
// The CSV files carry more columns than these three; serde
// ignores the rest when deserialising by header name.

use serde::{Deserialize, Serialize};

/// One labelled news article: body text, headline, class index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRow {
    /// Article body. Normalised once after loading.
    pub text: String,

    /// Headline. Left raw; the tokenizer lowercases it.
    pub title: String,

    /// Integer class index in `0..num_class`
    pub label: i64,
}

impl NewsRow {
    pub fn new(text: impl Into<String>, title: impl Into<String>, label: i64) -> Self {
        Self {
            text:  text.into(),
            title: title.into(),
            label,
        }
    }
}
