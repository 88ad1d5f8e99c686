// ============================================================
// Layer 3 - ArticleRecord Domain Type
// ============================================================
// One <article> node of the AllSides metadata file:
//
//   <article>
//     <title>...</title>
//     <url>...</url>
//     <news-source-bias>Left</news-source-bias>
//     <event>...</event>
//   </article>
//
// Records are produced by the metadata extractor and are
// never mutated afterwards.

use serde::{Deserialize, Serialize};

/// The four text fields carried by every metadata article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub url: String,
    /// Bias rating of the publishing source, e.g. "Left", "Center"
    pub bias_label: String,
    /// Event tag grouping articles that cover the same story
    pub event: String,
}

impl ArticleRecord {
    pub fn new(
        title:      impl Into<String>,
        url:        impl Into<String>,
        bias_label: impl Into<String>,
        event:      impl Into<String>,
    ) -> Self {
        Self {
            title:      title.into(),
            url:        url.into(),
            bias_label: bias_label.into(),
            event:      event.into(),
        }
    }
}
