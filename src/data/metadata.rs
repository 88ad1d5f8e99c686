// ============================================================
// Layer 4 - AllSides Metadata Parser
// ============================================================
// Reads the metadata XML and turns every <article> child of the
// root element into an ArticleRecord, in document order.
//
//   <articles>
//     <article>
//       <title/> <url/> <news-source-bias/> <event/>
//     </article>
//     ...
//   </articles>
//
// A DOCTYPE declaration is accepted. A missing child element
// is a schema error and aborts the whole parse. A present but
// empty element yields "".
//
// EventTally counts articles per event tag, keeping the order
// in which tags first appear so the frequency table columns
// line up with the source file.

use anyhow::{anyhow, Context, Result};
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
};

use crate::domain::article::ArticleRecord;
use crate::domain::traits::ArticleSource;

pub const ARTICLE_TAG: &str = "article";
pub const TITLE_TAG:   &str = "title";
pub const URL_TAG:     &str = "url";
pub const BIAS_TAG:    &str = "news-source-bias";
pub const EVENT_TAG:   &str = "event";

/// Loads articles from an XML file on disk.
pub struct XmlArticleSource {
    path: PathBuf,
}

impl XmlArticleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArticleSource for XmlArticleSource {
    fn load_articles(&self) -> Result<Vec<ArticleRecord>> {
        let xml = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read metadata '{}'", self.path.display()))?;
        parse_articles(&xml)
            .with_context(|| format!("Invalid metadata in '{}'", self.path.display()))
    }
}

/// Parse every `<article>` under the root element.
pub fn parse_articles(xml: &str) -> Result<Vec<ArticleRecord>> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options)?;

    doc.root_element()
        .children()
        .filter(|n| n.has_tag_name(ARTICLE_TAG))
        .enumerate()
        .map(|(i, article)| -> Result<ArticleRecord> {
            Ok(ArticleRecord::new(
                child_text(&article, TITLE_TAG, i)?,
                child_text(&article, URL_TAG, i)?,
                child_text(&article, BIAS_TAG, i)?,
                child_text(&article, EVENT_TAG, i)?,
            ))
        })
        .collect()
}

fn child_text(article: &roxmltree::Node<'_, '_>, tag: &str, position: usize) -> Result<String> {
    let child = article
        .children()
        .find(|c| c.has_tag_name(tag))
        .ok_or_else(|| anyhow!("article #{} has no <{}> element", position + 1, tag))?;
    Ok(child.text().unwrap_or_default().to_string())
}

// ─── EventTally ───────────────────────────────────────────────────────────────
/// Per-event article counts in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTally {
    counts:   Vec<(String, usize)>,
    position: HashMap<String, usize>,
}

impl EventTally {
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = Self::default();
        for event in events {
            tally.add(event);
        }
        tally
    }

    pub fn add(&mut self, event: &str) {
        match self.position.get(event) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.position.insert(event.to_string(), self.counts.len());
                self.counts.push((event.to_string(), 1));
            }
        }
    }

    pub fn count(&self, event: &str) -> usize {
        self.position
            .get(event)
            .map(|&i| self.counts[i].1)
            .unwrap_or(0)
    }

    /// Number of distinct event tags
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts (equals the article count)
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Deduplicated event tags in first-occurrence order
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.counts.iter().map(|(e, _)| e.as_str())
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<articles>
  <article>
    <title>Senate passes bill</title>
    <url>https://example.com/a</url>
    <news-source-bias>Left</news-source-bias>
    <event>budget-2020</event>
  </article>
  <article>
    <title>Bill clears Senate</title>
    <url>https://example.com/b</url>
    <news-source-bias>Right</news-source-bias>
    <event>budget-2020</event>
  </article>
  <article>
    <title></title>
    <url>https://example.com/c</url>
    <news-source-bias>Center</news-source-bias>
    <event>election</event>
  </article>
</articles>"#;

    #[test]
    fn test_parses_articles_in_order() {
        let articles = parse_articles(SAMPLE).unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(
            articles[0],
            ArticleRecord::new(
                "Senate passes bill",
                "https://example.com/a",
                "Left",
                "budget-2020"
            )
        );
        assert_eq!(articles[2].bias_label, "Center");
    }

    #[test]
    fn test_empty_element_is_empty_string() {
        let articles = parse_articles(SAMPLE).unwrap();
        assert_eq!(articles[2].title, "");
    }

    #[test]
    fn test_missing_child_is_error() {
        let xml = "<articles><article><title>t</title><url>u</url>\
                   <event>e</event></article></articles>";
        let err = parse_articles(xml).unwrap_err();
        assert!(err.to_string().contains("news-source-bias"));
    }

    #[test]
    fn test_accepts_doctype_declaration() {
        let xml = "<?xml version=\"1.0\"?>\n\
                   <!DOCTYPE articles>\n\
                   <articles><article><title>t</title><url>u</url>\
                   <news-source-bias>Right</news-source-bias><event>e</event>\
                   </article></articles>";
        let articles = parse_articles(xml).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].bias_label, "Right");
    }

    #[test]
    fn test_ignores_non_article_children() {
        let xml = "<articles><meta>x</meta><article><title>t</title><url>u</url>\
                   <news-source-bias>Left</news-source-bias><event>e</event>\
                   </article></articles>";
        assert_eq!(parse_articles(xml).unwrap().len(), 1);
    }

    #[test]
    fn test_tally_counts_and_order() {
        let events = ["A", "A", "B", "C", "A", "B", "B", "C", "C", "C"];
        let tally  = EventTally::from_events(events);

        assert_eq!(tally.count("A"), 3);
        assert_eq!(tally.count("B"), 3);
        assert_eq!(tally.count("C"), 4);
        assert_eq!(tally.distinct(), 3);
        assert_eq!(tally.total(), events.len());
        assert_eq!(tally.events().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_tally_unknown_event_is_zero() {
        let tally = EventTally::from_events(["x"]);
        assert_eq!(tally.count("y"), 0);
    }
}
