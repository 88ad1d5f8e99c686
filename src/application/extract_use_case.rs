// ============================================================
// Layer 2 - ExtractUseCase
// ============================================================
// Turns the AllSides metadata XML into flat CSV files:
//
//   Step 1: Parse every <article>              (Layer 4 - data)
//   Step 2: Split into four aligned columns
//   Step 3: Tally articles per event tag       (Layer 4 - data)
//   Step 4: Write five BOM-prefixed CSV files  (Layer 6 - infra)
//
//   parsed_title.csv  parsed_url.csv  parsed_label.csv
//   parsed_event.csv  event_count.csv

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::metadata::{EventTally, XmlArticleSource};
use crate::domain::{article::ArticleRecord, traits::ArticleSource};
use crate::infra::csv_export::{write_column, write_event_count};

pub const TITLE_FILE:       &str = "parsed_title.csv";
pub const URL_FILE:         &str = "parsed_url.csv";
pub const LABEL_FILE:       &str = "parsed_label.csv";
pub const EVENT_FILE:       &str = "parsed_event.csv";
pub const EVENT_COUNT_FILE: &str = "event_count.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub xml_path:   PathBuf,
    pub output_dir: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            xml_path:   PathBuf::from("data/allsides_metadata.xml"),
            output_dir: PathBuf::from("data"),
        }
    }
}

/// The four aligned columns, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleColumns {
    pub titles: Vec<String>,
    pub urls:   Vec<String>,
    pub labels: Vec<String>,
    pub events: Vec<String>,
}

impl ArticleColumns {
    pub fn from_records(records: Vec<ArticleRecord>) -> Self {
        let mut cols = Self::default();
        for r in records {
            cols.titles.push(r.title);
            cols.urls.push(r.url);
            cols.labels.push(r.bias_label);
            cols.events.push(r.event);
        }
        cols
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// What one extraction run produced
#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub columns: ArticleColumns,
    pub tally:   EventTally,
    pub files:   Vec<PathBuf>,
}

pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<ExtractReport> {
        let source = XmlArticleSource::new(&self.config.xml_path);
        self.execute_from(&source)
    }

    /// Run the extraction against any article source.
    pub fn execute_from<S: ArticleSource>(&self, source: &S) -> Result<ExtractReport> {
        let cfg = &self.config;

        // ── Step 1 + 2: Parse and split into columns ──────────────────────────
        let columns = ArticleColumns::from_records(source.load_articles()?);

        // ── Step 3: Event tally ───────────────────────────────────────────────
        let tally = EventTally::from_events(columns.events.iter().map(String::as_str));
        tracing::info!("event count: {}", columns.len());
        tracing::info!("event types: {}", tally.distinct());

        // ── Step 4: Write files ───────────────────────────────────────────────
        std::fs::create_dir_all(&cfg.output_dir)
            .with_context(|| format!("Cannot create '{}'", cfg.output_dir.display()))?;

        let out = |name: &str| cfg.output_dir.join(name);
        let files = vec![
            out(TITLE_FILE),
            out(URL_FILE),
            out(LABEL_FILE),
            out(EVENT_FILE),
            out(EVENT_COUNT_FILE),
        ];

        write_column(&files[0], "title", &columns.titles)?;
        write_column(&files[1], "url",   &columns.urls)?;
        write_column(&files[2], "label", &columns.labels)?;
        write_column(&files[3], "event", &columns.events)?;
        write_event_count(&files[4], &tally)?;

        tracing::info!(
            "Wrote {} articles to '{}'",
            columns.len(),
            cfg.output_dir.display()
        );

        Ok(ExtractReport { columns, tally, files })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    struct FixedArticles(Vec<ArticleRecord>);

    impl ArticleSource for FixedArticles {
        fn load_articles(&self) -> Result<Vec<ArticleRecord>> {
            Ok(self.0.clone())
        }
    }

    fn articles(events: &[&str]) -> FixedArticles {
        FixedArticles(
            events
                .iter()
                .enumerate()
                .map(|(i, e)| {
                    ArticleRecord::new(
                        format!("Headline {}", i),
                        format!("https://news.example/{}", i),
                        if i % 2 == 0 { "Left" } else { "Right" },
                        *e,
                    )
                })
                .collect(),
        )
    }

    fn read_bom_csv(path: &std::path::Path) -> String {
        let bytes = fs::read(path).unwrap();
        String::from_utf8(bytes[3..].to_vec()).unwrap()
    }

    #[test]
    fn test_columns_aligned_and_tally_sums() {
        let dir    = tempdir().unwrap();
        let events = ["A", "A", "B", "C", "A", "B", "B", "C", "C", "C"];
        let uc     = ExtractUseCase::new(ExtractConfig {
            xml_path:   PathBuf::new(),
            output_dir: dir.path().to_path_buf(),
        });

        let report = uc.execute_from(&articles(&events)).unwrap();
        let cols   = &report.columns;

        assert_eq!(cols.len(), 10);
        assert_eq!(cols.urls.len(), 10);
        assert_eq!(cols.labels.len(), 10);
        assert_eq!(cols.events.len(), 10);
        assert_eq!(report.tally.total(), 10);
        assert_eq!(report.tally.distinct(), 3);
        assert_eq!(report.tally.count("C"), 4);
    }

    #[test]
    fn test_writes_five_files() {
        let dir = tempdir().unwrap();
        let uc  = ExtractUseCase::new(ExtractConfig {
            xml_path:   PathBuf::new(),
            output_dir: dir.path().join("parsed"),
        });

        let report = uc.execute_from(&articles(&["x", "y", "x"])).unwrap();
        assert_eq!(report.files.len(), 5);
        for f in &report.files {
            assert!(f.exists(), "{} missing", f.display());
        }

        let labels = read_bom_csv(&dir.path().join("parsed").join(LABEL_FILE));
        assert_eq!(labels, "label\nLeft\nRight\nLeft\n");

        let counts = read_bom_csv(&dir.path().join("parsed").join(EVENT_COUNT_FILE));
        assert_eq!(counts, "x,y\n2,1\n");
    }

    #[test]
    fn test_reads_xml_from_disk() {
        let dir = tempdir().unwrap();
        let xml = dir.path().join("meta.xml");
        fs::write(
            &xml,
            "<articles><article><title>T</title><url>U</url>\
             <news-source-bias>Lean Left</news-source-bias><event>E</event>\
             </article></articles>",
        )
        .unwrap();

        let report = ExtractUseCase::new(ExtractConfig {
            xml_path:   xml,
            output_dir: dir.path().to_path_buf(),
        })
        .execute()
        .unwrap();

        assert_eq!(report.columns.labels, vec!["Lean Left"]);
        let titles = read_bom_csv(&dir.path().join(TITLE_FILE));
        assert_eq!(titles, "title\nT\n");
    }

    #[test]
    fn test_missing_xml_is_error() {
        let dir = tempdir().unwrap();
        let res = ExtractUseCase::new(ExtractConfig {
            xml_path:   dir.path().join("absent.xml"),
            output_dir: dir.path().to_path_buf(),
        })
        .execute();
        assert!(res.is_err());
    }
}
