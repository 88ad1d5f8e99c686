// ============================================================
// Layer 4 - Dataset Loader
// ============================================================
// Reads the labelled news CSV into NewsRow values.
//
// Expected header (extra columns are ignored):
//   ...,text,title,label,...
//
// Empty text/title cells become empty strings. The label must
// parse as an integer; "3.0" is accepted because the files
// were exported from a dataframe that sometimes wrote floats.
//
// Reference: csv crate documentation (serde deserialisation)
//            Rust Book §9 (Error Handling)

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::news_row::NewsRow;
use crate::domain::traits::RowSource;

/// Loads rows from one CSV file on disk.
pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Raw CSV record before label parsing
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    title: Option<String>,
    label: String,
}

impl RowSource for CsvRowSource {
    fn load_rows(&self) -> Result<Vec<NewsRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open dataset '{}'", self.path.display()))?;

        let mut rows = Vec::new();
        for (i, record) in reader.deserialize::<RawRow>().enumerate() {
            // +2: one for the header, one for 1-based line numbers
            let line = i + 2;
            let raw = record.with_context(|| {
                format!("Malformed row at line {} of '{}'", line, self.path.display())
            })?;
            let label = parse_label(&raw.label).with_context(|| {
                format!("Bad label at line {} of '{}'", line, self.path.display())
            })?;
            rows.push(NewsRow::new(
                raw.text.unwrap_or_default(),
                raw.title.unwrap_or_default(),
                label,
            ));
        }

        tracing::info!("Loaded {} rows from '{}'", rows.len(), self.path.display());
        Ok(rows)
    }
}

/// Parse an integer class label, tolerating an integral float.
fn parse_label(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Ok(v);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && v.is_finite() => Ok(v as i64),
        _ => Err(anyhow!("label '{}' is not an integer", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_by_header_name() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("semeval.csv");
        fs::write(
            &path,
            "id,title,text,label\n\
             1,First,\"Body, with comma\",1\n\
             2,Second,Other body,0\n",
        )
        .unwrap();

        let rows = CsvRowSource::new(&path).load_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], NewsRow::new("Body, with comma", "First", 1));
        assert_eq!(rows[1].label, 0);
    }

    #[test]
    fn test_empty_cells_become_empty_strings() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("d.csv");
        fs::write(&path, "text,title,label\n,,2\n").unwrap();

        let rows = CsvRowSource::new(&path).load_rows().unwrap();
        assert_eq!(rows[0], NewsRow::new("", "", 2));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = CsvRowSource::new(dir.path().join("nope.csv"))
            .load_rows()
            .unwrap_err();
        assert!(err.to_string().contains("Cannot open dataset"));
    }

    #[test]
    fn test_bad_label_is_error() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("d.csv");
        fs::write(&path, "text,title,label\nbody,head,left\n").unwrap();

        assert!(CsvRowSource::new(&path).load_rows().is_err());
    }

    #[test]
    fn test_parse_label_accepts_integral_float() {
        assert_eq!(parse_label("4").unwrap(), 4);
        assert_eq!(parse_label(" 3.0 ").unwrap(), 3);
        assert!(parse_label("2.5").is_err());
    }
}
