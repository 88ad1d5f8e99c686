// ============================================================
// Layer 6 - CSV Export
// ============================================================
// Writes the extractor's flat files. Every file starts with a
// UTF-8 byte-order mark so spreadsheet tools pick the right
// encoding for non-ASCII headlines.
//
//   write_column      → header row + one value per row
//   write_event_count → header of event tags + one row of counts
//
// Reference: csv crate documentation

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::data::metadata::EventTally;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn bom_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(UTF8_BOM)?;
    Ok(csv::Writer::from_writer(out))
}

/// Write a single-column CSV: `header`, then one row per value.
pub fn write_column<S: AsRef<str>>(path: &Path, header: &str, values: &[S]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    writer.write_record([header])?;
    for value in values {
        writer.write_record([value.as_ref()])?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to '{}'", values.len(), path.display());
    Ok(())
}

/// Write the frequency table: event tags as the header, counts as one row.
pub fn write_event_count(path: &Path, tally: &EventTally) -> Result<()> {
    let mut writer = bom_writer(path)?;
    writer.write_record(tally.events())?;
    writer.write_record(tally.entries().iter().map(|(_, n)| n.to_string()))?;
    writer.flush()?;

    tracing::debug!("Wrote {} event counts to '{}'", tally.distinct(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_column_has_bom_and_header() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("parsed_title.csv");
        write_column(&path, "title", &["Senate passes bill", "Tax, again"]).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "title\nSenate passes bill\n\"Tax, again\"\n");
    }

    #[test]
    fn test_event_count_layout() {
        let dir   = tempdir().unwrap();
        let path  = dir.path().join("event_count.csv");
        let tally = EventTally::from_events(["A", "A", "B", "C", "A", "B", "B", "C", "C", "C"]);
        write_event_count(&path, &tally).unwrap();

        let bytes = fs::read(&path).unwrap();
        let text  = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "A,B,C\n3,3,4\n");
    }

    #[test]
    fn test_empty_column_writes_header_only() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("parsed_url.csv");
        write_column::<&str>(&path, "url", &[]).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[UTF8_BOM.len()..], b"url\n");
    }
}
