// ============================================================
// Layer 4 - News Dataset
// ============================================================
// One partition (train, validation or test) held in memory.
// Burn's DataLoader pulls rows from it by index and hands them
// to NewsBatcher.
//
// Reference: Burn Book §4 (Dataset trait)

use burn::data::dataset::Dataset;

use crate::domain::news_row::NewsRow;

/// In-memory partition of normalised rows, served to Burn's DataLoader.
pub struct NewsDataset {
    rows: Vec<NewsRow>,
}

impl NewsDataset {
    pub fn new(rows: Vec<NewsRow>) -> Self { Self { rows } }
}

impl Dataset<NewsRow> for NewsDataset {
    fn get(&self, index: usize) -> Option<NewsRow> {
        self.rows.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
