// ============================================================
// Layer 4 - News Batcher (collation)
// ============================================================
// Implements Burn's Batcher trait: turns a Vec<NewsRow> into
// three integer tensors on the target device.
//
// Per row:
//   title → tokenize → vocabulary indices → pad/truncate
//   text  → tokenize → vocabulary indices → pad/truncate
//   label → i64
//
// Pad/truncate to exactly `max_len`:
//   shorter → append <unk> indices until max_len
//   longer  → keep the first max_len indices
//
// Output shapes for N rows:
//   labels: [N]
//   titles: [N, max_len]
//   texts:  [N, max_len]
//
// Reference: Burn Book §4 (Batcher)

use std::sync::Arc;

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::{tokenizer::BasicTokenizer, vocab::Vocabulary};
use crate::domain::news_row::NewsRow;

// ─── NewsBatch ────────────────────────────────────────────────────────────────
/// One labelled mini-batch. All tensors share the batch dimension.
#[derive(Debug, Clone)]
pub struct NewsBatch<B: Backend> {
    /// Class indices - shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,

    /// Headline token indices - shape: [batch_size, max_len]
    pub titles: Tensor<B, 2, Int>,

    /// Body token indices - shape: [batch_size, max_len]
    pub texts: Tensor<B, 2, Int>,
}

// ─── NewsBatcher ──────────────────────────────────────────────────────────────
#[derive(Clone, Debug)]
pub struct NewsBatcher<B: Backend> {
    device:    B::Device,
    vocab:     Arc<Vocabulary>,
    tokenizer: BasicTokenizer,
    max_len:   usize,
}

impl<B: Backend> NewsBatcher<B> {
    pub fn new(device: B::Device, vocab: Arc<Vocabulary>, max_len: usize) -> Self {
        Self {
            device,
            vocab,
            tokenizer: BasicTokenizer::new(),
            max_len,
        }
    }

    /// Tokenize, index, and pad/truncate one string to `max_len`.
    pub fn encode(&self, text: &str) -> Vec<usize> {
        let tokens = self.tokenizer.tokenize(text);
        let mut ids = self.vocab.lookup_indices(&tokens);
        ids.resize(self.max_len, self.vocab.unk_index());
        ids
    }

    fn stack(&self, rows: &[Vec<usize>]) -> Tensor<B, 2, Int> {
        let flat: Vec<i64> = rows
            .iter()
            .flat_map(|ids| ids.iter().map(|&id| id as i64))
            .collect();

        Tensor::<B, 1, Int>::from_ints(flat.as_slice(), &self.device)
            .reshape([rows.len(), self.max_len])
    }
}

impl<B: Backend> Batcher<NewsRow, NewsBatch<B>> for NewsBatcher<B> {
    fn batch(&self, items: Vec<NewsRow>) -> NewsBatch<B> {
        let labels: Vec<i64> = items.iter().map(|row| row.label).collect();
        let titles: Vec<Vec<usize>> = items.iter().map(|row| self.encode(&row.title)).collect();
        let texts:  Vec<Vec<usize>> = items.iter().map(|row| self.encode(&row.text)).collect();

        NewsBatch {
            labels: Tensor::<B, 1, Int>::from_ints(labels.as_slice(), &self.device),
            titles: self.stack(&titles),
            texts:  self.stack(&texts),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    use crate::data::preprocessor::Preprocessor;

    type TestBackend = NdArray;

    fn batcher(words: &[&str], max_len: usize) -> NewsBatcher<TestBackend> {
        let vocab = Vocabulary::build(vec![words.iter().map(|w| w.to_string()).collect::<Vec<_>>()]);
        NewsBatcher::new(Default::default(), Arc::new(vocab), max_len)
    }

    fn to_ids<const D: usize>(t: Tensor<TestBackend, D, Int>) -> Vec<i64> {
        t.into_data().convert::<i64>().to_vec::<i64>().unwrap()
    }

    #[test]
    fn test_pads_short_sequences_with_unk() {
        let b   = batcher(&["senate", "votes"], 5);
        let ids = b.encode("Senate votes");
        assert_eq!(ids.len(), 5);
        assert_eq!(&ids[2..], &[0, 0, 0]);
        assert_ne!(ids[0], 0);
    }

    #[test]
    fn test_truncates_long_sequences() {
        let b   = batcher(&["a", "b", "c", "d"], 2);
        let ids = b.encode("a b c d");
        assert_eq!(ids, vec![b.vocab.lookup("a"), b.vocab.lookup("b")]);
    }

    #[test]
    fn test_exact_length_untouched() {
        let b = batcher(&["x", "y"], 2);
        assert_eq!(b.encode("x y"), vec![b.vocab.lookup("x"), b.vocab.lookup("y")]);
    }

    #[test]
    fn test_normalised_example_yields_max_len_indices() {
        let text = Preprocessor::new().clean("Check #breaking http://x.co @user!!");
        let b    = batcher(&["check", "breaking", "url"], 5);
        let ids  = b.encode(&text);

        // check breaking url user ! ! → six tokens, cut to five
        assert_eq!(ids.len(), 5);
        assert_eq!(ids[0], b.vocab.lookup("check"));
        assert_eq!(ids[3], b.vocab.unk_index());
    }

    #[test]
    fn test_batch_shapes_and_values() {
        let b = batcher(&["tax", "cut", "bill"], 4);
        let rows = vec![
            NewsRow::new("tax cut bill passes today", "Tax cut", 3),
            NewsRow::new("", "Bill", 1),
        ];

        let batch = b.batch(rows);
        assert_eq!(batch.labels.dims(), [2]);
        assert_eq!(batch.titles.dims(), [2, 4]);
        assert_eq!(batch.texts.dims(), [2, 4]);

        assert_eq!(to_ids(batch.labels), vec![3, 1]);

        let tax  = b.vocab.lookup("tax") as i64;
        let cut  = b.vocab.lookup("cut") as i64;
        let bill = b.vocab.lookup("bill") as i64;
        assert_eq!(to_ids(batch.titles), vec![tax, cut, 0, 0, bill, 0, 0, 0]);
        assert_eq!(to_ids(batch.texts), vec![tax, cut, bill, 0, 0, 0, 0, 0]);
    }
}
