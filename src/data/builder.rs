// ============================================================
// Layer 4 - Dataset Builder
// ============================================================
// Runs the whole loading pipeline and hands back ready-to-use
// Burn data loaders:
//
//   CSV rows
//       │  Preprocessor (text field only)
//       ▼
//   normalised rows ──► 90/10 split ──► train | test
//                                         │
//                 BasicTokenizer + Vocabulary (train only)
//                                         │
//                 knowledge dictionaries ─┤ (aligned to vocab)
//                                         ▼
//                             train ──► train | validation
//                                         │
//                      NewsBatcher + DataLoaderBuilder
//
// The vocabulary never sees test rows. Validation rows are carved
// out of the training partition after the vocabulary is built,
// so they share it with the training set.

use anyhow::{bail, Result};
use burn::{
    data::dataloader::{DataLoader, DataLoaderBuilder},
    prelude::*,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::prepare_use_case::LoaderConfig;
use crate::data::{
    batcher::{NewsBatch, NewsBatcher},
    dataset::NewsDataset,
    knowledge::KnowledgeIndices,
    loader::CsvRowSource,
    preprocessor::Preprocessor,
    splitter::{split_partition, split_with_rng, TRAIN_FRACTION},
    tokenizer::BasicTokenizer,
    vocab::Vocabulary,
};
use crate::domain::{dataset_kind::DatasetKind, news_row::NewsRow, traits::RowSource};

/// Partition sizes after both splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitStats {
    pub train: usize,
    pub valid: usize,
    pub test:  usize,
}

impl SplitStats {
    pub fn total(&self) -> usize {
        self.train + self.valid + self.test
    }
}

/// Everything the training loop needs from the data side.
pub struct DataBundle<B: Backend> {
    pub train:      Arc<dyn DataLoader<NewsBatch<B>>>,
    pub valid:      Arc<dyn DataLoader<NewsBatch<B>>>,
    pub test:       Arc<dyn DataLoader<NewsBatch<B>>>,
    pub vocab:      Arc<Vocabulary>,
    pub vocab_size: usize,
    pub num_class:  usize,
    pub knowledge:  KnowledgeIndices,
    pub stats:      SplitStats,
}

/// Load the configured corpus from disk and build all loaders.
pub fn build_dataset<B: Backend>(cfg: &LoaderConfig, device: &B::Device) -> Result<DataBundle<B>> {
    let kind   = cfg.dataset.parse::<DatasetKind>()?;
    let path   = cfg.data_dir.join(kind.file_name());
    tracing::info!("Loading {} ({} classes) from '{}'", kind, kind.num_class(), path.display());
    let source = CsvRowSource::new(path);
    build_from_source(kind, &source, cfg, device)
}

/// Same as [`build_dataset`] with an explicit row source.
pub fn build_from_source<B: Backend, S: RowSource>(
    kind:   DatasetKind,
    source: &S,
    cfg:    &LoaderConfig,
    device: &B::Device,
) -> Result<DataBundle<B>> {
    validate(cfg)?;
    let mut rng = cfg.split_seed.map(StdRng::seed_from_u64);

    // ── Load + normalise ──────────────────────────────────────────────────────
    let prep = Preprocessor::new();
    let rows: Vec<NewsRow> = source
        .load_rows()?
        .into_iter()
        .map(|row| NewsRow { text: prep.clean(&row.text), ..row })
        .collect();

    for row in rows.iter().take(5) {
        tracing::debug!("label={} title={:?} text={:?}", row.label, row.title, row.text);
    }
    warn_on_label_range(&rows, kind.num_class());

    // ── Train / test ──────────────────────────────────────────────────────────
    let (train_rows, test_rows) = match rng.as_mut() {
        Some(r) => split_with_rng(rows, TRAIN_FRACTION, r),
        None    => split_partition(rows, TRAIN_FRACTION),
    };

    // ── Vocabulary from the training partition only ───────────────────────────
    let tokenizer = BasicTokenizer::new();
    let vocab = Arc::new(Vocabulary::build(train_rows.iter().flat_map(|row| {
        [tokenizer.tokenize(&row.title), tokenizer.tokenize(&row.text)]
    })));
    tracing::info!("Vocabulary built: {} tokens", vocab.len());

    // ── Knowledge entities ────────────────────────────────────────────────────
    let knowledge = KnowledgeIndices::load(&cfg.kg_dir, &vocab)?;

    // ── Train / validation ────────────────────────────────────────────────────
    let keep = 1.0 - cfg.val_fraction;
    let (train_rows, valid_rows) = match rng.as_mut() {
        Some(r) => split_with_rng(train_rows, keep, r),
        None    => split_partition(train_rows, keep),
    };

    let stats = SplitStats {
        train: train_rows.len(),
        valid: valid_rows.len(),
        test:  test_rows.len(),
    };
    tracing::info!("  - Training data size: {}", stats.train);
    tracing::info!("  - Validation data size: {}", stats.valid);
    tracing::info!("  - Test data size: {}", stats.test);

    // ── Loaders ───────────────────────────────────────────────────────────────
    let batcher = NewsBatcher::<B>::new(device.clone(), vocab.clone(), cfg.max_len);

    let train = DataLoaderBuilder::new(batcher.clone())
        .batch_size(cfg.batch_size)
        .shuffle(cfg.shuffle_seed)
        .num_workers(1)
        .build(NewsDataset::new(train_rows));

    let valid = DataLoaderBuilder::new(batcher.clone())
        .batch_size(cfg.eval_batch_size)
        .num_workers(1)
        .build(NewsDataset::new(valid_rows));

    let test = DataLoaderBuilder::new(batcher)
        .batch_size(cfg.eval_batch_size)
        .num_workers(1)
        .build(NewsDataset::new(test_rows));

    Ok(DataBundle {
        train,
        valid,
        test,
        vocab_size: vocab.len(),
        vocab,
        num_class: kind.num_class(),
        knowledge,
        stats,
    })
}

fn validate(cfg: &LoaderConfig) -> Result<()> {
    if cfg.batch_size == 0 || cfg.eval_batch_size == 0 {
        bail!("batch sizes must be positive (got {} / {})", cfg.batch_size, cfg.eval_batch_size);
    }
    if cfg.max_len == 0 {
        bail!("max_len must be positive");
    }
    if !(0.0..1.0).contains(&cfg.val_fraction) {
        bail!("val_fraction must be in [0, 1), got {}", cfg.val_fraction);
    }
    Ok(())
}

fn warn_on_label_range(rows: &[NewsRow], num_class: usize) {
    let out_of_range = rows
        .iter()
        .filter(|r| r.label < 0 || r.label as usize >= num_class)
        .count();
    if out_of_range > 0 {
        tracing::warn!(
            "{} rows carry a label outside 0..{}",
            out_of_range,
            num_class
        );
    }
}
