// ============================================================
// Layer 2 - PrepareUseCase
// ============================================================
// Runs the dataset loader end to end and records the result:
//
//   Step 1: Build vocabulary, knowledge indices, and loaders
//   Step 2: Walk every loader once, checking batch shapes
//   Step 3: Save the vocabulary as tokenizer.json   (Layer 6)
//   Step 4: Save manifest.json                      (Layer 6)
//
// The loaders themselves are returned so a caller holding the
// use case can feed them straight into a training loop.

use anyhow::{bail, Result};
use burn::{data::dataloader::DataLoader, prelude::*};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::batcher::NewsBatch;
use crate::data::builder::{build_dataset, DataBundle};
use crate::infra::{
    manifest::{DatasetManifest, KnowledgeSummary, ManifestStore},
    vocab_store::VocabStore,
};

// ─── Loader Configuration ────────────────────────────────────────────────────
// Every call-time parameter of the dataset loader.
// Serialisable so it can be written into the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// "ALLSIDES" or "SEMEVAL"
    pub dataset:         String,
    /// Directory holding khan_dataset.csv / semeval.csv
    pub data_dir:        PathBuf,
    /// Directory holding the three entities_*.dict files
    pub kg_dir:          PathBuf,
    pub batch_size:      usize,
    pub eval_batch_size: usize,
    /// Title and text are each padded/truncated to this many tokens
    pub max_len:         usize,
    /// Share of the training partition held out for validation
    pub val_fraction:    f64,
    /// Seed for the training loader's per-epoch shuffle
    pub shuffle_seed:    u64,
    /// Seed for the train/test and train/validation splits;
    /// None draws a fresh partition every run
    pub split_seed:      Option<u64>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            dataset:         "ALLSIDES".to_string(),
            data_dir:        PathBuf::from("data"),
            kg_dir:          PathBuf::from("kgraphs/pre-trained"),
            batch_size:      32,
            eval_batch_size: 32,
            max_len:         512,
            val_fraction:    0.0,
            shuffle_seed:    42,
            split_seed:      None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub loader:     LoaderConfig,
    /// Where tokenizer.json and manifest.json are written
    pub output_dir: PathBuf,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            loader:     LoaderConfig::default(),
            output_dir: PathBuf::from("prepared"),
        }
    }
}

/// Batches seen per loader during the verification walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchCounts {
    pub train: usize,
    pub valid: usize,
    pub test:  usize,
}

pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the full preparation on backend `B`.
    pub fn execute<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<(DataBundle<B>, DatasetManifest, BatchCounts)> {
        let cfg = &self.config;

        // ── Step 1: Build everything ──────────────────────────────────────────
        tracing::info!(
            "Preparing {} from '{}'",
            cfg.loader.dataset,
            cfg.loader.data_dir.display()
        );
        let bundle = build_dataset::<B>(&cfg.loader, device)?;

        // ── Step 2: Walk the loaders ──────────────────────────────────────────
        let counts = BatchCounts {
            train: walk("train", bundle.train.as_ref(), cfg.loader.max_len)?,
            valid: walk("valid", bundle.valid.as_ref(), cfg.loader.max_len)?,
            test:  walk("test",  bundle.test.as_ref(),  cfg.loader.max_len)?,
        };

        // ── Step 3: Vocabulary ────────────────────────────────────────────────
        VocabStore::new(&cfg.output_dir).save(&bundle.vocab)?;

        // ── Step 4: Manifest ──────────────────────────────────────────────────
        let manifest = DatasetManifest {
            config:     cfg.loader.clone(),
            splits:     bundle.stats,
            vocab_size: bundle.vocab_size,
            num_class:  bundle.num_class,
            knowledge:  bundle
                .knowledge
                .sets()
                .into_iter()
                .map(KnowledgeSummary::from)
                .collect(),
        };
        ManifestStore::new(&cfg.output_dir).save(&manifest)?;

        Ok((bundle, manifest, counts))
    }
}

/// Iterate one loader, failing on any batch whose sequence width
/// is not `max_len`. Returns the number of batches.
fn walk<B: Backend>(
    name:    &str,
    loader:  &dyn DataLoader<NewsBatch<B>>,
    max_len: usize,
) -> Result<usize> {
    let mut batches = 0usize;
    let mut rows    = 0usize;

    for batch in loader.iter() {
        let [n, title_len] = batch.titles.dims();
        let [_, text_len]  = batch.texts.dims();
        if title_len != max_len || text_len != max_len {
            bail!(
                "{} batch {} has width {}/{} instead of {}",
                name, batches, title_len, text_len, max_len
            );
        }
        batches += 1;
        rows    += n;
    }

    tracing::debug!("{}: {} batches, {} rows", name, batches, rows);
    Ok(batches)
}
