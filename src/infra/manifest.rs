// ============================================================
// Layer 6 - Dataset Manifest
// ============================================================
// Records what a `prepare` run produced so a later training run
// can check it is using the same data:
//
//   output_dir/
//     tokenizer.json   ← vocabulary (VocabStore)
//     manifest.json    ← this file
//
// The manifest carries the loader config, partition sizes,
// vocabulary size, class count, and the per-set knowledge
// coverage. Index lists themselves are not stored; they are
// cheap to recompute from the dictionaries and tokenizer.json.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::application::prepare_use_case::LoaderConfig;
use crate::data::{builder::SplitStats, knowledge::EntityIndexSet};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Coverage figures for one knowledge set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeSummary {
    pub name:     String,
    pub entities: usize,
    pub unique:   usize,
    pub hits:     usize,
    pub coverage: f64,
}

impl From<&EntityIndexSet> for KnowledgeSummary {
    fn from(set: &EntityIndexSet) -> Self {
        Self {
            name:     set.name.clone(),
            entities: set.len(),
            unique:   set.unique(),
            hits:     set.hits,
            coverage: set.coverage(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub config:     LoaderConfig,
    pub splits:     SplitStats,
    pub vocab_size: usize,
    pub num_class:  usize,
    pub knowledge:  Vec<KnowledgeSummary>,
}

pub struct ManifestStore {
    dir: PathBuf,
}

impl ManifestStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    pub fn save(&self, manifest: &DatasetManifest) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.path();
        let json = serde_json::to_string_pretty(manifest)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::debug!("Saved manifest to '{}'", path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<DatasetManifest> {
        let path = self.path();
        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read manifest '{}'. Run 'prepare' first.",
                path.display()
            )
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}
