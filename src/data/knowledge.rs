// ============================================================
// Layer 4 - Knowledge Entity Alignment
// ============================================================
// Maps entity names from three pre-trained knowledge-graph
// dictionaries onto vocabulary indices so the model can look up
// the matching entity embeddings.
//
//   entities_con.dict   → "rep"     (representative)
//   entities_lib.dict   → "demo"    (demographic)
//   entities_yago.dict  → "common"  (common-sense, YAGO)
//
// Dictionary format, one entity per line:
//   <id> <name> [more columns...]
//
// Reading stops at the first blank line. Names missing from the
// vocabulary resolve to <unk>; nothing fails on a miss, so the
// coverage numbers logged here are the only signal that the
// dictionaries and the training corpus do not line up.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    path::Path,
};

use crate::data::vocab::Vocabulary;

/// (set name, dictionary file) pairs in reporting order
pub const KNOWLEDGE_FILES: [(&str, &str); 3] = [
    ("rep",    "entities_con.dict"),
    ("demo",   "entities_lib.dict"),
    ("common", "entities_yago.dict"),
];

/// Read entity names (second column) from one dictionary file.
pub fn load_entity_names(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read knowledge dictionary '{}'", path.display()))?;

    let mut names = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        match line.split_whitespace().nth(1) {
            Some(name) => names.push(name.to_string()),
            None => bail!(
                "Line {} of '{}' has no entity name column: {:?}",
                i + 1,
                path.display(),
                line
            ),
        }
    }
    Ok(names)
}

// ─── EntityIndexSet ───────────────────────────────────────────────────────────
/// One named set of entity indices plus its coverage figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityIndexSet {
    pub name: String,
    pub indices: Vec<usize>,
    /// Entities that resolved to a real (non-<unk>) vocabulary entry
    pub hits: usize,
}

impl EntityIndexSet {
    /// Resolve each name against the vocabulary.
    pub fn align(name: impl Into<String>, entities: &[String], vocab: &Vocabulary) -> Self {
        let indices = vocab.lookup_indices(entities);
        let hits    = entities.iter().filter(|e| vocab.contains(e.as_str())).count();
        Self { name: name.into(), indices, hits }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of distinct indices; every miss collapses onto <unk>.
    pub fn unique(&self) -> usize {
        self.indices.iter().collect::<HashSet<_>>().len()
    }

    pub fn misses(&self) -> usize {
        self.len() - self.hits
    }

    /// Fraction of entities found in the vocabulary (1.0 for an empty set)
    pub fn coverage(&self) -> f64 {
        if self.is_empty() {
            1.0
        } else {
            self.hits as f64 / self.len() as f64
        }
    }

    fn report(&self) {
        tracing::info!(
            "Knowledge '{}': {} entities, {} unique indices, {} in vocabulary ({:.1}% coverage)",
            self.name,
            self.len(),
            self.unique(),
            self.hits,
            self.coverage() * 100.0,
        );
        if self.misses() > 0 {
            tracing::warn!(
                "Knowledge '{}': {} entities missing from the vocabulary resolve to <unk>",
                self.name,
                self.misses(),
            );
        }
    }
}

// ─── KnowledgeIndices ─────────────────────────────────────────────────────────
/// The three aligned entity sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeIndices {
    pub rep: EntityIndexSet,
    pub demo: EntityIndexSet,
    pub common: EntityIndexSet,
}

impl KnowledgeIndices {
    /// Load all three dictionaries from `dir` and align them.
    pub fn load(dir: &Path, vocab: &Vocabulary) -> Result<Self> {
        let [rep, demo, common] = KNOWLEDGE_FILES.map(|(name, file)| (name, dir.join(file)));

        let align = |(name, path): (&str, std::path::PathBuf)| -> Result<EntityIndexSet> {
            let names = load_entity_names(&path)?;
            let set   = EntityIndexSet::align(name, &names, vocab);
            set.report();
            Ok(set)
        };

        Ok(Self {
            rep:    align(rep)?,
            demo:   align(demo)?,
            common: align(common)?,
        })
    }

    pub fn sets(&self) -> [&EntityIndexSet; 3] {
        [&self.rep, &self.demo, &self.common]
    }

    pub fn get(&self, name: &str) -> Option<&EntityIndexSet> {
        self.sets().into_iter().find(|s| s.name == name)
    }
}
