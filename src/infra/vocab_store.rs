// ============================================================
// Layer 6 - Vocabulary Store
// ============================================================
// Persists the training vocabulary as a HuggingFace
// tokenizer.json so the model side can encode text with exactly
// the same token ↔ index mapping the batcher used.
//
// The exported pipeline mirrors BasicTokenizer:
//   normalizer    - Lowercase, then one Replace per rule in
//                   tokenizer::REPLACEMENTS
//   pre_tokenizer - WhitespaceSplit
//   model         - WordLevel over the vocabulary, unk = "<unk>"
//
// The JSON is written directly and loaded back through
// Tokenizer::from_file, so a malformed export fails here rather
// than in a downstream consumer.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;

use crate::data::{
    tokenizer::REPLACEMENTS,
    vocab::{Vocabulary, UNK_TOKEN},
};

pub const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(TOKENIZER_FILE)
    }

    /// Write `vocab` as tokenizer.json and return the reloaded tokenizer.
    pub fn save(&self, vocab: &Vocabulary) -> Result<Tokenizer> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let tok_path = self.path();
        std::fs::write(&tok_path, serde_json::to_string_pretty(&tokenizer_json(vocab))?)
            .with_context(|| format!("Cannot write '{}'", tok_path.display()))?;

        tracing::info!(
            "Vocabulary of {} tokens saved to '{}'",
            vocab.len(),
            tok_path.display()
        );

        self.load()
    }

    /// Load the saved tokenizer.json
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.path();
        load_tokenizer(&path)
    }

    /// Rebuild a Vocabulary from the saved tokenizer, in index order.
    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        let tokenizer = self.load()?;
        let mut entries: Vec<(String, u32)> = tokenizer.get_vocab(false).into_iter().collect();
        entries.sort_by_key(|(_, id)| *id);
        Ok(Vocabulary::from_tokens(entries.into_iter().map(|(tok, _)| tok).collect()))
    }
}

fn load_tokenizer(path: &Path) -> Result<Tokenizer> {
    Tokenizer::from_file(path)
        .map_err(|e| anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e))
}

fn tokenizer_json(vocab: &Vocabulary) -> serde_json::Value {
    let vocab_map: serde_json::Map<String, serde_json::Value> = vocab
        .tokens()
        .iter()
        .enumerate()
        .map(|(id, tok)| (tok.clone(), serde_json::json!(id)))
        .collect();

    let mut normalizers = vec![serde_json::json!({ "type": "Lowercase" })];
    normalizers.extend(REPLACEMENTS.iter().map(|(pattern, content)| {
        serde_json::json!({
            "type": "Replace",
            "pattern": { "String": pattern },
            "content": content,
        })
    }));

    serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {
                "id": vocab.unk_index(),
                "content": UNK_TOKEN,
                "single_word": false,
                "lstrip": false,
                "rstrip": false,
                "normalized": false,
                "special": true
            }
        ],
        "normalizer": {
            "type": "Sequence",
            "normalizers": normalizers
        },
        "pre_tokenizer": {
            "type": "WhitespaceSplit"
        },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": vocab_map,
            "unk_token": UNK_TOKEN
        }
    })
}
