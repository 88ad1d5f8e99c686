// ============================================================
// Layer 4 - Vocabulary
// ============================================================
// Bijective token ↔ index mapping built from the training split.
//
// Index layout:
//   0  → "<unk>"   (returned for every lookup miss)
//   1  → "splt"    (segment separator)
//   2… → corpus tokens, most frequent first; equal counts are
//        ordered lexicographically so the mapping is stable
//        across runs on the same data
//
// Built once, then shared read-only behind an Arc by the
// batchers and the knowledge aligner.

use std::collections::HashMap;

pub const UNK_TOKEN: &str = "<unk>";
pub const SEP_TOKEN: &str = "splt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    itos: Vec<String>,
    stoi: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from an iterator of token sequences. Reserved tokens
    /// always occupy the first two indices.
    pub fn build<I, T>(sequences: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = String>,
    {
        let mut freq: HashMap<String, usize> = HashMap::new();
        for seq in sequences {
            for token in seq {
                *freq.entry(token).or_insert(0) += 1;
            }
        }

        let mut counted: Vec<(String, usize)> = freq
            .into_iter()
            .filter(|(tok, _)| tok != UNK_TOKEN && tok != SEP_TOKEN)
            .collect();
        counted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let itos = [UNK_TOKEN.to_string(), SEP_TOKEN.to_string()]
            .into_iter()
            .chain(counted.into_iter().map(|(tok, _)| tok))
            .collect();

        Self::from_tokens(itos)
    }

    /// Rebuild from an ordered token list (index = position).
    pub fn from_tokens(itos: Vec<String>) -> Self {
        let stoi = itos
            .iter()
            .enumerate()
            .map(|(i, tok)| (tok.clone(), i))
            .collect();
        Self { itos, stoi }
    }

    pub fn len(&self) -> usize {
        self.itos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itos.is_empty()
    }

    pub fn unk_index(&self) -> usize {
        self.stoi.get(UNK_TOKEN).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.stoi.contains_key(token)
    }

    /// Index of `token`, or the unknown-token index on a miss.
    pub fn lookup(&self, token: &str) -> usize {
        self.stoi
            .get(token)
            .copied()
            .unwrap_or_else(|| self.unk_index())
    }

    pub fn lookup_indices<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<usize> {
        tokens.iter().map(|t| self.lookup(t.as_ref())).collect()
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.itos.get(index).map(String::as_str)
    }

    /// Tokens in index order
    pub fn tokens(&self) -> &[String] {
        &self.itos
    }
}
