// ============================================================
// Layer 4 - Text Preprocessor
// ============================================================
// Normalises the body text of every dataset row before
// tokenisation. News bodies scraped from the web are full of
// hashtags, @-mentions, links, and stray symbols that would
// otherwise each claim a vocabulary slot.
//
// Cleaning steps (applied in order, order matters):
//   1. Lowercase
//   2. Strip '#'
//   3. Replace every `http\S+` run with the placeholder "url"
//   4. Strip '@'
//   5. Replace anything outside [A-Za-z0-9()!?'`"] with a space
//   6. Collapse runs of 2+ whitespace characters into one space
//
// The output is a fixed point: cleaning it again changes nothing.
// Step 3 uses a lowercase placeholder for exactly that reason.
//
// Reference: Rust Book §8 (Strings in Rust)
//            regex crate documentation

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder that replaces URL-like substrings
pub const URL_PLACEHOLDER: &str = "url";

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+").expect("valid url regex"));

static NOISE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^A-Za-z0-9()!?'`"]"#).expect("valid noise regex"));

static MULTI_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean one body text. Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        let lowered   = text.to_lowercase();
        let no_hash   = lowered.replace('#', "");
        let no_urls   = URL_PATTERN.replace_all(&no_hash, URL_PLACEHOLDER);
        let no_at     = no_urls.replace('@', "");
        let no_noise  = NOISE_PATTERN.replace_all(&no_at, " ");
        MULTI_SPACE.replace_all(&no_noise, " ").into_owned()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
