// ============================================================
// Layer 4 - Basic English Tokenizer
// ============================================================
// A fixed, language-agnostic word tokenizer. It lowercases the
// input, spaces out sentence punctuation so each mark becomes
// its own token, drops a handful of separators, and then
// splits on whitespace.
//
// Rules, applied in this order:
//   '       → " '  "   (apostrophe becomes its own token)
//   "       → ""       (removed)
//   .       → " . "
//   <br />  → " "
//   ,       → " , "
//   (  )    → " ( "  " ) "
//   !  ?    → " ! "  " ? "
//   ;  :    → " "
//
// The same rule table is exported into tokenizer.json by the
// vocabulary store, so the two must stay in sync.

/// (pattern, replacement) pairs in application order
pub const REPLACEMENTS: [(&str, &str); 11] = [
    ("'", " '  "),
    ("\"", ""),
    (".", " . "),
    ("<br />", " "),
    (",", " , "),
    ("(", " ( "),
    (")", " ) "),
    ("!", " ! "),
    ("?", " ? "),
    (";", " "),
    (":", " "),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTokenizer;

impl BasicTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into lowercase word and punctuation tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut line = text.to_lowercase();
        for (pattern, replacement) in REPLACEMENTS {
            if line.contains(pattern) {
                line = line.replace(pattern, replacement);
            }
        }
        line.split_whitespace().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        let t = BasicTokenizer::new();
        assert_eq!(t.tokenize("Hello  World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_punctuation_becomes_tokens() {
        let t = BasicTokenizer::new();
        assert_eq!(
            t.tokenize("Wait, what?! (Really.)"),
            vec!["wait", ",", "what", "?", "!", "(", "really", ".", ")"]
        );
    }

    #[test]
    fn test_apostrophe_and_quotes() {
        let t = BasicTokenizer::new();
        assert_eq!(t.tokenize("don't \"quote\""), vec!["don", "'", "t", "quote"]);
    }

    #[test]
    fn test_drops_separators() {
        let t = BasicTokenizer::new();
        assert_eq!(t.tokenize("a;b:c<br />d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_input() {
        let t = BasicTokenizer::new();
        assert!(t.tokenize("   ").is_empty());
    }
}
