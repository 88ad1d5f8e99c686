// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// File formats that outlive a single run:
//
//   csv_export.rs  - BOM-prefixed CSV files written by the
//                    metadata extractor (one per field plus the
//                    event frequency table)
//
//   vocab_store.rs - the training vocabulary exported as a
//                    HuggingFace tokenizer.json and read back
//
//   manifest.rs    - JSON summary of a `prepare` run: config,
//                    partition sizes, knowledge coverage
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// BOM-prefixed CSV writers
pub mod csv_export;

/// Vocabulary persistence via the tokenizers crate
pub mod vocab_store;

/// Dataset manifest saving and loading
pub mod manifest;
