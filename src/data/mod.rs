// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between raw files on disk and integer tensor
// batches, plus the AllSides metadata parser.
//
// Dataset pipeline:
//
//   CSV file
//       │
//       ▼
//   CsvRowSource      → reads (text, title, label) rows
//       │
//       ▼
//   Preprocessor      → normalises the body text
//       │
//       ▼
//   splitter          → random 90/10 train/test partition
//       │
//       ▼
//   BasicTokenizer    → word and punctuation tokens
//       │
//       ▼
//   Vocabulary        → token ↔ index, built from train only
//       │
//       ├──► knowledge → entity names aligned to the vocabulary
//       │
//       ▼
//   NewsDataset       → implements Burn's Dataset trait
//       │
//       ▼
//   NewsBatcher       → pads/truncates and stacks into tensors
//       │
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// builder.rs wires these steps together.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Reads the labelled news CSV
pub mod loader;

/// Normalises body text
pub mod preprocessor;

/// Basic English word tokenizer
pub mod tokenizer;

/// Token ↔ index mapping
pub mod vocab;

/// Shuffles and splits rows into partitions
pub mod splitter;

/// Knowledge-graph entity dictionaries and alignment
pub mod knowledge;

/// Implements Burn's Dataset trait for news rows
pub mod dataset;

/// Implements Burn's Batcher trait (collation)
pub mod batcher;

/// End-to-end dataset construction
pub mod builder;

/// AllSides metadata XML parsing and event tallies
pub mod metadata;
