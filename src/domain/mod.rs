// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that name the core
// concepts of the system:
//
//   ArticleRecord - one <article> from the AllSides metadata XML
//   NewsRow       - one labelled row of the news-bias dataset
//   DatasetKind   - which labelled corpus is being loaded
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A single article parsed from the metadata XML
pub mod article;

// A labelled (text, title, label) dataset row
pub mod news_row;

// The two recognised corpora and their fixed properties
pub mod dataset_kind;

// Core abstractions (traits) that other layers implement
pub mod traits;
