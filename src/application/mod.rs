// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers for each command.
//
// Rules for this layer:
//   - No text or tensor logic here (that's Layer 4)
//   - No printing (that's Layer 1)
//   - Only workflow coordination and configuration
//
// Reference: Clean Architecture pattern

// Metadata XML → flat CSV files
pub mod extract_use_case;

// Dataset CSV → vocabulary, knowledge indices, batch loaders
pub mod prepare_use_case;
