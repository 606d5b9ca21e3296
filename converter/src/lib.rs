//! # nlu-converter - Rasa NLU training data conversion
//!
//! Converts a CSV of labeled texts into a Rasa NLU YAML file, and a Rasa
//! NLU YAML file back into a CSV for analysis.
//!
//! ## Architecture
//!
//! ```text
//!              ┌─────────┐   ┌─────────┐   ┌───────────┐   ┌───────────┐
//! CSV ────────▶│ Parser  │──▶│ Grouper │──▶│ Heuristic │──▶│ YAML emit │──▶ nlu.yml
//!              └─────────┘   └─────────┘   └───────────┘   └───────────┘
//!              ┌────────────┐   ┌──────────────────┐   ┌────────────┐
//! nlu.yml ────▶│ YAML parse │──▶│ Split + cap (30) │──▶│ CSV writer │──▶ nlu.csv
//!              └────────────┘   └──────────────────┘   └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nlu_converter::{convert, ConvertOptions, Direction};
//!
//! let options = ConvertOptions::new("train.csv").with_export_dir("data");
//! let report = convert(&options)?;
//!
//! let back = ConvertOptions::new("data/nlu.yml")
//!     .with_output_file_name("sample.csv")
//!     .with_direction(Direction::ToCsv);
//! convert(&back)?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Conversion options and YAML layout
//! - [`models`] - Records, groups and document entries
//! - [`parser`] - CSV reading with encoding detection
//! - [`transform`] - Filter, grouping, YAML and the passes
//! - [`logs`] - Leveled progress logging

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, ConvertResult, CsvError, DocumentError};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{ConvertOptions, Direction, YamlFormat};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{DocumentEntry, Group, NluDocument, Record};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{decode_content, detect_encoding, read_records, read_records_file, ParsedTable};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    build_document,
    convert,
    convert_csv_to_yaml,
    convert_csv_to_yaml_with_format,
    convert_yaml_to_csv,
    emit_document,
    examples_block,
    flatten_document,
    group_by_label,
    is_yes_no_question,
    parse_document,
    ConversionReport,
    EntryKeys,
    MAX_EXAMPLES_PER_LABEL,
};
