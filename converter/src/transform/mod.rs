//! Transformation module.
//!
//! This module handles both conversion directions:
//! - Heuristic: yes/no question filter
//! - Grouper: flat rows to per-label groups
//! - Literal: examples block construction
//! - YAML: NLU document emitting and parsing
//! - Pipeline: the two conversion passes

pub mod grouper;
pub mod heuristic;
pub mod literal;
pub mod pipeline;
pub mod yaml;

pub use grouper::group_by_label;
pub use heuristic::is_yes_no_question;
pub use literal::examples_block;
pub use pipeline::*;
pub use yaml::{emit_document, parse_document, EntryKeys};
