//! Domain models for the NLU conversion passes.
//!
//! - [`Record`] - one CSV row (text + intent label)
//! - [`Group`] - all records sharing a label, in source order
//! - [`DocumentEntry`] - one item of the `nlu` list in a Rasa YAML file
//! - [`NluDocument`] - the whole YAML document (version + entries)

use serde::{Deserialize, Serialize};

// =============================================================================
// Record
// =============================================================================

/// A single labeled text example read from the tabular side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub text: String,
    pub label: String,
}

impl Record {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

// =============================================================================
// Group
// =============================================================================

/// All records sharing one label.
///
/// Members keep the order in which they appeared in the source.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Group {
    pub label: String,
    pub members: Vec<Record>,
}

impl Group {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            members: Vec::new(),
        }
    }

    /// Texts of all members, in source order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|r| r.text.as_str())
    }
}

// =============================================================================
// Document Entry
// =============================================================================

/// One intent entry of an NLU document.
///
/// `examples` is the verbatim literal block: one `- ` prefixed line per
/// example, each newline-terminated. It is never re-escaped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentEntry {
    pub label: String,
    pub examples: String,
}

impl DocumentEntry {
    pub fn new(label: impl Into<String>, examples: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            examples: examples.into(),
        }
    }

    /// Split the examples block back into individual texts.
    ///
    /// Splits on the `- ` marker, drops empty fragments, keeps at most
    /// `cap` of them and trims surrounding whitespace from each. Only
    /// fragments that are literally empty are dropped; a whitespace-only
    /// fragment still counts against the cap and yields an empty text.
    pub fn fragments(&self, cap: usize) -> Vec<&str> {
        self.examples
            .split("- ")
            .filter(|f| !f.is_empty())
            .take(cap)
            .map(str::trim)
            .collect()
    }

    /// Number of non-empty fragments before any cap is applied.
    pub fn fragment_count(&self) -> usize {
        self.examples.split("- ").filter(|f| !f.is_empty()).count()
    }
}

// =============================================================================
// NLU Document
// =============================================================================

/// A Rasa NLU training document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NluDocument {
    /// Format version written verbatim, e.g. "3.0".
    pub version: String,
    pub entries: Vec<DocumentEntry>,
}

impl NluDocument {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: DocumentEntry) {
        self.entries.push(entry);
    }

    /// Entry labels, in document order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
