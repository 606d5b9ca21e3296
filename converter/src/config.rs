//! Conversion options.
//!
//! A [`ConvertOptions`] value is built once by the caller and handed to a
//! pass by reference; nothing in it is validated up front. Bad paths only
//! surface as IO errors when a pass runs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default column / key names and output settings.
pub const DEFAULT_LABEL_KEY: &str = "intent";
pub const DEFAULT_TEXT_KEY: &str = "text";
pub const DEFAULT_EXAMPLES_KEY: &str = "examples";
pub const DEFAULT_FORMAT_VERSION: &str = "3.0";
pub const DEFAULT_EXPORT_DIR: &str = ".";
pub const DEFAULT_OUTPUT_FILE: &str = "nlu.yml";

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Intent CSV to Rasa NLU YAML.
    #[default]
    ToYaml,
    /// Rasa NLU YAML to intent CSV.
    ToCsv,
}

/// Options for a single conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// File to convert (CSV or YAML depending on direction)
    pub source: PathBuf,

    /// Directory the output is written to
    pub export_dir: PathBuf,

    /// Name of the output file inside `export_dir`
    pub output_file_name: String,

    /// CSV column / YAML key holding the intent label
    pub label_key: String,

    /// CSV column holding the example text
    pub text_key: String,

    /// YAML key holding the literal examples block
    pub examples_key: String,

    /// Value written to the document's `version` key
    pub format_version: String,

    pub direction: Direction,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            output_file_name: DEFAULT_OUTPUT_FILE.to_string(),
            label_key: DEFAULT_LABEL_KEY.to_string(),
            text_key: DEFAULT_TEXT_KEY.to_string(),
            examples_key: DEFAULT_EXAMPLES_KEY.to_string(),
            format_version: DEFAULT_FORMAT_VERSION.to_string(),
            direction: Direction::default(),
        }
    }
}

impl ConvertOptions {
    /// Options with every default except the source file.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn with_output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }

    pub fn with_label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }

    pub fn with_text_key(mut self, key: impl Into<String>) -> Self {
        self.text_key = key.into();
        self
    }

    pub fn with_examples_key(mut self, key: impl Into<String>) -> Self {
        self.examples_key = key.into();
        self
    }

    pub fn with_format_version(mut self, version: impl Into<String>) -> Self {
        self.format_version = version.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Full path of the file a pass writes.
    pub fn destination(&self) -> PathBuf {
        self.export_dir.join(&self.output_file_name)
    }
}

/// Indentation settings for the YAML emitter.
///
/// Passed explicitly to every emit call; there is no process-wide
/// formatter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YamlFormat {
    /// Indent of nested mappings (literal blocks use at most 9)
    pub mapping: usize,
    /// Indent of a sequence item's content relative to its parent key
    pub sequence: usize,
    /// Indent of the `-` marker relative to its parent key
    pub offset: usize,
}

impl Default for YamlFormat {
    /// Layout Rasa's own tooling produces.
    fn default() -> Self {
        Self {
            mapping: 2,
            sequence: 4,
            offset: 2,
        }
    }
}
