//! High-level conversion passes.
//!
//! - [`convert_csv_to_yaml`]: intent CSV → Rasa NLU YAML. Rows are grouped
//!   by label, filtered down to yes/no questions and written as one
//!   literal `examples` block per label.
//! - [`convert_yaml_to_csv`]: Rasa NLU YAML → intent CSV, keeping at most
//!   [`MAX_EXAMPLES_PER_LABEL`] examples per label.
//!
//! Neither direction round-trips: the forward filter and the reverse cap
//! both drop rows.
//!
//! # Example
//!
//! ```rust,ignore
//! use nlu_converter::{convert, ConvertOptions};
//!
//! let report = convert(&ConvertOptions::new("train.csv").with_export_dir("data"))?;
//! println!("{} labels written to {}", report.labels, report.destination.display());
//! ```

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::grouper::group_by_label;
use super::heuristic::is_yes_no_question;
use super::literal::examples_block;
use super::yaml::{emit_document, parse_document, EntryKeys};
use crate::config::{ConvertOptions, Direction, YamlFormat};
use crate::error::{ConvertError, ConvertResult, CsvError};
use crate::logs::{log_info, log_success, log_warning};
use crate::models::{DocumentEntry, Group, NluDocument, Record};
use crate::parser::read_records_bytes;

/// Most examples kept per label when flattening YAML back to CSV.
pub const MAX_EXAMPLES_PER_LABEL: usize = 30;

/// What a conversion pass did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub direction: Direction,

    /// File that was written
    pub destination: PathBuf,

    /// CSV rows read (forward) or example fragments found (reverse)
    pub rows_read: usize,

    /// Examples written, header row excluded
    pub rows_written: usize,

    /// Distinct labels
    pub labels: usize,

    /// Rows removed by the question filter (forward) or the cap (reverse)
    pub dropped: usize,
}

/// Run the pass selected by `options.direction`.
pub fn convert(options: &ConvertOptions) -> ConvertResult<ConversionReport> {
    match options.direction {
        Direction::ToYaml => convert_csv_to_yaml(options),
        Direction::ToCsv => convert_yaml_to_csv(options),
    }
}

// =============================================================================
// CSV → YAML
// =============================================================================

/// Convert an intent CSV into a Rasa NLU YAML file.
pub fn convert_csv_to_yaml(options: &ConvertOptions) -> ConvertResult<ConversionReport> {
    convert_csv_to_yaml_with_format(options, &YamlFormat::default())
}

/// Same as [`convert_csv_to_yaml`] with explicit YAML indentation.
///
/// The whole document is built in memory first, so a missing column is
/// reported before the destination is created or touched.
pub fn convert_csv_to_yaml_with_format(
    options: &ConvertOptions,
    format: &YamlFormat,
) -> ConvertResult<ConversionReport> {
    let source = options.source();
    log_info(format!("Reading CSV: {}", source.display()));

    let bytes = std::fs::read(source).map_err(|e| ConvertError::io(source, e))?;
    let table = read_records_bytes(&bytes, &options.label_key, &options.text_key)?;
    log_success(format!(
        "Read {} rows ({}), columns: {}",
        table.records.len(),
        table.encoding,
        table.headers.join(", ")
    ));

    let rows_read = table.records.len();
    let groups = group_by_label(table.records);
    let (doc, dropped) = build_document(&groups, &options.format_version);

    for entry in doc.entries.iter().filter(|e| e.examples.is_empty()) {
        log_warning(format!("No yes/no questions left for '{}'", entry.label));
    }

    let yaml = emit_document(&doc, format, &EntryKeys::from_options(options));
    let destination = options.destination();
    write_output(&destination, yaml.as_bytes())?;

    log_success(format!(
        "Wrote {} labels to {} ({} of {} rows dropped by the question filter)",
        doc.entries.len(),
        destination.display(),
        dropped,
        rows_read
    ));

    Ok(ConversionReport {
        direction: Direction::ToYaml,
        destination,
        rows_read,
        rows_written: rows_read - dropped,
        labels: doc.entries.len(),
        dropped,
    })
}

/// Build an NLU document from grouped records.
///
/// Every group yields exactly one entry, in group order, even when none of
/// its texts pass [`is_yes_no_question`]. Returns the document and how
/// many texts the filter removed.
pub fn build_document(groups: &[Group], version: &str) -> (NluDocument, usize) {
    let mut doc = NluDocument::new(version);
    let mut dropped = 0;

    for group in groups {
        let kept: Vec<&str> = group.texts().filter(|t| is_yes_no_question(t)).collect();
        dropped += group.members.len() - kept.len();

        tracing::debug!(
            label = %group.label,
            kept = kept.len(),
            total = group.members.len(),
            "filtered label"
        );

        doc.push(DocumentEntry::new(group.label.clone(), examples_block(kept)));
    }

    (doc, dropped)
}

// =============================================================================
// YAML → CSV
// =============================================================================

/// Convert a Rasa NLU YAML file into an intent CSV.
///
/// The CSV gets a `[text_key, label_key]` header and one row per kept
/// example. Labels with more than [`MAX_EXAMPLES_PER_LABEL`] examples are
/// silently truncated to the first ones.
pub fn convert_yaml_to_csv(options: &ConvertOptions) -> ConvertResult<ConversionReport> {
    let source = options.source();
    log_info(format!("Reading NLU document: {}", source.display()));

    let content = std::fs::read_to_string(source).map_err(|e| ConvertError::io(source, e))?;
    let doc = parse_document(&content, &EntryKeys::from_options(options))?;
    log_success(format!(
        "Found {} labels: {}",
        doc.entries.len(),
        doc.labels().collect::<Vec<_>>().join(", ")
    ));

    let rows_read: usize = doc.entries.iter().map(DocumentEntry::fragment_count).sum();
    for entry in doc.entries.iter().filter(|e| e.fragment_count() > MAX_EXAMPLES_PER_LABEL) {
        log_warning(format!(
            "'{}' has {} examples, keeping the first {}",
            entry.label,
            entry.fragment_count(),
            MAX_EXAMPLES_PER_LABEL
        ));
    }

    let records = flatten_document(&doc, MAX_EXAMPLES_PER_LABEL);
    let destination = options.destination();
    let csv = records_to_csv(&records, &options.text_key, &options.label_key)
        .map_err(|e| ConvertError::io(&destination, e))?;
    write_output(&destination, &csv)?;

    log_success(format!(
        "Wrote {} rows to {}",
        records.len(),
        destination.display()
    ));

    Ok(ConversionReport {
        direction: Direction::ToCsv,
        destination,
        rows_read,
        rows_written: records.len(),
        labels: doc.entries.len(),
        dropped: rows_read - records.len(),
    })
}

/// Flatten every entry's examples block into records, `cap` per entry.
pub fn flatten_document(doc: &NluDocument, cap: usize) -> Vec<Record> {
    doc.entries
        .iter()
        .flat_map(|entry| {
            entry
                .fragments(cap)
                .into_iter()
                .map(move |text| Record::new(text, entry.label.clone()))
        })
        .collect()
}

/// Serialize records as CSV with a `[text_key, label_key]` header.
pub fn records_to_csv(records: &[Record], text_key: &str, label_key: &str) -> std::io::Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record([text_key, label_key]).map_err(csv_to_io)?;
    for record in records {
        wtr.write_record([record.text.as_str(), record.label.as_str()])
            .map_err(csv_to_io)?;
    }

    wtr.into_inner().map_err(|e| e.into_error())
}

fn csv_to_io(err: csv::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, CsvError::from(err))
}

/// Write `content` to `path`, creating or truncating it.
fn write_output(path: &Path, content: &[u8]) -> ConvertResult<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content)
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::io(path, e))
}
