//! Rasa NLU YAML reading and writing.
//!
//! Writing is done by hand rather than through a generic serializer: the
//! `examples` block has to come out as a literal block scalar and the
//! indentation has to follow a [`YamlFormat`], which `serde_yaml` doesn't
//! offer. Reading goes through `serde_yaml`.
//!
//! With the default format a document looks like:
//!
//! ```text
//! version: "3.0"
//! nlu:
//!   - intent: hours
//!     examples: |
//!       - Is the office open?
//!       - Can I pay online?
//! ```

use serde_yaml::Value;

use crate::config::{ConvertOptions, YamlFormat};
use crate::error::{DocumentError, DocumentResult};
use crate::models::{DocumentEntry, NluDocument};

/// Top-level key holding the entry list.
pub const NLU_KEY: &str = "nlu";

/// Top-level key holding the format version.
pub const VERSION_KEY: &str = "version";

/// Keys used inside each entry of the `nlu` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryKeys<'a> {
    pub label: &'a str,
    pub examples: &'a str,
}

impl<'a> EntryKeys<'a> {
    pub fn new(label: &'a str, examples: &'a str) -> Self {
        Self { label, examples }
    }

    pub fn from_options(options: &'a ConvertOptions) -> Self {
        Self::new(&options.label_key, &options.examples_key)
    }
}

impl Default for EntryKeys<'static> {
    fn default() -> Self {
        Self::new("intent", "examples")
    }
}

// =============================================================================
// Emitting
// =============================================================================

/// Render a document as YAML text.
pub fn emit_document(doc: &NluDocument, format: &YamlFormat, keys: &EntryKeys<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: {}\n", scalar(VERSION_KEY), scalar(&doc.version)));

    if doc.entries.is_empty() {
        out.push_str(&format!("{}: []\n", scalar(NLU_KEY)));
        return out;
    }

    out.push_str(&format!("{}:\n", scalar(NLU_KEY)));

    // `-` sits at `offset`, the entry's keys at `content`. Block lines sit
    // `relative` past their key; an indentation indicator is one digit.
    let dash = format.offset;
    let content = format.sequence.max(dash + 2);
    let relative = format.mapping.clamp(1, 9);
    let block = content + relative;

    for entry in &doc.entries {
        out.push_str(&" ".repeat(dash));
        out.push('-');
        out.push_str(&" ".repeat(content - dash - 1));
        out.push_str(&format!("{}: {}\n", scalar(keys.label), scalar(&entry.label)));

        out.push_str(&" ".repeat(content));
        out.push_str(&scalar(keys.examples));
        out.push(':');
        push_literal(&mut out, &entry.examples, block, relative);
    }

    out
}

/// Append `text` as a literal block scalar whose lines sit at `indent`.
///
/// Starts right after the key's colon. Falls back to a quoted scalar when
/// the text is empty or holds characters a block can't carry.
fn push_literal(out: &mut String, text: &str, indent: usize, relative: usize) {
    if text.is_empty() {
        out.push_str(" ''\n");
        return;
    }
    if !block_safe(text) {
        out.push(' ');
        out.push_str(&double_quoted(text));
        out.push('\n');
        return;
    }

    let chomp = if text.ends_with("\n\n") {
        "+"
    } else if text.ends_with('\n') {
        ""
    } else {
        "-"
    };

    // An explicit indentation indicator is needed when the first
    // non-empty line starts with a space.
    let leading_space = text
        .split('\n')
        .find(|l| !l.is_empty())
        .map_or(false, |l| l.starts_with(' '));
    let indicator = if leading_space {
        relative.to_string()
    } else {
        String::new()
    };

    out.push_str(&format!(" |{}{}\n", indicator, chomp));

    let body = text.strip_suffix('\n').unwrap_or(text);
    let pad = " ".repeat(indent);
    for line in body.split('\n') {
        if !line.is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
        out.push('\n');
    }
}

/// Line and paragraph separators are line breaks to a YAML reader.
const UNICODE_BREAKS: &[char] = &['\u{2028}', '\u{2029}'];

fn block_safe(text: &str) -> bool {
    !text.chars().any(|c| c != '\n' && c != '\t' && c.is_control())
        && !text.contains('\u{feff}')
        && !text.contains(UNICODE_BREAKS)
}

/// Render a scalar, plain when YAML reads it back as the same string.
fn scalar(s: &str) -> String {
    if is_plain_safe(s) {
        s.to_string()
    } else {
        double_quoted(s)
    }
}

/// JSON string syntax is a valid YAML double-quoted scalar, once the
/// separators JSON leaves raw are escaped.
fn double_quoted(s: &str) -> String {
    serde_json::Value::from(s)
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

fn is_plain_safe(s: &str) -> bool {
    const INDICATORS: &[char] = &[
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@',
        '`',
    ];

    let Some(first) = s.chars().next() else {
        return false;
    };
    if INDICATORS.contains(&first)
        || s.starts_with(char::is_whitespace)
        || s.ends_with(char::is_whitespace)
        || s.ends_with(':')
        || s.contains(": ")
        || s.contains(" #")
        || s.chars().any(|c| c.is_control())
        || s.contains(UNICODE_BREAKS)
    {
        return false;
    }

    // Rules out values that would resolve to null, bools or numbers.
    matches!(
        serde_yaml::from_str::<Value>(s),
        Ok(Value::String(ref parsed)) if parsed == s
    )
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse an NLU YAML document.
///
/// The `nlu` key must be present and hold a list; every entry must carry
/// both the label key and the examples key. A null examples value reads
/// as an empty block.
pub fn parse_document(content: &str, keys: &EntryKeys<'_>) -> DocumentResult<NluDocument> {
    let root: Value = serde_yaml::from_str(content)?;

    let items = root
        .get(NLU_KEY)
        .ok_or_else(|| DocumentError::MissingKey(NLU_KEY.to_string()))?
        .as_sequence()
        .ok_or_else(|| DocumentError::NotASequence(NLU_KEY.to_string()))?;

    let version = root
        .get(VERSION_KEY)
        .and_then(scalar_to_string)
        .unwrap_or_default();

    let mut doc = NluDocument::new(version);
    for (index, item) in items.iter().enumerate() {
        doc.push(parse_entry(index, item, keys)?);
    }

    Ok(doc)
}

fn parse_entry(index: usize, item: &Value, keys: &EntryKeys<'_>) -> DocumentResult<DocumentEntry> {
    let invalid = |message: String| DocumentError::InvalidEntry { index, message };

    let examples = match item.get(keys.examples) {
        None => return Err(invalid(format!("missing key '{}'", keys.examples))),
        Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(invalid(format!("'{}' is not a string", keys.examples))),
    };

    let label = item
        .get(keys.label)
        .ok_or_else(|| invalid(format!("missing key '{}'", keys.label)))?;
    let label = scalar_to_string(label)
        .ok_or_else(|| invalid(format!("'{}' is not a scalar", keys.label)))?;

    Ok(DocumentEntry::new(label, examples))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NluDocument {
        let mut doc = NluDocument::new("3.0");
        doc.push(DocumentEntry::new("time", ""));
        doc.push(DocumentEntry::new(
            "hours",
            "- Is the office open?\n- Can I pay online?\n",
        ));
        doc
    }

    #[test]
    fn test_emit_rasa_layout() {
        let yaml = emit_document(&sample(), &YamlFormat::default(), &EntryKeys::default());

        let expected = "\
version: \"3.0\"
nlu:
  - intent: time
    examples: ''
  - intent: hours
    examples: |
      - Is the office open?
      - Can I pay online?
";
        assert_eq!(yaml, expected);
    }

    #[test]
    fn test_emit_custom_indentation() {
        let format = YamlFormat {
            mapping: 4,
            sequence: 2,
            offset: 0,
        };
        let yaml = emit_document(&sample(), &format, &EntryKeys::default());

        assert!(yaml.contains("\n- intent: hours\n  examples: |\n      - Is the office open?\n"));
    }

    #[test]
    fn test_emit_then_parse_keeps_blocks() {
        let mut doc = sample();
        doc.push(DocumentEntry::new("odd: label", "- Is it \"quoted\" #1?\n- no newline"));
        doc.push(DocumentEntry::new("true", "-  indented?\n\n"));
        doc.push(DocumentEntry::new("breaks", "- Is it\u{2028}ok?\n- Can I go?\n"));
        doc.push(DocumentEntry::new("para\u{2029}graph", "- Is it\u{2029}fine?\n"));

        let yaml = emit_document(&doc, &YamlFormat::default(), &EntryKeys::default());
        let parsed = parse_document(&yaml, &EntryKeys::default()).unwrap();

        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_control_characters_fall_back_to_quoted() {
        let mut doc = NluDocument::new("3.0");
        doc.push(DocumentEntry::new("bell", "- Is it \u{7}?\n"));

        let yaml = emit_document(&doc, &YamlFormat::default(), &EntryKeys::default());
        assert!(yaml.contains("examples: \"- Is it \\u0007?\\n\""));

        let parsed = parse_document(&yaml, &EntryKeys::default()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_unicode_separators_are_quoted() {
        let mut doc = NluDocument::new("3.0");
        doc.push(DocumentEntry::new("breaks", "- Is it\u{2028}ok?\n"));

        let yaml = emit_document(&doc, &YamlFormat::default(), &EntryKeys::default());

        assert!(yaml.contains("examples: \"- Is it\\u2028ok?\\n\""));
        assert!(!yaml.contains('\u{2028}'));
        assert_eq!(scalar("a\u{2029}b"), "\"a\\u2029b\"");
    }

    #[test]
    fn test_wide_mapping_indent_is_clamped() {
        let mut doc = NluDocument::new("3.0");
        doc.push(DocumentEntry::new("pad", "  - Is it padded?\n"));
        let format = YamlFormat {
            mapping: 12,
            ..YamlFormat::default()
        };

        let yaml = emit_document(&doc, &format, &EntryKeys::default());

        let block_line = format!("\n{}  - Is it padded?\n", " ".repeat(4 + 9));
        assert!(yaml.contains("examples: |9\n"));
        assert!(yaml.contains(&block_line));
        assert_eq!(parse_document(&yaml, &EntryKeys::default()).unwrap(), doc);
    }

    #[test]
    fn test_empty_entry_list() {
        let doc = NluDocument::new("3.0");
        let yaml = emit_document(&doc, &YamlFormat::default(), &EntryKeys::default());

        assert_eq!(yaml, "version: \"3.0\"\nnlu: []\n");
    }

    #[test]
    fn test_scalar_quoting() {
        assert_eq!(scalar("hours"), "hours");
        assert_eq!(scalar("ask_balance"), "ask_balance");
        assert_eq!(scalar("3.0"), "\"3.0\"");
        assert_eq!(scalar("null"), "\"null\"");
        assert_eq!(scalar(""), "\"\"");
        assert_eq!(scalar("- dash"), "\"- dash\"");
        assert_eq!(scalar("a: b"), "\"a: b\"");
    }

    #[test]
    fn test_parse_custom_keys() {
        let yaml = "nlu:\n- label: greet\n  samples: |\n    - hi\n";
        let keys = EntryKeys::new("label", "samples");
        let doc = parse_document(yaml, &keys).unwrap();

        assert_eq!(doc.version, "");
        assert_eq!(doc.entries, vec![DocumentEntry::new("greet", "- hi\n")]);
    }

    #[test]
    fn test_parse_missing_nlu_key() {
        let err = parse_document("version: \"3.0\"\nrules: []\n", &EntryKeys::default()).unwrap_err();
        assert!(matches!(err, DocumentError::MissingKey(ref k) if k == "nlu"));
    }

    #[test]
    fn test_parse_nlu_not_a_list() {
        let err = parse_document("nlu: hello\n", &EntryKeys::default()).unwrap_err();
        assert!(matches!(err, DocumentError::NotASequence(_)));
    }

    #[test]
    fn test_parse_entry_without_examples() {
        let yaml = "nlu:\n- intent: a\n  examples: |\n    - x\n- synonym: savings\n";
        let err = parse_document(yaml, &EntryKeys::default()).unwrap_err();

        assert!(matches!(err, DocumentError::InvalidEntry { index: 1, .. }));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_document("nlu: [unclosed\n", &EntryKeys::default()).unwrap_err();
        assert!(matches!(err, DocumentError::Yaml(_)));
    }

    #[test]
    fn test_parse_numeric_label() {
        let yaml = "nlu:\n- intent: 42\n  examples:\n";
        let doc = parse_document(yaml, &EntryKeys::default()).unwrap();

        assert_eq!(doc.entries, vec![DocumentEntry::new("42", "")]);
    }
}
