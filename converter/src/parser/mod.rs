//! Intent CSV reader with encoding auto-detection.
//!
//! Turns a comma-separated file with a header row into [`Record`]s. The
//! two required columns are located by name, so column order and any
//! extra columns don't matter.

use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::Record;

/// Records read from a CSV together with what was detected along the way.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub records: Vec<Record>,
    /// Detected encoding label
    pub encoding: String,
    /// Header row, as found
    pub headers: Vec<String>,
}

/// UTF-8 byte-order mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 (with or without a BOM) is always reported as `utf-8`;
/// chardet only guesses for anything else. Returns a label `encoding_rs`
/// understands; anything it doesn't is reported as `utf-8`.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if std::str::from_utf8(body).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(body).0;

    let normalized = match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    };

    if encoding_rs::Encoding::for_label(normalized.as_bytes()).is_some() {
        normalized
    } else {
        "utf-8".to_string()
    }
}

/// Decode bytes to a string using the given encoding label.
///
/// A leading byte-order mark is stripped. Malformed sequences are
/// replaced rather than rejected; only an unknown label is an error.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let encoding = encoding_rs::Encoding::for_label(encoding.trim().as_bytes())
        .ok_or_else(|| CsvError::Encoding(format!("unknown encoding '{}'", encoding)))?;

    let (decoded, _, _) = encoding.decode(bytes);
    Ok(decoded.into_owned())
}

/// Read records from a CSV stream.
///
/// Fails with [`CsvError::MissingColumn`] before reading any data row when
/// either column is absent from the header.
pub fn read_records<R: Read>(reader: R, label_key: &str, text_key: &str) -> CsvResult<ParsedTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let label_idx = column_index(&headers, label_key)?;
    let text_idx = column_index(&headers, text_key)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        records.push(Record::new(
            row.get(text_idx).unwrap_or(""),
            row.get(label_idx).unwrap_or(""),
        ));
    }

    Ok(ParsedTable {
        records,
        encoding: "utf-8".to_string(),
        headers,
    })
}

/// Read records from raw CSV bytes, detecting their encoding first.
pub fn read_records_bytes(bytes: &[u8], label_key: &str, text_key: &str) -> CsvResult<ParsedTable> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;

    let mut table = read_records(content.as_bytes(), label_key, text_key)?;
    table.encoding = encoding;
    Ok(table)
}

/// Read records from a CSV file, detecting its encoding first.
pub fn read_records_file<P: AsRef<Path>>(path: P, label_key: &str, text_key: &str) -> CsvResult<ParsedTable> {
    let bytes = std::fs::read(path.as_ref())?;
    read_records_bytes(&bytes, label_key, text_key)
}

fn column_index(headers: &[String], name: &str) -> CsvResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CsvError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_csv() {
        let csv = "text,intent\nIs it open?,hours\nHello,greet\n";
        let table = read_records(csv.as_bytes(), "intent", "text").unwrap();

        assert_eq!(table.headers, vec!["text", "intent"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0], Record::new("Is it open?", "hours"));
        assert_eq!(table.records[1], Record::new("Hello", "greet"));
    }

    #[test]
    fn test_column_order_irrelevant() {
        let csv = "id,intent,text\n1,hours,Is it open?\n";
        let table = read_records(csv.as_bytes(), "intent", "text").unwrap();

        assert_eq!(table.records[0], Record::new("Is it open?", "hours"));
    }

    #[test]
    fn test_quoted_values() {
        let csv = "text,intent\n\"Hi, is it \"\"open\"\"?\",hours\n";
        let table = read_records(csv.as_bytes(), "intent", "text").unwrap();

        assert_eq!(table.records[0].text, "Hi, is it \"open\"?");
    }

    #[test]
    fn test_missing_column() {
        let csv = "text,label\nHello,greet\n";
        let err = read_records(csv.as_bytes(), "intent", "text").unwrap_err();

        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "intent"));
    }

    #[test]
    fn test_short_row_reads_as_empty() {
        let csv = "intent,text\nhours\n";
        let table = read_records(csv.as_bytes(), "intent", "text").unwrap();

        assert_eq!(table.records[0], Record::new("", "hours"));
    }

    #[test]
    fn test_empty_csv_error() {
        let err = read_records_bytes(b"", "intent", "text").unwrap_err();
        assert!(matches!(err, CsvError::EmptyFile));
    }

    #[test]
    fn test_bytes_detects_utf8() {
        let csv = "text,intent\nCan I pay online?,payment\n";
        let table = read_records_bytes(csv.as_bytes(), "intent", "text").unwrap();

        assert_eq!(table.encoding, "utf-8");
        assert_eq!(table.records.len(), 1);
    }

    #[test]
    fn test_utf8_accents_kept_verbatim() {
        let csv = "text,intent\nCafé is open?,hours\nCan I pay in €?,payment\nIs it naïve?,misc\nÊtes-vous ouvert? is it?,hours\n";
        let table = read_records_bytes(csv.as_bytes(), "intent", "text").unwrap();

        assert_eq!(table.encoding, "utf-8");
        assert_eq!(table.records[0], Record::new("Café is open?", "hours"));
        assert_eq!(table.records[1], Record::new("Can I pay in €?", "payment"));
        assert_eq!(table.records[2], Record::new("Is it naïve?", "misc"));
        assert_eq!(table.records[3], Record::new("Êtes-vous ouvert? is it?", "hours"));
    }

    #[test]
    fn test_detect_encoding_utf8_with_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("text,intent\nÇa va?,greet\n".as_bytes());

        assert_eq!(detect_encoding(&bytes), "utf-8");
        let table = read_records_bytes(&bytes, "intent", "text").unwrap();
        assert_eq!(table.headers, vec!["text", "intent"]);
        assert_eq!(table.records[0], Record::new("Ça va?", "greet"));
    }

    #[test]
    fn test_invalid_utf8_goes_through_detection() {
        // "Société?" in ISO-8859-1 is not valid UTF-8
        let bytes: &[u8] = b"text,intent\nSoci\xe9t\xe9?,org\n";
        let table = read_records_bytes(bytes, "intent", "text").unwrap();

        assert_eq!(table.records[0].label, "org");
        assert!(table.records[0].text.starts_with("Soci"));
    }

    #[test]
    fn test_bom_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"text,intent\nHi?,greet\n");
        let content = decode_content(&bytes, "utf-8").unwrap();

        assert!(content.starts_with("text,intent"));
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_unknown_encoding_label() {
        let err = decode_content(b"abc", "klingon-8").unwrap_err();
        assert!(matches!(err, CsvError::Encoding(_)));
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.csv");
        std::fs::write(&path, "text,intent\nCan I pay online?,payment\n").unwrap();

        let table = read_records_file(&path, "intent", "text").unwrap();
        assert_eq!(table.records, vec![Record::new("Can I pay online?", "payment")]);

        let missing = read_records_file(dir.path().join("absent.csv"), "intent", "text");
        assert!(matches!(missing, Err(CsvError::Io(_))));
    }
}
