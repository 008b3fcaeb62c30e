//! Inventory file reading.
//!
//! Input files are delimited text exports (JFrog-style): a header row
//! naming the columns, then one package per row. The delimiter is sniffed
//! from the first kilobyte, fields may be double-quoted with `""` escapes,
//! and package name / version are pulled from the first recognized column
//! alias.

use std::collections::BTreeMap;
use std::path::Path;

/// Name-column aliases, highest priority first.
pub const NAME_COLUMNS: [&str; 5] = ["name", "package_name", "package", "component", "artifact"];

/// Version-column aliases, highest priority first.
pub const VERSION_COLUMNS: [&str; 4] = ["version", "package_version", "ver", "release"];

/// How much of the file the delimiter sniffer looks at.
const SNIFF_LEN: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input file not found: {0}")]
    NotFound(String),
    #[error("not a CSV file: {0}")]
    NotCsv(String),
    #[error("input file is not valid UTF-8: {0}")]
    Decode(String),
    #[error("input file has no header row: {0}")]
    MissingHeader(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One data row: 1-based row number plus header→value fields.
///
/// Headers are lowercased and trimmed at parse time so alias lookup is
/// case-insensitive; values are trimmed and empty values count as absent.
#[derive(Debug, Clone)]
pub struct Record {
    pub row_number: usize,
    pub fields: BTreeMap<String, String>,
}

impl Record {
    fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Package name from the first present name alias.
    pub fn package_name(&self) -> Option<&str> {
        NAME_COLUMNS.iter().find_map(|col| self.get(col))
    }

    /// Version from the first present version alias.
    pub fn version(&self) -> Option<&str> {
        VERSION_COLUMNS.iter().find_map(|col| self.get(col))
    }
}

/// Read and parse an inventory file into data records, in file order.
pub fn read_records(path: &Path) -> Result<Vec<Record>, InputError> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(InputError::NotFound(display));
    }
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(InputError::NotCsv(display));
    }

    let bytes = std::fs::read(path).map_err(|source| InputError::Io {
        path: display.clone(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| InputError::Decode(display.clone()))?;

    parse_records(&content, &display)
}

fn parse_records(content: &str, display: &str) -> Result<Vec<Record>, InputError> {
    let delimiter = sniff_delimiter(content);

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let header_line = lines
        .next()
        .ok_or_else(|| InputError::MissingHeader(display.to_string()))?;
    let headers: Vec<String> = split_line(header_line, delimiter)
        .into_iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut records = Vec::new();
    for (row_number, line) in lines.enumerate() {
        let values = split_line(line, delimiter);
        let fields = headers
            .iter()
            .zip(values)
            .map(|(header, value)| (header.clone(), value.trim().to_string()))
            .collect();
        records.push(Record {
            row_number: row_number + 1,
            fields,
        });
    }

    Ok(records)
}

/// Pick the delimiter by presence in the first kilobyte, comma before
/// semicolon before tab; comma when none appears.
fn sniff_delimiter(content: &str) -> char {
    let end = content
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= SNIFF_LEN)
        .last()
        .unwrap_or(0);
    let sample = &content[..end];

    for candidate in [',', ';', '\t'] {
        if sample.contains(candidate) {
            return candidate;
        }
    }
    ','
}

/// Split one line on the delimiter, honoring double-quoted fields with
/// `""` escapes.
fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_sniff_comma() {
        assert_eq!(sniff_delimiter("name,version\nnginx,1.0\n"), ',');
    }

    #[test]
    fn test_sniff_semicolon() {
        assert_eq!(sniff_delimiter("name;version\nnginx;1.0\n"), ';');
    }

    #[test]
    fn test_sniff_tab() {
        assert_eq!(sniff_delimiter("name\tversion\nnginx\t1.0\n"), '\t');
    }

    #[test]
    fn test_sniff_priority_comma_first() {
        // Both present: comma outranks semicolon.
        assert_eq!(sniff_delimiter("a;b,c\n"), ',');
    }

    #[test]
    fn test_sniff_defaults_to_comma() {
        assert_eq!(sniff_delimiter("justoneword\n"), ',');
    }

    #[test]
    fn test_split_line_plain() {
        assert_eq!(split_line("a,b,c", ','), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_line_quoted() {
        assert_eq!(
            split_line(r#""a,b",c"#, ','),
            vec!["a,b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_split_line_escaped_quote() {
        assert_eq!(
            split_line(r#""say ""hi""",x"#, ','),
            vec![r#"say "hi""#.to_string(), "x".to_string()]
        );
    }

    #[test]
    fn test_split_line_trailing_empty_field() {
        assert_eq!(split_line("a,b,", ','), vec!["a", "b", ""]);
    }

    #[test]
    fn test_read_records_basic() {
        let (_dir, path) = write_temp("inv.csv", "name,version\nnginx,1.18\nredis,6.2\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].row_number, 1);
        assert_eq!(records[0].package_name(), Some("nginx"));
        assert_eq!(records[0].version(), Some("1.18"));
        assert_eq!(records[1].row_number, 2);
        assert_eq!(records[1].package_name(), Some("redis"));
    }

    #[test]
    fn test_read_records_header_case_insensitive() {
        let (_dir, path) = write_temp("inv.csv", "Name,VERSION\nnginx,1.18\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records[0].package_name(), Some("nginx"));
        assert_eq!(records[0].version(), Some("1.18"));
    }

    #[test]
    fn test_alias_priority_name_beats_component() {
        let (_dir, path) = write_temp("inv.csv", "component,name\nlibfoo,nginx\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records[0].package_name(), Some("nginx"));
    }

    #[test]
    fn test_version_alias_release() {
        let (_dir, path) = write_temp("inv.csv", "artifact,release\nnginx,1.18\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records[0].package_name(), Some("nginx"));
        assert_eq!(records[0].version(), Some("1.18"));
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let (_dir, path) = write_temp("inv.csv", "name,version\nnginx,\n,1.0\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records[0].version(), None);
        assert_eq!(records[1].package_name(), None);
    }

    #[test]
    fn test_semicolon_file() {
        let (_dir, path) = write_temp("inv.csv", "name;version\nnginx;1.18\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records[0].package_name(), Some("nginx"));
        assert_eq!(records[0].version(), Some("1.18"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_records(Path::new("/nonexistent/inv.csv")).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
    }

    #[test]
    fn test_wrong_extension() {
        let (_dir, path) = write_temp("inv.txt", "name,version\n");
        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, InputError::NotCsv(_)));
    }

    #[test]
    fn test_extension_case_insensitive() {
        let (_dir, path) = write_temp("inv.CSV", "name,version\nnginx,1.18\n");
        assert_eq!(read_records(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inv.csv");
        std::fs::write(&path, [0x6e, 0x61, 0xff, 0xfe, 0x0a]).unwrap();
        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, InputError::Decode(_)));
    }

    #[test]
    fn test_empty_file_missing_header() {
        let (_dir, path) = write_temp("inv.csv", "");
        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, InputError::MissingHeader(_)));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let (_dir, path) = write_temp("inv.csv", "name,version\n\nnginx,1.18\n\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].row_number, 1);
    }
}
