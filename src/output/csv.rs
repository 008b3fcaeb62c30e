//! Tabular result export.
//!
//! Fixed column set, one line per scan result, RFC 4180 quoting. The raw
//! source row is deliberately left to the detailed JSON export.

use crate::model::ScanResult;

const HEADER: &str = "product,version,status,eol_date,support_status,message,original_package,row_number";

pub fn results_to_csv(results: &[ScanResult]) -> String {
    let mut content = String::new();
    content.push_str(HEADER);
    content.push('\n');

    for result in results {
        content.push_str(&format!(
            "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",{}\n",
            escape_csv(&result.product),
            result.version.as_deref().map(escape_csv).unwrap_or_default(),
            result.status,
            result
                .eol_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            result.support_status,
            escape_csv(&result.message),
            escape_csv(&result.original_package),
            result.row_number,
        ));
    }

    content
}

/// Escape a string for CSV embedding: double-quote escaping per RFC 4180,
/// plus newline flattening since fields are already wrapped in double quotes.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MatchStatus, SupportStatus};

    #[test]
    fn test_header_and_row() {
        let result = ScanResult {
            product: "nginx".to_string(),
            version: Some("1.18".to_string()),
            status: MatchStatus::Found,
            eol_date: chrono::NaiveDate::from_ymd_opt(2022, 4, 12),
            support_status: SupportStatus::Eol,
            message: "EOL date: 2022-04-12".to_string(),
            original_package: "nginx".to_string(),
            row_number: 3,
            raw_data: Default::default(),
        };
        let csv = results_to_csv(&[result]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(
            lines.next(),
            Some(
                r#""nginx","1.18","found","2022-04-12","eol","EOL date: 2022-04-12","nginx",3"#
            )
        );
    }

    #[test]
    fn test_missing_optionals_render_empty() {
        let csv = results_to_csv(&[ScanResult::not_found("ghost", None)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with(r#""ghost","","not_found","","unknown""#));
    }

    #[test]
    fn test_quotes_and_newlines_escaped() {
        let mut result = ScanResult::not_found("odd", None);
        result.message = "line one\nwith \"quotes\"".to_string();
        let csv = results_to_csv(&[result]);
        assert!(csv.contains(r#""line one with ""quotes""""#));
    }

    #[test]
    fn test_empty_results_still_emit_header() {
        let csv = results_to_csv(&[]);
        assert_eq!(csv, format!("{HEADER}\n"));
    }
}
