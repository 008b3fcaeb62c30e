//! Report artifacts.
//!
//! Each processed input file produces one timestamped artifact set in the
//! output directory:
//!
//! - `summary_<ts>.json` — counts by status
//! - `detailed_results_<ts>.json` — every scan result
//! - `eol_report_<ts>.csv` — all results, tabular
//! - `eol_packages_<ts>.csv` — EOL rows only, skipped when empty
//! - `eol_report_<ts>.html` — human-readable report
//!
//! The timestamp is `%Y%m%d_%H%M%S`, so artifact names sort
//! chronologically and repeated runs never collide.

mod cli;
mod csv;
mod html;
mod json;

pub use cli::print_cli_summary;
pub use csv::results_to_csv;
pub use html::generate_html_string;
pub use json::{detailed_json, summary_json};

use crate::model::{ScanResult, ScanSummary, SupportStatus};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes one timestamped artifact set.
pub struct ReportSet {
    output_dir: PathBuf,
    timestamp: DateTime<Utc>,
}

impl ReportSet {
    pub fn new(output_dir: &Path, timestamp: DateTime<Utc>) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            timestamp,
        }
    }

    /// The sortable label embedded in every artifact name.
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format("%Y%m%d_%H%M%S").to_string()
    }

    /// Write all artifacts, returning the paths written.
    pub fn write_all(
        &self,
        results: &[ScanResult],
        summary: &ScanSummary,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        let label = self.timestamp_label();
        let mut written = Vec::new();

        let mut write = |name: String, content: String| -> Result<()> {
            let path = self.output_dir.join(name);
            fs::write(&path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            written.push(path);
            Ok(())
        };

        write(format!("summary_{label}.json"), summary_json(summary)?)?;
        write(
            format!("detailed_results_{label}.json"),
            detailed_json(results)?,
        )?;
        write(format!("eol_report_{label}.csv"), results_to_csv(results))?;

        let eol_only: Vec<ScanResult> = results
            .iter()
            .filter(|r| r.support_status == SupportStatus::Eol)
            .cloned()
            .collect();
        if !eol_only.is_empty() {
            write(format!("eol_packages_{label}.csv"), results_to_csv(&eol_only))?;
        }

        write(
            format!("eol_report_{label}.html"),
            generate_html_string(results, summary),
        )?;

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MatchStatus, ScanResult};
    use chrono::TimeZone;

    fn eol_result() -> ScanResult {
        ScanResult {
            product: "nginx".to_string(),
            version: Some("1.18".to_string()),
            status: MatchStatus::Found,
            eol_date: chrono::NaiveDate::from_ymd_opt(2022, 4, 12),
            support_status: SupportStatus::Eol,
            message: "EOL date: 2022-04-12".to_string(),
            original_package: "nginx".to_string(),
            row_number: 1,
            raw_data: Default::default(),
        }
    }

    fn summary_of(results: &[ScanResult], ts: DateTime<Utc>) -> ScanSummary {
        let scan = crate::model::FileScan {
            results: results.to_vec(),
            matched_products: Default::default(),
            skipped_rows: 0,
        };
        ScanSummary::from_scan(&scan, ts)
    }

    #[test]
    fn test_timestamp_label_is_sortable() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 9, 5, 3).unwrap();
        let set = ReportSet::new(Path::new("out"), ts);
        assert_eq!(set.timestamp_label(), "20260806_090503");
    }

    #[test]
    fn test_write_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let results = vec![eol_result()];
        let summary = summary_of(&results, ts);

        let set = ReportSet::new(dir.path(), ts);
        let written = set.write_all(&results, &summary).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "summary_20260806_120000.json",
                "detailed_results_20260806_120000.json",
                "eol_report_20260806_120000.csv",
                "eol_packages_20260806_120000.csv",
                "eol_report_20260806_120000.html",
            ]
        );
        for path in &written {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_eol_only_export_omitted_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let mut active = eol_result();
        active.support_status = SupportStatus::Active;
        active.eol_date = None;
        let results = vec![active];
        let summary = summary_of(&results, ts);

        let set = ReportSet::new(dir.path(), ts);
        let written = set.write_all(&results, &summary).unwrap();

        assert!(written
            .iter()
            .all(|p| !p.to_string_lossy().contains("eol_packages")));
        assert_eq!(written.len(), 4);
    }

    #[test]
    fn test_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let ts = Utc::now();
        let results = vec![eol_result()];
        let summary = summary_of(&results, ts);

        ReportSet::new(&nested, ts)
            .write_all(&results, &summary)
            .unwrap();
        assert!(nested.exists());
    }
}
