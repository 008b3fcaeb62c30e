use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Whether and how a package was located in the lifecycle database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Product and (if given) version both resolved
    Found,
    /// Product resolved but no cycle label equals the version
    VersionNotFound,
    /// No product in the catalog matched the package name
    NotFound,
    /// Product matched but the database served no cycle data
    Unknown,
}

/// Support state derived from the matched cycle's `eol` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportStatus {
    Active,
    Eol,
    Unknown,
}

impl SupportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportStatus::Active => "active",
            SupportStatus::Eol => "eol",
            SupportStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Found => "found",
            MatchStatus::VersionNotFound => "version_not_found",
            MatchStatus::NotFound => "not_found",
            MatchStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome for one inventory row.
///
/// Created once per resolvable row and never mutated afterwards; the
/// bookkeeping fields (`original_package`, `row_number`, `raw_data`) are
/// attached by the pipeline via [`ScanResult::with_row`] before the value
/// is appended to the result sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Matched catalog key, or the raw package name when nothing matched
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eol_date: Option<NaiveDate>,
    pub support_status: SupportStatus,
    pub message: String,
    pub original_package: String,
    pub row_number: usize,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub raw_data: BTreeMap<String, String>,
}

impl ScanResult {
    /// Result for a package name that matched nothing in the catalog.
    pub fn not_found(package_name: &str, version: Option<&str>) -> Self {
        Self {
            product: package_name.to_string(),
            version: version.map(str::to_string),
            status: MatchStatus::NotFound,
            eol_date: None,
            support_status: SupportStatus::Unknown,
            message: "Package not found in EOL database".to_string(),
            original_package: String::new(),
            row_number: 0,
            raw_data: BTreeMap::new(),
        }
    }

    /// Attach the row bookkeeping fields.
    pub fn with_row(
        mut self,
        row_number: usize,
        original_package: String,
        raw_data: BTreeMap<String, String>,
    ) -> Self {
        self.row_number = row_number;
        self.original_package = original_package;
        self.raw_data = raw_data;
        self
    }
}

/// Per-run counts by status, written as `summary_<ts>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub scan_timestamp: DateTime<Utc>,
    pub total_packages: usize,
    pub matched_products: usize,
    pub eol_packages: usize,
    pub active_packages: usize,
    pub unknown_packages: usize,
    pub not_found_packages: usize,
    pub skipped_rows: usize,
}

impl ScanSummary {
    pub fn from_scan(scan: &FileScan, scan_timestamp: DateTime<Utc>) -> Self {
        let count_support = |s: SupportStatus| {
            scan.results
                .iter()
                .filter(|r| r.support_status == s)
                .count()
        };
        Self {
            scan_timestamp,
            total_packages: scan.results.len(),
            matched_products: scan.matched_products.len(),
            eol_packages: count_support(SupportStatus::Eol),
            active_packages: count_support(SupportStatus::Active),
            unknown_packages: count_support(SupportStatus::Unknown),
            not_found_packages: scan
                .results
                .iter()
                .filter(|r| r.status == MatchStatus::NotFound)
                .count(),
            skipped_rows: scan.skipped_rows,
        }
    }
}

/// Everything produced by scanning one input file, in input row order.
#[derive(Debug, Clone, Default)]
pub struct FileScan {
    pub results: Vec<ScanResult>,
    /// Distinct catalog keys that at least one row matched
    pub matched_products: HashSet<String>,
    /// Rows dropped for lack of a resolvable package name
    pub skipped_rows: usize,
}
