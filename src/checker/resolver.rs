use crate::model::{Cycle, MatchStatus, ScanResult, SupportStatus};
use std::collections::BTreeMap;

/// Derive the support status of a matched product at a given version.
///
/// Pure lookup over the cycle list; the pipeline attaches row bookkeeping
/// to the returned result. Rules, in order:
///
/// - no cycle data → `unknown`/`unknown`;
/// - no version → the first cycle is "latest" and decides the status;
/// - otherwise the first cycle whose label equals the version exactly
///   (string equality, no normalization) decides it;
/// - no label equal to the version → `version_not_found`.
///
/// A present-and-truthy `eol` field means end of life, even when the date
/// is still in the future; only an absent or `false` value is active.
pub fn resolve_status(product: &str, version: Option<&str>, cycles: &[Cycle]) -> ScanResult {
    if cycles.is_empty() {
        return ScanResult {
            product: product.to_string(),
            version: version.map(str::to_string),
            status: MatchStatus::Unknown,
            eol_date: None,
            support_status: SupportStatus::Unknown,
            message: "Product not found in EOL database".to_string(),
            original_package: String::new(),
            row_number: 0,
            raw_data: BTreeMap::new(),
        };
    }

    let Some(version) = version else {
        // No version in the inventory row: report on the newest cycle.
        let latest = &cycles[0];
        let (support_status, eol_date) = support_of(latest);
        return ScanResult {
            product: product.to_string(),
            version: Some("latest".to_string()),
            status: MatchStatus::Found,
            eol_date,
            support_status,
            message: format!("Found {} versions", cycles.len()),
            original_package: String::new(),
            row_number: 0,
            raw_data: BTreeMap::new(),
        };
    };

    for cycle in cycles {
        if cycle.cycle == version {
            let (support_status, eol_date) = support_of(cycle);
            let message = match (support_status, eol_date) {
                (SupportStatus::Eol, Some(date)) => format!("EOL date: {}", date),
                (SupportStatus::Eol, None) => "No longer supported".to_string(),
                _ => "Still supported".to_string(),
            };
            return ScanResult {
                product: product.to_string(),
                version: Some(version.to_string()),
                status: MatchStatus::Found,
                eol_date,
                support_status,
                message,
                original_package: String::new(),
                row_number: 0,
                raw_data: BTreeMap::new(),
            };
        }
    }

    ScanResult {
        product: product.to_string(),
        version: Some(version.to_string()),
        status: MatchStatus::VersionNotFound,
        eol_date: None,
        support_status: SupportStatus::Unknown,
        message: format!("Version {} not found for {}", version, product),
        original_package: String::new(),
        row_number: 0,
        raw_data: BTreeMap::new(),
    }
}

fn support_of(cycle: &Cycle) -> (SupportStatus, Option<chrono::NaiveDate>) {
    match &cycle.eol {
        Some(eol) if eol.is_truthy() => (SupportStatus::Eol, eol.as_date()),
        _ => (SupportStatus::Active, None),
    }
}
