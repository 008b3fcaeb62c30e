use crate::model::{ScanResult, ScanSummary};
use anyhow::Result;

pub fn summary_json(summary: &ScanSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn detailed_json(results: &[ScanResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_json_is_an_array() {
        let results = vec![ScanResult::not_found("ghost", Some("1.0"))];
        let json = detailed_json(&results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["status"], "not_found");
        assert_eq!(value[0]["version"], "1.0");
    }
}
