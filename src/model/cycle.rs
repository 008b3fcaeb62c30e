use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The `eol` field of the lifecycle API, which serves either a
/// `YYYY-MM-DD` date string or a plain boolean.
///
/// `"eol": "2020-01-01"` means the cycle reached end of life on that date,
/// `"eol": true` means it is EOL with no published date, and
/// `"eol": false` means it is still supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateOrBool {
    Date(String),
    Bool(bool),
}

impl DateOrBool {
    /// Truthiness as the database means it: `false` is the only falsy value.
    /// Any date string, even one in the future, marks the cycle as EOL.
    pub fn is_truthy(&self) -> bool {
        match self {
            DateOrBool::Bool(b) => *b,
            DateOrBool::Date(_) => true,
        }
    }

    /// The date form parsed as a `NaiveDate`, if this value carries one.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateOrBool::Date(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
            DateOrBool::Bool(_) => None,
        }
    }
}

/// One release line of a product (e.g. a major version) with its EOL marker.
///
/// The API serves more fields per cycle (`latest`, `releaseDate`, `lts`, ...);
/// only the ones status resolution needs are kept, the rest are ignored at
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    /// Release cycle label (e.g. "3.11", "22")
    pub cycle: String,
    /// EOL status; absent means the database has not published one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eol: Option<DateOrBool>,
}

impl Cycle {
    pub fn new(cycle: impl Into<String>, eol: Option<DateOrBool>) -> Self {
        Self {
            cycle: cycle.into(),
            eol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_or_bool_date_is_truthy() {
        let d = DateOrBool::Date("2020-01-01".to_string());
        assert!(d.is_truthy());
        assert_eq!(
            d.as_date(),
            Some(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_date_or_bool_future_date_is_truthy() {
        let d = DateOrBool::Date("2099-12-31".to_string());
        assert!(d.is_truthy());
    }

    #[test]
    fn test_date_or_bool_bool() {
        assert!(DateOrBool::Bool(true).is_truthy());
        assert!(!DateOrBool::Bool(false).is_truthy());
        assert!(DateOrBool::Bool(true).as_date().is_none());
    }

    #[test]
    fn test_date_or_bool_unparseable_date() {
        let d = DateOrBool::Date("soon".to_string());
        assert!(d.is_truthy());
        assert!(d.as_date().is_none());
    }

    #[test]
    fn test_date_or_bool_deserialization() {
        let date: DateOrBool = serde_json::from_str("\"2025-04-30\"").unwrap();
        assert_eq!(date, DateOrBool::Date("2025-04-30".to_string()));

        let yes: DateOrBool = serde_json::from_str("true").unwrap();
        assert_eq!(yes, DateOrBool::Bool(true));

        let no: DateOrBool = serde_json::from_str("false").unwrap();
        assert_eq!(no, DateOrBool::Bool(false));
    }

    #[test]
    fn test_cycle_deserialization_ignores_extra_fields() {
        let json = r#"{
            "cycle": "3.11",
            "releaseDate": "2022-10-24",
            "eol": "2027-10-31",
            "latest": "3.11.8",
            "lts": false
        }"#;
        let cycle: Cycle = serde_json::from_str(json).unwrap();
        assert_eq!(cycle.cycle, "3.11");
        assert_eq!(cycle.eol, Some(DateOrBool::Date("2027-10-31".to_string())));
    }

    #[test]
    fn test_cycle_deserialization_missing_eol() {
        let cycle: Cycle = serde_json::from_str(r#"{"cycle": "1.0"}"#).unwrap();
        assert!(cycle.eol.is_none());
    }
}
