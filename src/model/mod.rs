//! Core data types for lifecycle cycles and scan results.
//!
//! This module contains the fundamental types used throughout eolscan:
//!
//! - [`Cycle`] - One release line of a product, as served by the API
//! - [`DateOrBool`] - The API's date-or-boolean `eol` field
//! - [`ScanResult`] - The outcome for one inventory row
//! - [`ScanSummary`] - Per-run counts by status
//! - [`FileScan`] - Everything produced by scanning one input file
//!
//! # Example
//!
//! ```
//! use eolscan::{MatchStatus, ScanResult, SupportStatus};
//!
//! let result = ScanResult::not_found("leftpad", None)
//!     .with_row(1, "leftpad".to_string(), Default::default());
//!
//! assert_eq!(result.status, MatchStatus::NotFound);
//! assert_eq!(result.support_status, SupportStatus::Unknown);
//! ```

mod cycle;
mod scan;

pub use cycle::*;
pub use scan::*;
