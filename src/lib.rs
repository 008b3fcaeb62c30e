pub mod catalog;
pub mod checker;
pub mod config;
pub mod input;
pub mod model;
pub mod output;
pub mod pipeline;

pub use catalog::Catalog;
pub use config::Config;
pub use model::{Cycle, DateOrBool, FileScan, MatchStatus, ScanResult, ScanSummary, SupportStatus};
pub use pipeline::EolScanner;
