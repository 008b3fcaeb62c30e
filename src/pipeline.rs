//! The row pipeline: inventory rows in, scan results out.
//!
//! One [`EolScanner`] is built per process run. Construction fetches the
//! product catalog once; after that the scanner is handed input files one
//! at a time and walks their rows sequentially, so the result order always
//! equals the input row order.

use crate::catalog::Catalog;
use crate::checker::{match_product, resolve_status, LifecycleSource};
use crate::input::{self, InputError};
use crate::model::{Cycle, FileScan, ScanResult};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, error, warn};

pub struct EolScanner<S> {
    source: S,
    catalog: Catalog,
    /// Cycles fetched so far this run, one network call per distinct product.
    cycles: HashMap<String, Vec<Cycle>>,
}

impl<S: LifecycleSource> EolScanner<S> {
    /// Build a scanner, fetching the product catalog once.
    ///
    /// A failed catalog fetch degrades to an empty catalog: every row then
    /// resolves as `not_found`, and the run still completes.
    pub async fn new(source: S) -> Self {
        let catalog = match source.fetch_products().await {
            Ok(products) => Catalog::from_products(products),
            Err(e) => {
                error!("Failed to fetch product list from API: {e:#}");
                Catalog::default()
            }
        };
        Self {
            source,
            catalog,
            cycles: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scan one inventory file into an ordered result set.
    ///
    /// Unreadable or malformed files abort with an [`InputError`]; row-level
    /// problems only skip the row.
    pub async fn scan_file(&mut self, path: &Path) -> Result<FileScan, InputError> {
        let records = input::read_records(path)?;
        let mut scan = FileScan::default();

        for record in records {
            let Some(package_name) = record.package_name().map(str::to_string) else {
                warn!("Row {}: No package name found", record.row_number);
                scan.skipped_rows += 1;
                continue;
            };
            let version = record.version().map(str::to_string);

            let result = match match_product(&package_name, &self.catalog) {
                Some(product) => {
                    scan.matched_products.insert(product.clone());
                    let cycles = self.cycles_for(&product).await;
                    resolve_status(&product, version.as_deref(), &cycles)
                }
                None => ScanResult::not_found(&package_name, version.as_deref()),
            };

            debug!("Processed {} (row {})", package_name, record.row_number);
            scan.results.push(result.with_row(
                record.row_number,
                package_name,
                record.fields,
            ));
        }

        Ok(scan)
    }

    /// Cycles for a product, fetched at most once per run.
    ///
    /// Transport and parse failures degrade to an empty list, which the
    /// resolver reports as `unknown`; the empty list is memoized too, so a
    /// flaky product is not re-fetched for every row that matches it.
    async fn cycles_for(&mut self, product: &str) -> Vec<Cycle> {
        if let Some(cycles) = self.cycles.get(product) {
            return cycles.clone();
        }

        let cycles = match self.source.fetch_cycles(product).await {
            Ok(cycles) => cycles,
            Err(e) => {
                warn!("Failed to fetch cycles for {product}: {e:#}");
                Vec::new()
            }
        };
        self.cycles.insert(product.to_string(), cycles.clone());
        cycles
    }
}
