mod eol_api;
mod matcher;
mod resolver;

pub use eol_api::EolApiClient;
pub use matcher::match_product;
pub use resolver::resolve_status;

use crate::model::Cycle;
use anyhow::Result;
use async_trait::async_trait;

/// A source of lifecycle data: the universe of known products and the
/// release cycles of each.
///
/// The production implementation is [`EolApiClient`]; tests substitute an
/// in-memory fake so the pipeline never touches the network.
#[async_trait]
pub trait LifecycleSource: Send + Sync {
    /// Fetch all known product keys, already normalized from whichever
    /// response shape the service uses.
    async fn fetch_products(&self) -> Result<Vec<String>>;

    /// Fetch the release cycles for one product, newest first as the
    /// database serves them.
    async fn fetch_cycles(&self, product: &str) -> Result<Vec<Cycle>>;
}

pub fn default_source(base_url: &str, timeout_secs: u64) -> EolApiClient {
    EolApiClient::new(base_url, timeout_secs)
}
