use crate::catalog::normalize_products;
use crate::model::Cycle;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for an endoflife.date-compatible API.
///
/// Two endpoints: `GET <base>/all.json` for the product universe and
/// `GET <base>/<product>.json` for one product's release cycles. Callers
/// treat any error as "no data"; nothing here retries.
pub struct EolApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl EolApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("eolscan/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let response = response
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?;

        response
            .json()
            .await
            .with_context(|| format!("{} returned unparseable JSON", url))
    }
}

#[async_trait]
impl super::LifecycleSource for EolApiClient {
    async fn fetch_products(&self) -> Result<Vec<String>> {
        let url = format!("{}/all.json", self.base_url);
        let value = self.get_json(&url).await?;
        Ok(normalize_products(&value))
    }

    async fn fetch_cycles(&self, product: &str) -> Result<Vec<Cycle>> {
        let url = format!("{}/{}.json", self.base_url, product);
        let value = self.get_json(&url).await?;
        let cycles: Vec<Cycle> = serde_json::from_value(value)
            .with_context(|| format!("cycle data for '{}' has an unexpected shape", product))?;
        Ok(cycles)
    }
}
