use anyhow::Result;
use contracts::domain::sale::SaleRecord;

use crate::shared::config;

/// HTTP client for the products endpoint of the remote sales API.
///
/// One GET per dashboard run; the endpoint returns the complete record batch
/// for the given filters as a single JSON array (no pagination).
pub struct ProductsApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProductsApiClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Client configured from the loaded application config.
    pub fn from_config() -> Self {
        let source = &config::get().source;
        Self::new(source.base_url.clone(), source.timeout_secs)
    }

    /// Fetch the record batch for the given filters.
    ///
    /// `regiao` is a region name (lower-cased on the wire) or empty for the
    /// whole country; `ano` is a four-digit year or empty for the whole
    /// period. Transport failures, non-2xx statuses and unparsable payloads
    /// all abort the run.
    pub async fn fetch(&self, regiao: &str, ano: &str) -> Result<Vec<SaleRecord>> {
        let regiao = regiao.to_lowercase();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("regiao", regiao.as_str()), ("ano", ano)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Products API request failed: {}", body);
            anyhow::bail!(
                "Products API request failed with status {}: {}",
                status,
                body
            );
        }

        let body = response.text().await?;
        let preview: String = body.chars().take(200).collect();
        tracing::debug!("Products API response preview: {}", preview);

        let records: Vec<SaleRecord> = serde_json::from_str(&body)?;
        tracing::info!(
            "Products API returned {} records (regiao='{}', ano='{}')",
            records.len(),
            regiao,
            ano
        );
        Ok(records)
    }
}
