//! HTTP client for the production backend.
//!
//! Works both natively (CLI) and in the browser, where reqwest rides on
//! `fetch`. No timeouts, retries or cancellation: every call is a single
//! request/response.

use crate::config::ApiConfig;
use crate::filter::FilterCriteria;
use crate::models::{ChatReply, ChatRequest, ProductionData};
use log::{debug, info};
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch production records matching the set criteria.
    pub async fn fetch_production(
        &self,
        filters: &FilterCriteria,
    ) -> anyhow::Result<Vec<ProductionData>> {
        let url = self.config.production_url(filters);
        info!("Fetching production data from {}", url);
        let records: Vec<ProductionData> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!("Received {} production records", records.len());
        Ok(records)
    }

    /// Fetch raw well records.
    ///
    /// Records are returned unvalidated; malformed entries are dropped by
    /// `ogp_data::wells::validate_wells` rather than failing the whole call.
    pub async fn fetch_wells(&self) -> anyhow::Result<Vec<serde_json::Value>> {
        let url = self.config.wells_url();
        info!("Fetching wells from {}", url);
        let wells: Vec<serde_json::Value> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!("Received {} well records", wells.len());
        Ok(wells)
    }

    /// Send one chat message and return the assistant's reply text.
    pub async fn send_chat(&self, message: &str) -> anyhow::Result<String> {
        let reply: ChatReply = self
            .client
            .post(self.config.chatbot_url())
            .json(&ChatRequest { message })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(reply.response)
    }
}
