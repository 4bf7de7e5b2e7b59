//! Backend location.
//!
//! The web app bakes the base URL in at build time (`OGP_API_URL`); the CLI
//! can override it per invocation.

use crate::filter::FilterCriteria;
use anyhow::anyhow;
use url::Url;

/// Base URL used when `OGP_API_URL` was not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Where the backend lives and how its endpoint URLs are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("API base URL cannot carry paths: {}", base_url));
        }
        Ok(Self { base_url })
    }

    /// Configuration resolved once at build time.
    pub fn from_build_env() -> anyhow::Result<Self> {
        Self::new(option_env!("OGP_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was ruled out in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name);
        }
        url
    }

    /// `GET {base}/production` with the set criteria as query parameters.
    pub fn production_url(&self, filters: &FilterCriteria) -> Url {
        let mut url = self.endpoint("production");
        let query = filters.to_query_string();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        url
    }

    /// `GET {base}/wells`
    pub fn wells_url(&self) -> Url {
        self.endpoint("wells")
    }

    /// `POST {base}/chatbot`
    pub fn chatbot_url(&self) -> Url {
        self.endpoint("chatbot")
    }
}
