//! Core types for the oil & gas production dashboard.
//!
//! - `models`: record shapes exchanged with the backend and the charts
//! - `filter`: filter criteria and their query-string encoding
//! - `config`: backend base URL and endpoint construction
//! - `client`: reqwest-based API client (feature `api`)

pub mod config;
pub mod filter;
pub mod models;

#[cfg(feature = "api")]
pub mod client;

pub use config::ApiConfig;
pub use filter::{FilterCriteria, Region};
pub use models::{ChartDatum, ChatMessage, ProductionData, ProductionSnapshot, WellData};

#[cfg(feature = "api")]
pub use client::ApiClient;
