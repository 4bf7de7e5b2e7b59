//! Record shapes shared by the dashboard, the map and the CLI.
//!
//! All structs derive `Serialize` so they can be handed to D3.js/Leaflet as
//! JSON from the Dioxus WASM frontend, and `Deserialize` where they arrive
//! from the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// One well's measured output volume for a given date.
///
/// The sample backend names the volume column `production_volume`; both
/// spellings are accepted. Extra columns such as `latitude` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionData {
    pub well_name: String,
    /// ISO date (`YYYY-MM-DD`). Kept as an opaque label.
    pub date: String,
    /// Barrels of oil.
    #[serde(alias = "production_volume")]
    pub oil_volume: f64,
    pub region: String,
}

/// A named extraction site with a fixed location.
///
/// Wells are never deserialized directly; see `ogp_data::wells` for the
/// field-by-field validation applied to backend payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellData {
    pub id: Option<u64>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
}

/// A (label, value) pair fed to the bar and doughnut charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
}

/// One line of the chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

/// Request body for `POST /chatbot`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Response body for `POST /chatbot`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Immutable view of the production records currently shown.
///
/// The dashboard replaces the whole snapshot on every successful fetch;
/// children only ever read it. Cloning is cheap (`Rc`).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSnapshot {
    pub records: Rc<[ProductionData]>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for ProductionSnapshot {
    fn default() -> Self {
        Self {
            records: Rc::from(Vec::new()),
            updated_at: None,
        }
    }
}

impl ProductionSnapshot {
    pub fn new(records: Vec<ProductionData>, updated_at: DateTime<Utc>) -> Self {
        Self {
            records: records.into(),
            updated_at: Some(updated_at),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_accepts_oil_volume() {
        let json = r#"{"well_name":"A","date":"2024-01-02","oil_volume":10.5,"region":"North"}"#;
        let record: ProductionData = serde_json::from_str(json).unwrap();
        assert_eq!(record.oil_volume, 10.5);
        assert_eq!(record.region, "North");
    }

    #[test]
    fn production_accepts_backend_column_name() {
        // Sample backend rows carry production_volume plus coordinates
        let json = r#"[{"well_name":"Well-1","date":"2023-01-01","production_volume":1000,
            "region":"North","latitude":30.0,"longitude":-95.0}]"#;
        let records: Vec<ProductionData> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].oil_volume, 1000.0);
        assert_eq!(records[0].well_name, "Well-1");
    }

    #[test]
    fn production_missing_volume_is_rejected() {
        let json = r#"{"well_name":"A","date":"2024-01-02","region":"North"}"#;
        assert!(serde_json::from_str::<ProductionData>(json).is_err());
    }

    #[test]
    fn chat_reply_parses() {
        let reply: ChatReply = serde_json::from_str(r#"{"response":"hi"}"#).unwrap();
        assert_eq!(reply.response, "hi");
        let body = serde_json::to_string(&ChatRequest { message: "Hello" }).unwrap();
        assert_eq!(body, r#"{"message":"Hello"}"#);
    }

    #[test]
    fn snapshot_clone_shares_records() {
        let snapshot = ProductionSnapshot::new(
            vec![ProductionData {
                well_name: "A".to_string(),
                date: "2024-01-01".to_string(),
                oil_volume: 1.0,
                region: "North".to_string(),
            }],
            Utc::now(),
        );
        let copy = snapshot.clone();
        assert!(Rc::ptr_eq(&snapshot.records, &copy.records));
        assert_eq!(copy.len(), 1);
        assert!(ProductionSnapshot::default().is_empty());
    }
}
