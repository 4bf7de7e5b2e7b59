//! Filter criteria collected by the filter form and their query encoding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-specified constraints narrowing the production query.
///
/// Every field is a plain string; an empty string means "unset". Values are
/// carried verbatim (no trimming or validation) from the form to the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub start_date: String,
    pub end_date: String,
    pub region: String,
    pub well_name: String,
}

impl FilterCriteria {
    /// Query parameters for `GET /production`, omitting unset criteria.
    ///
    /// Order is fixed: `start_date`, `end_date`, `region`, `well_name`.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("start_date", self.start_date.as_str()),
            ("end_date", self.end_date.as_str()),
            ("region", self.region.as_str()),
            ("well_name", self.well_name.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// URL-encoded query string (no leading `?`). Empty when nothing is set.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Regions offered by the filter form's select box.
///
/// The data model keeps `region` as a free string; this enum only lists the
/// choices the form presents. "All Regions" maps to the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_criteria_are_omitted() {
        let filters = FilterCriteria {
            start_date: "2024-01-01".to_string(),
            end_date: String::new(),
            region: "North".to_string(),
            well_name: String::new(),
        };
        let query = filters.to_query_string();
        assert_eq!(query, "start_date=2024-01-01&region=North");
        assert!(!query.contains("end_date"));
        assert!(!query.contains("well_name"));
    }

    #[test]
    fn default_criteria_produce_no_query() {
        let filters = FilterCriteria::default();
        assert!(filters.is_unfiltered());
        assert_eq!(filters.to_query_string(), "");
    }

    #[test]
    fn values_are_not_trimmed_but_are_encoded() {
        let filters = FilterCriteria {
            well_name: " Well 1&2".to_string(),
            ..Default::default()
        };
        assert_eq!(filters.query_pairs(), vec![("well_name", " Well 1&2")]);
        assert_eq!(filters.to_query_string(), "well_name=+Well+1%262");
    }

    #[test]
    fn serializes_with_form_field_names() {
        let filters = FilterCriteria {
            start_date: "2024-01-01".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["wellName"], "");
    }

    #[test]
    fn region_labels() {
        let labels: Vec<String> = Region::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, vec!["North", "South", "East", "West"]);
    }
}
