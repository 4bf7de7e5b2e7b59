//! Well validation, marker placement and viewport bounds for the map view.
//!
//! Backend well payloads are checked field by field on the raw JSON value so
//! one malformed record never sinks the whole response.

use log::warn;
use ogp_core::models::WellData;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// OpenStreetMap tile template.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const TILE_MAX_ZOOM: u8 = 18;

/// Initial view before any bounds are fitted (Abu Dhabi).
pub const DEFAULT_CENTER: (f64, f64) = (24.4782545, 54.379262);
pub const DEFAULT_ZOOM: u8 = 8;

/// Padding in pixels kept around fitted bounds.
pub const FIT_PADDING: (u32, u32) = (50, 50);
/// Fitting never zooms in further than this.
pub const FIT_MAX_ZOOM: u8 = 12;

/// Why a well record was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellRejection {
    NotAnObject,
    MissingName,
    MissingLatitude,
    MissingLongitude,
    MissingRegion,
}

impl fmt::Display for WellRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            WellRejection::NotAnObject => "record is not an object",
            WellRejection::MissingName => "name is missing or not a string",
            WellRejection::MissingLatitude => "latitude is missing or not a number",
            WellRejection::MissingLongitude => "longitude is missing or not a number",
            WellRejection::MissingRegion => "region is missing or not a string",
        };
        write!(f, "Invalid well: {}", reason)
    }
}

impl std::error::Error for WellRejection {}

/// Check one raw record. `name` may also arrive as `well_name`.
pub fn validate_well(raw: &Value) -> Result<WellData, WellRejection> {
    let object = raw.as_object().ok_or(WellRejection::NotAnObject)?;
    let name = object
        .get("name")
        .or_else(|| object.get("well_name"))
        .and_then(Value::as_str)
        .ok_or(WellRejection::MissingName)?;
    let latitude = object
        .get("latitude")
        .and_then(Value::as_f64)
        .ok_or(WellRejection::MissingLatitude)?;
    let longitude = object
        .get("longitude")
        .and_then(Value::as_f64)
        .ok_or(WellRejection::MissingLongitude)?;
    let region = object
        .get("region")
        .and_then(Value::as_str)
        .ok_or(WellRejection::MissingRegion)?;

    Ok(WellData {
        id: object.get("id").and_then(Value::as_u64),
        name: name.to_string(),
        latitude,
        longitude,
        region: region.to_string(),
    })
}

/// Outcome of validating a whole `/wells` response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub valid: Vec<WellData>,
    pub rejected: Vec<(usize, WellRejection)>,
}

impl ValidationReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Validate every record, logging and counting the ones dropped.
pub fn validate_wells(raw: &[Value]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (index, item) in raw.iter().enumerate() {
        match validate_well(item) {
            Ok(well) => report.valid.push(well),
            Err(reason) => {
                warn!("Dropping well record {}: {} ({})", index, reason, item);
                report.rejected.push((index, reason));
            }
        }
    }
    report
}

/// Zero and NaN coordinates are treated as "no location".
fn has_location(well: &WellData) -> bool {
    let truthy = |v: f64| v != 0.0 && !v.is_nan();
    truthy(well.latitude) && truthy(well.longitude)
}

/// A marker with its popup text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub region: String,
}

/// Latitude/longitude box, `south_west` to `north_east`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub south_west: (f64, f64),
    pub north_east: (f64, f64),
}

impl Bounds {
    /// Smallest box covering every located well, or `None` when there are
    /// no located wells or they all sit on the same point.
    pub fn covering(wells: &[WellData]) -> Option<Self> {
        let mut located = wells.iter().filter(|w| has_location(w));
        let first = located.next()?;
        let mut bounds = Bounds {
            south_west: (first.latitude, first.longitude),
            north_east: (first.latitude, first.longitude),
        };
        for well in located {
            bounds.south_west.0 = bounds.south_west.0.min(well.latitude);
            bounds.south_west.1 = bounds.south_west.1.min(well.longitude);
            bounds.north_east.0 = bounds.north_east.0.max(well.latitude);
            bounds.north_east.1 = bounds.north_east.1.max(well.longitude);
        }
        if bounds.south_west == bounds.north_east {
            return None;
        }
        Some(bounds)
    }
}

/// Everything the map draws for one load. Built from scratch each time so a
/// refetch replaces, rather than adds to, the previous markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayers {
    pub tile_url: &'static str,
    pub tile_attribution: &'static str,
    pub tile_max_zoom: u8,
    pub markers: Vec<Marker>,
    /// `None` leaves the default view untouched.
    pub fit: Option<Bounds>,
    pub fit_padding: (u32, u32),
    pub fit_max_zoom: u8,
}

impl MapLayers {
    pub fn build(wells: &[WellData]) -> Self {
        let markers = wells
            .iter()
            .filter(|w| has_location(w))
            .map(|w| Marker {
                lat: w.latitude,
                lng: w.longitude,
                title: w.name.clone(),
                region: w.region.clone(),
            })
            .collect();
        Self {
            tile_url: TILE_URL,
            tile_attribution: TILE_ATTRIBUTION,
            tile_max_zoom: TILE_MAX_ZOOM,
            markers,
            fit: Bounds::covering(wells),
            fit_padding: FIT_PADDING,
            fit_max_zoom: FIT_MAX_ZOOM,
        }
    }
}

/// Initial map options handed to Leaflet before any data arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDefaults {
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url: &'static str,
    pub tile_attribution: &'static str,
    pub tile_max_zoom: u8,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url: TILE_URL,
            tile_attribution: TILE_ATTRIBUTION,
            tile_max_zoom: TILE_MAX_ZOOM,
        }
    }
}

/// Phases of the map view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MapPhase {
    /// Nothing requested yet; a placeholder is shown.
    #[default]
    Idle,
    Fetching,
    Loaded {
        layers: MapLayers,
        rejected: usize,
    },
    Failed(String),
}

impl MapPhase {
    /// Turn a `/wells` response into the loaded phase.
    pub fn from_response(raw: &[Value]) -> Self {
        let report = validate_wells(raw);
        if report.valid.is_empty() {
            log::error!("No valid well data found ({} rejected)", report.rejected_count());
        }
        MapPhase::Loaded {
            layers: MapLayers::build(&report.valid),
            rejected: report.rejected_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn well(name: &str, lat: f64, lng: f64) -> WellData {
        WellData {
            id: None,
            name: name.to_string(),
            latitude: lat,
            longitude: lng,
            region: "North".to_string(),
        }
    }

    #[test]
    fn accepts_well_name_alias_and_id() {
        let raw = json!({"id": 7, "well_name": "Well-1", "latitude": 30.0, "longitude": -95.0, "region": "North"});
        let well = validate_well(&raw).unwrap();
        assert_eq!(well.id, Some(7));
        assert_eq!(well.name, "Well-1");
        assert_eq!(well.longitude, -95.0);
    }

    #[test]
    fn missing_latitude_is_dropped() {
        let raw = vec![
            json!({"name": "A", "latitude": 24.1, "longitude": 54.2, "region": "North"}),
            json!({"name": "B", "longitude": 54.3, "region": "South"}),
        ];
        let report = validate_wells(&raw);
        assert_eq!(report.valid.len(), 1);
        assert_eq!(report.rejected, vec![(1, WellRejection::MissingLatitude)]);

        let layers = MapLayers::build(&report.valid);
        assert_eq!(layers.markers.len(), 1);
        assert_eq!(layers.markers[0].title, "A");
    }

    #[test]
    fn rejections_are_discriminated() {
        let cases = [
            (json!("nope"), WellRejection::NotAnObject),
            (json!({"name": 3, "latitude": 1.0, "longitude": 1.0, "region": "N"}), WellRejection::MissingName),
            (json!({"name": "A", "latitude": "1", "longitude": 1.0, "region": "N"}), WellRejection::MissingLatitude),
            (json!({"name": "A", "latitude": 1.0, "longitude": null, "region": "N"}), WellRejection::MissingLongitude),
            (json!({"name": "A", "latitude": 1.0, "longitude": 1.0}), WellRejection::MissingRegion),
        ];
        for (raw, expected) in cases {
            assert_eq!(validate_well(&raw), Err(expected));
        }
    }

    #[test]
    fn zero_coordinates_get_no_marker() {
        let wells = vec![well("A", 0.0, 54.0), well("B", 24.0, 54.0)];
        let layers = MapLayers::build(&wells);
        assert_eq!(layers.markers.len(), 1);
        assert_eq!(layers.markers[0].title, "B");
    }

    #[test]
    fn bounds_cover_all_located_wells() {
        let wells = vec![well("A", 24.0, 54.5), well("B", 25.5, 53.0), well("C", 0.0, 0.0)];
        let bounds = Bounds::covering(&wells).unwrap();
        assert_eq!(bounds.south_west, (24.0, 53.0));
        assert_eq!(bounds.north_east, (25.5, 54.5));
    }

    #[test]
    fn no_wells_leave_default_view() {
        assert_eq!(Bounds::covering(&[]), None);
        let layers = MapLayers::build(&[]);
        assert!(layers.markers.is_empty());
        assert!(layers.fit.is_none());
    }

    #[test]
    fn identical_points_are_degenerate() {
        let wells = vec![well("A", 24.0, 54.0), well("B", 24.0, 54.0)];
        assert_eq!(Bounds::covering(&wells), None);
        // Markers are still placed
        assert_eq!(MapLayers::build(&wells).markers.len(), 2);
    }

    #[test]
    fn empty_response_still_loads() {
        match MapPhase::from_response(&[]) {
            MapPhase::Loaded { layers, rejected } => {
                assert!(layers.markers.is_empty());
                assert_eq!(rejected, 0);
            }
            other => panic!("unexpected phase {:?}", other),
        }
    }

    #[test]
    fn layers_serialize_for_leaflet() {
        let layers = MapLayers::build(&[well("A", 24.0, 54.0), well("B", 25.0, 55.0)]);
        let json = serde_json::to_value(&layers).unwrap();
        assert_eq!(json["fitMaxZoom"], 12);
        assert_eq!(json["fitPadding"], json!([50, 50]));
        assert_eq!(json["markers"][1]["title"], "B");
        assert_eq!(json["fit"]["southWest"], json!([24.0, 54.0]));
        assert_eq!(json["fit"]["northEast"], json!([25.0, 55.0]));
        assert!(json["fit"].get("south_west").is_none());
    }
}
