// CourtScout - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Geographic point
// =============================================================================

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Finite and inside the latitude/longitude ranges.
    pub fn in_range(&self) -> bool {
        use crate::util::constants::{MAX_LATITUDE, MAX_LONGITUDE};
        self.is_finite()
            && (-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
            && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.lng)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

// =============================================================================
// Court type
// =============================================================================

/// Court setting derived from the free-text court description.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum CourtType {
    Indoor,
    Outdoor,
    Both,
    #[default]
    Unknown,
}

impl CourtType {
    /// Returns all variants in display order.
    pub fn all() -> &'static [CourtType] {
        &[
            CourtType::Indoor,
            CourtType::Outdoor,
            CourtType::Both,
            CourtType::Unknown,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            CourtType::Indoor => "Indoor",
            CourtType::Outdoor => "Outdoor",
            CourtType::Both => "Indoor/Outdoor",
            CourtType::Unknown => "Unknown",
        }
    }

    /// Lowercase key used in exports and GeoJSON properties.
    pub fn key(&self) -> &'static str {
        match self {
            CourtType::Indoor => "indoor",
            CourtType::Outdoor => "outdoor",
            CourtType::Both => "both",
            CourtType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CourtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured form of a "number of courts" description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourtInfo {
    pub count: u32,
    pub court_type: CourtType,
}

// =============================================================================
// Geometry
// =============================================================================

/// GeoJSON geometry as it appears in the dataset.
///
/// Coordinates are kept as a flat list of optional numbers so that features
/// with `null` or non-numeric coordinates still load. A missing or non-string
/// `type` loads as an empty kind. Such records are rejected later by the
/// distance gate instead of failing the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: String,

    #[serde(default, deserialize_with = "lenient_coordinates")]
    pub coordinates: Vec<Option<f64>>,
}

impl Geometry {
    /// Point geometry from `[lng, lat]`.
    pub fn point(lng: f64, lat: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: vec![Some(lng), Some(lat)],
        }
    }

    /// The point position, if this is a `Point` with two finite coordinates.
    pub fn as_point(&self) -> Option<GeoPoint> {
        if self.kind != "Point" || self.coordinates.len() != 2 {
            return None;
        }
        let lng = self.coordinates[0]?;
        let lat = self.coordinates[1]?;
        let point = GeoPoint::new(lat, lng);
        point.is_finite().then_some(point)
    }
}

/// Accept any JSON value for the geometry `type`; non-strings become empty.
fn lenient_kind<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string).unwrap_or_default())
}

/// Accept any JSON value for `coordinates`. Flat arrays keep their numeric
/// members (non-numbers become `None`); anything else becomes empty.
fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items.iter().map(serde_json::Value::as_f64).collect(),
        _ => Vec::new(),
    })
}

// =============================================================================
// Court record
// =============================================================================

/// One court entry: geometry plus raw and derived properties.
///
/// Everything except `distance_km` is fixed after loading. `distance_km` is a
/// transient annotation written by each filter pass.
#[derive(Debug, Clone)]
pub struct CourtRecord {
    /// Position of this record in the loaded dataset.
    pub id: usize,

    /// Display name.
    pub name: String,

    /// Free-text location label (address, park, neighbourhood).
    pub location: Option<String>,

    /// Raw "number of courts" text as found in the dataset.
    pub courts_text: Option<String>,

    /// Derived court count.
    pub count: u32,

    /// Derived court type.
    pub court_type: CourtType,

    /// Feature geometry, if the feature had one.
    pub geometry: Option<Geometry>,

    /// The full original property bag, kept for export.
    pub properties: serde_json::Map<String, serde_json::Value>,

    /// Distance from the reference location in km, set by the last filter
    /// pass. `None` when no reference was set or the geometry is invalid.
    pub distance_km: Option<f64>,
}

impl CourtRecord {
    /// Build a record from its parts, deriving count and type from
    /// `courts_text`.
    pub fn new(
        id: usize,
        name: impl Into<String>,
        courts_text: Option<&str>,
        geometry: Option<Geometry>,
    ) -> Self {
        let info = crate::core::parser::parse_court_string(courts_text);
        Self {
            id,
            name: name.into(),
            location: None,
            courts_text: courts_text.map(str::to_string),
            count: info.count,
            court_type: info.court_type,
            geometry,
            properties: serde_json::Map::new(),
            distance_km: None,
        }
    }

    /// Valid point position, if any.
    pub fn position(&self) -> Option<GeoPoint> {
        self.geometry.as_ref().and_then(Geometry::as_point)
    }

    /// Distance formatted for display, e.g. "3.27 km". `None` when the
    /// distance is undefined or infinite.
    pub fn distance_label(&self) -> Option<String> {
        self.distance_km
            .filter(|d| d.is_finite())
            .map(|d| format!("{d:.2} km"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_geometry_position() {
        let geometry = Geometry::point(-122.7, 45.5);
        assert_eq!(geometry.as_point(), Some(GeoPoint::new(45.5, -122.7)));
    }

    #[test]
    fn test_null_coordinates_are_invalid() {
        let geometry: Geometry =
            serde_json::from_str(r#"{"type":"Point","coordinates":[null,null]}"#).unwrap();
        assert_eq!(geometry.coordinates, vec![None, None]);
        assert_eq!(geometry.as_point(), None);
    }

    #[test]
    fn test_nan_and_non_point_are_invalid() {
        assert_eq!(Geometry::point(f64::NAN, 45.0).as_point(), None);
        let polygon: Geometry =
            serde_json::from_str(r#"{"type":"Polygon","coordinates":[[[0,0],[1,1],[0,1]]]}"#)
                .unwrap();
        assert_eq!(polygon.as_point(), None);
    }

    #[test]
    fn test_missing_or_null_type_is_invalid() {
        let missing: Geometry = serde_json::from_str(r#"{"coordinates":[-122.8,45.6]}"#).unwrap();
        assert_eq!(missing.kind, "");
        assert_eq!(missing.as_point(), None);

        let null: Geometry =
            serde_json::from_str(r#"{"type":null,"coordinates":[-122.8,45.6]}"#).unwrap();
        assert_eq!(null.as_point(), None);
    }

    #[test]
    fn test_record_derives_count_and_type() {
        let record = CourtRecord::new(0, "Court A", Some("3 Indoor courts"), None);
        assert_eq!(record.count, 3);
        assert_eq!(record.court_type, CourtType::Indoor);
        assert_eq!(record.position(), None);
    }

    #[test]
    fn test_distance_label() {
        let mut record = CourtRecord::new(0, "Court A", None, None);
        assert_eq!(record.distance_label(), None);
        record.distance_km = Some(3.14159);
        assert_eq!(record.distance_label().as_deref(), Some("3.14 km"));
        record.distance_km = Some(f64::INFINITY);
        assert_eq!(record.distance_label(), None);
    }

    #[test]
    fn test_court_type_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&CourtType::Both).unwrap(), "\"both\"");
    }
}
