// CourtScout - core/dataset.rs
//
// GeoJSON court dataset loading. Each feature becomes a CourtRecord with its
// court count and type derived once, at load time.

use crate::core::model::{CourtRecord, Geometry};
use crate::util::constants;
use crate::util::error::DatasetError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }
}

/// GeoJSON `Feature`. Properties and geometry may be null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_kind")]
    pub kind: String,

    #[serde(default)]
    pub properties: Option<Map<String, Value>>,

    #[serde(default)]
    pub geometry: Option<Geometry>,
}

fn feature_kind() -> String {
    "Feature".to_string()
}

/// Read a dataset file from disk, enforcing the size limit.
pub fn load_file(path: &Path) -> Result<Vec<CourtRecord>, DatasetError> {
    let metadata = std::fs::metadata(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if metadata.len() > constants::MAX_DATASET_FILE_SIZE {
        return Err(DatasetError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_DATASET_FILE_SIZE,
        });
    }

    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let records = load_records(std::io::BufReader::new(file), path)?;

    tracing::info!(
        path = %path.display(),
        courts = records.len(),
        "Court dataset loaded"
    );
    Ok(records)
}

/// Parse a dataset from any reader. `source` is used for error context only.
pub fn load_records<R: Read>(reader: R, source: &Path) -> Result<Vec<CourtRecord>, DatasetError> {
    let collection: FeatureCollection =
        serde_json::from_reader(reader).map_err(|e| DatasetError::Json {
            path: source.to_path_buf(),
            source: e,
        })?;

    if collection.kind != "FeatureCollection" {
        return Err(DatasetError::NotFeatureCollection {
            path: source.to_path_buf(),
            found: collection.kind,
        });
    }
    if collection.features.len() > constants::MAX_FEATURES {
        return Err(DatasetError::TooManyFeatures {
            count: collection.features.len(),
            max: constants::MAX_FEATURES,
        });
    }

    Ok(records_from_features(collection.features))
}

/// Convert features to records, deriving count and type.
pub fn records_from_features(features: Vec<Feature>) -> Vec<CourtRecord> {
    let records: Vec<CourtRecord> = features
        .into_iter()
        .enumerate()
        .map(|(id, feature)| record_from_feature(id, feature))
        .collect();

    let without_position = records.iter().filter(|r| r.position().is_none()).count();
    if without_position > 0 {
        tracing::warn!(
            count = without_position,
            "Some courts have no valid point geometry and will be hidden by distance filters"
        );
    }
    records
}

fn record_from_feature(id: usize, feature: Feature) -> CourtRecord {
    let properties = feature.properties.unwrap_or_default();

    // Non-string values (numbers, booleans) count as absent.
    let text = |key: &str| properties.get(key).and_then(Value::as_str).map(str::to_string);

    let name = text("name").unwrap_or_default();
    let location = text("location").filter(|l| !l.trim().is_empty());
    let courts_text = text(constants::COURTS_PROPERTY);

    let mut record = CourtRecord::new(id, name, courts_text.as_deref(), feature.geometry);
    record.location = location;
    record.properties = properties;
    record
}

/// Convert a record back into a feature, adding the derived fields (and the
/// current distance, when defined) to its properties.
pub fn to_feature(record: &CourtRecord) -> Feature {
    let mut properties = record.properties.clone();
    properties.insert("court_count".to_string(), Value::from(record.count));
    properties.insert(
        "court_type".to_string(),
        Value::from(record.court_type.key()),
    );
    match record.distance_km.filter(|d| d.is_finite()) {
        Some(distance) => {
            properties.insert("distance_km".to_string(), Value::from(distance));
        }
        None => {
            properties.remove("distance_km");
        }
    }

    Feature {
        kind: feature_kind(),
        properties: Some(properties),
        geometry: record.geometry.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{apply_filters, FilterState};
    use crate::core::model::{CourtType, GeoPoint};

    fn parse(json: &str) -> Result<Vec<CourtRecord>, DatasetError> {
        load_records(json.as_bytes(), Path::new("test.geojson"))
    }

    #[test]
    fn test_load_feature_collection() {
        let records = parse(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {
                            "name": "Court A",
                            "location": "Laurelhurst Park",
                            "number of courts": "3 Indoor courts"
                        },
                        "geometry": { "type": "Point", "coordinates": [-122.7, 45.5] }
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let court = &records[0];
        assert_eq!(court.id, 0);
        assert_eq!(court.name, "Court A");
        assert_eq!(court.location.as_deref(), Some("Laurelhurst Park"));
        assert_eq!(court.count, 3);
        assert_eq!(court.court_type, CourtType::Indoor);
        assert_eq!(court.position(), Some(GeoPoint::new(45.5, -122.7)));
    }

    #[test]
    fn test_non_string_court_field_is_absent() {
        let records = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"X","number of courts":4},"geometry":null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(records[0].count, 0);
        assert_eq!(records[0].court_type, CourtType::Unknown);
        assert_eq!(records[0].courts_text, None);
    }

    #[test]
    fn test_null_properties_and_coordinates_load() {
        let records = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":null,
                 "geometry":{"type":"Point","coordinates":[null,null]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(records[0].name, "");
        assert_eq!(records[0].position(), None);
    }

    #[test]
    fn test_geometry_without_type_only_fails_distance_gate() {
        let mut records = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"A","number of courts":"3 Indoor courts"},
                 "geometry":{"type":"Point","coordinates":[-122.7,45.5]}},
                {"type":"Feature","properties":{"name":"B","number of courts":"2 Outdoor courts"},
                 "geometry":{"coordinates":[-122.8,45.6]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "B");
        assert_eq!(records[1].count, 2);
        assert_eq!(records[1].position(), None);

        let unlocated = apply_filters(&mut records, &FilterState::default());
        assert_eq!(unlocated.matched, vec![0, 1]);

        let located = apply_filters(
            &mut records,
            &FilterState {
                reference: Some(GeoPoint::new(45.5, -122.7)),
                max_distance_km: Some(100.0),
                ..Default::default()
            },
        );
        assert_eq!(located.matched, vec![0]);
        assert_eq!(records[1].distance_km, None);
    }

    #[test]
    fn test_rejects_non_collection() {
        let err = parse(r#"{"type":"Feature","features":[]}"#).unwrap_err();
        assert!(matches!(err, DatasetError::NotFeatureCollection { .. }));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, DatasetError::Json { .. }));
    }

    #[test]
    fn test_to_feature_adds_derived_fields() {
        let mut records = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"C","number of courts":"4 Indoor/Outdoor courts"},
                 "geometry":{"type":"Point","coordinates":[-122.9,45.7]}}
            ]}"#,
        )
        .unwrap();
        records[0].distance_km = Some(27.2);

        let feature = to_feature(&records[0]);
        let props = feature.properties.unwrap();
        assert_eq!(props["name"], "C");
        assert_eq!(props["court_count"], 4);
        assert_eq!(props["court_type"], "both");
        assert_eq!(props["distance_km"], 27.2);
    }
}
