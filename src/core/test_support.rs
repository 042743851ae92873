// CourtScout - core/test_support.rs
//
// Shared fixtures for unit tests: five courts around Portland, OR.

use crate::core::model::{CourtRecord, GeoPoint, Geometry};

/// Courts A-E. A sits on the reference point, B and D are ~13.6 km away,
/// C is ~27 km away, and E has null coordinates.
pub(crate) fn sample_records() -> Vec<CourtRecord> {
    let bad_coords = Geometry {
        kind: "Point".to_string(),
        coordinates: vec![None, None],
    };
    vec![
        CourtRecord::new(0, "A", Some("3 Indoor courts"), Some(Geometry::point(-122.7, 45.5))),
        CourtRecord::new(1, "B", Some("2 Outdoor courts"), Some(Geometry::point(-122.8, 45.6))),
        CourtRecord::new(
            2,
            "C",
            Some("4 Indoor/Outdoor courts"),
            Some(Geometry::point(-122.9, 45.7)),
        ),
        CourtRecord::new(3, "D", Some("1 Outdoor court"), Some(Geometry::point(-122.6, 45.4))),
        CourtRecord::new(4, "E", Some("1 Outdoor court"), Some(bad_coords)),
    ]
}

/// Reference location at Court A.
pub(crate) fn sample_reference() -> GeoPoint {
    GeoPoint::new(45.5, -122.7)
}

pub(crate) fn names<'a>(records: &[&'a CourtRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
