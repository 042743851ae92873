// CourtScout - core/detail.rs
//
// Court detail view model and directions link.

use crate::core::model::{CourtRecord, GeoPoint};
use crate::util::constants::{DIRECTIONS_ROUTE_URL, DIRECTIONS_SEARCH_URL};

const NOT_AVAILABLE: &str = "N/A";

/// Everything the detail panel shows for one selected court.
#[derive(Debug, Clone, PartialEq)]
pub struct CourtDetail {
    pub id: usize,
    pub name: String,
    pub location: String,
    pub courts: String,
    pub position: GeoPoint,
    pub directions_url: String,
}

impl CourtDetail {
    /// Build the detail for `record`. Returns `None` when the record has no
    /// valid point to show or navigate to.
    pub fn from_record(record: &CourtRecord, reference: Option<GeoPoint>) -> Option<Self> {
        let position = record.position()?;
        Some(Self {
            id: record.id,
            name: non_empty_or_na(Some(&record.name)),
            location: non_empty_or_na(record.location.as_deref()),
            courts: non_empty_or_na(record.courts_text.as_deref()),
            position,
            directions_url: directions_url(position, reference),
        })
    }
}

fn non_empty_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Link to directions for `destination`.
///
/// With a usable `origin` this is a route from origin to destination;
/// otherwise a plain map search for the destination.
pub fn directions_url(destination: GeoPoint, origin: Option<GeoPoint>) -> String {
    match origin.filter(GeoPoint::in_range) {
        Some(origin) => format!(
            "{DIRECTIONS_ROUTE_URL}&origin={origin}&destination={destination}"
        ),
        None => format!("{DIRECTIONS_SEARCH_URL}&query={destination}"),
    }
}
