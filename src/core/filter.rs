// CourtScout - core/filter.rs
//
// Composable court filter: distance, court type, and minimum court count.
// All active gates are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::geo::distance_km;
use crate::core::model::{CourtRecord, CourtType, GeoPoint};
use std::str::FromStr;

/// Court-type selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CourtTypeFilter {
    #[default]
    Any,
    Indoor,
    Outdoor,
    /// Only courts offering both settings. Not offered by the filter panel,
    /// but accepted from the CLI and config.
    Both,
}

impl CourtTypeFilter {
    /// Variants offered by the filter panel.
    pub fn selectable() -> &'static [CourtTypeFilter] {
        &[
            CourtTypeFilter::Any,
            CourtTypeFilter::Indoor,
            CourtTypeFilter::Outdoor,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourtTypeFilter::Any => "Any",
            CourtTypeFilter::Indoor => "Indoor",
            CourtTypeFilter::Outdoor => "Outdoor",
            CourtTypeFilter::Both => "Indoor & Outdoor",
        }
    }

    /// Whether a court of `court_type` passes this selector.
    ///
    /// `Both` courts satisfy the indoor and outdoor selectors; `Unknown`
    /// courts only pass `Any`.
    pub fn accepts(&self, court_type: CourtType) -> bool {
        match self {
            CourtTypeFilter::Any => true,
            CourtTypeFilter::Indoor => {
                matches!(court_type, CourtType::Indoor | CourtType::Both)
            }
            CourtTypeFilter::Outdoor => {
                matches!(court_type, CourtType::Outdoor | CourtType::Both)
            }
            CourtTypeFilter::Both => court_type == CourtType::Both,
        }
    }
}

impl FromStr for CourtTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "any" => Ok(CourtTypeFilter::Any),
            "indoor" => Ok(CourtTypeFilter::Indoor),
            "outdoor" => Ok(CourtTypeFilter::Outdoor),
            "both" => Ok(CourtTypeFilter::Both),
            other => Err(format!(
                "unknown court type '{other}' (expected any, indoor, outdoor or both)"
            )),
        }
    }
}

impl std::fmt::Display for CourtTypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete filter state. All fields are AND-combined when applied.
///
/// Owned by the app layer and read-only to the filter pass. The default is
/// the "no filter" state: unbounded distance, any type, no minimum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Maximum distance from `reference` in km. None = unbounded.
    /// Ignored while `reference` is None.
    pub max_distance_km: Option<f64>,

    /// Court-type selector.
    pub court_type: CourtTypeFilter,

    /// Minimum number of courts (0 = no minimum).
    pub min_courts: u32,

    /// Point distances are measured from. None = distance gate inactive.
    pub reference: Option<GeoPoint>,
}

/// Output of a filter pass: indices into the record slice, never copies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredResult {
    /// Matching records in dataset order (drives the map layer).
    pub matched: Vec<usize>,

    /// Matching records in display order: ascending distance when a
    /// reference location is set, otherwise dataset order (drives the list).
    pub ordered: Vec<usize>,

    /// Reference location the pass was computed against.
    pub reference: Option<GeoPoint>,
}

impl FilteredResult {
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// Matching records in dataset order.
    pub fn matched_records<'a>(&self, records: &'a [CourtRecord]) -> Vec<&'a CourtRecord> {
        self.matched.iter().filter_map(|&i| records.get(i)).collect()
    }

    /// Matching records in display order.
    pub fn ordered_records<'a>(&self, records: &'a [CourtRecord]) -> Vec<&'a CourtRecord> {
        self.ordered.iter().filter_map(|&i| records.get(i)).collect()
    }
}

/// Run every gate over `records` and return the matching indices.
///
/// Each record's `distance_km` is cleared and, when a reference location is
/// set and the record has a valid point, recomputed. Records failing the
/// validity gate keep an undefined distance, so a value from an earlier pass
/// against another reference is never observed.
pub fn apply_filters(records: &mut [CourtRecord], filter: &FilterState) -> FilteredResult {
    let mut matched = Vec::new();

    for (idx, record) in records.iter_mut().enumerate() {
        record.distance_km = None;
        if passes_distance(record, filter)
            && filter.court_type.accepts(record.court_type)
            && record.count >= filter.min_courts
        {
            matched.push(idx);
        }
    }

    let mut ordered = matched.clone();
    if filter.reference.is_some() {
        // sort_by is stable: equal distances keep dataset order.
        ordered.sort_by(|&a, &b| {
            let da = records[a].distance_km.unwrap_or(f64::INFINITY);
            let db = records[b].distance_km.unwrap_or(f64::INFINITY);
            da.total_cmp(&db)
        });
    }

    FilteredResult {
        matched,
        ordered,
        reference: filter.reference,
    }
}

/// Distance gate. Passes everything when no reference location is set.
/// Annotates the record with its distance as a side effect.
fn passes_distance(record: &mut CourtRecord, filter: &FilterState) -> bool {
    let Some(reference) = filter.reference else {
        return true;
    };
    let Some(position) = record.position() else {
        tracing::trace!(court = %record.name, "Excluded: no valid point geometry");
        return false;
    };

    let distance = distance_km(reference, position);
    record.distance_km = Some(distance);

    match filter.max_distance_km {
        Some(max) if distance > max => false,
        _ => true,
    }
}
