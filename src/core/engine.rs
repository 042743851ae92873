// CourtScout - core/engine.rs
//
// Filter engine: runs a filter pass and pushes the result to the map and
// list sinks, and routes court selection to the detail sink.
//
// Sinks are injected at construction. A sink that is not wanted is the
// no-op `NoopSink`; the engine always calls every sink and treats a sink
// error as a logged, non-fatal event that never blocks the other sinks.

use crate::core::detail::CourtDetail;
use crate::core::filter::{apply_filters, FilterState, FilteredResult};
use crate::core::model::{CourtRecord, GeoPoint};
use crate::util::error::SinkError;

/// Consumer of the map layer's feature set.
pub trait MapSink {
    /// Replace every displayed feature with `records` (dataset order).
    /// Called with an empty slice when nothing matches.
    fn replace_features(&mut self, records: &[&CourtRecord]) -> Result<(), SinkError>;
}

/// Consumer of the ordered court list.
pub trait ListSink {
    /// Show `records` in the given order. `reference` is the location
    /// distances were measured from; distances are shown only when it is
    /// present and the record's distance is defined. An empty slice means
    /// "no results".
    fn show_courts(
        &mut self,
        records: &[&CourtRecord],
        reference: Option<GeoPoint>,
    ) -> Result<(), SinkError>;
}

/// Consumer of court selection.
pub trait DetailSink {
    fn show_detail(&mut self, detail: &CourtDetail) -> Result<(), SinkError>;

    fn close_detail(&mut self) {}
}

/// Sink that accepts everything and does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl MapSink for NoopSink {
    fn replace_features(&mut self, records: &[&CourtRecord]) -> Result<(), SinkError> {
        tracing::trace!(features = records.len(), "No map sink attached");
        Ok(())
    }
}

impl ListSink for NoopSink {
    fn show_courts(
        &mut self,
        records: &[&CourtRecord],
        _reference: Option<GeoPoint>,
    ) -> Result<(), SinkError> {
        tracing::trace!(courts = records.len(), "No list sink attached");
        Ok(())
    }
}

impl DetailSink for NoopSink {
    fn show_detail(&mut self, detail: &CourtDetail) -> Result<(), SinkError> {
        tracing::trace!(court = %detail.name, "No detail sink attached");
        Ok(())
    }
}

/// The filter engine. Constructed once with its sinks; given the record set
/// and current filter state on every invocation.
#[derive(Debug)]
pub struct FilterEngine<M = NoopSink, L = NoopSink, D = NoopSink> {
    map: M,
    list: L,
    detail: D,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(NoopSink, NoopSink, NoopSink)
    }
}

impl<M: MapSink, L: ListSink, D: DetailSink> FilterEngine<M, L, D> {
    pub fn new(map: M, list: L, detail: D) -> Self {
        Self { map, list, detail }
    }

    /// Run one filter pass and emit the result to both sinks.
    ///
    /// The map sink gets the matches in dataset order; the list sink gets
    /// them in display order plus the reference location. Both sinks are
    /// called even when nothing matches. Never fails.
    pub fn refresh(&mut self, records: &mut [CourtRecord], filter: &FilterState) -> FilteredResult {
        let result = apply_filters(records, filter);

        let matched = result.matched_records(records);
        if let Err(e) = self.map.replace_features(&matched) {
            tracing::error!(error = %e, "Map sink rejected filtered courts");
        }

        let ordered = result.ordered_records(records);
        if let Err(e) = self.list.show_courts(&ordered, result.reference) {
            tracing::error!(error = %e, "List sink rejected filtered courts");
        }

        tracing::debug!(
            total = records.len(),
            matched = result.len(),
            located = result.reference.is_some(),
            max_distance_km = ?filter.max_distance_km,
            court_type = %filter.court_type,
            min_courts = filter.min_courts,
            "Filter pass complete"
        );

        result
    }

    /// Route a court selection to the detail sink.
    ///
    /// Returns the court's position so the caller can move the map there,
    /// or `None` (and shows nothing) when the record has no valid point.
    pub fn select(&mut self, record: &CourtRecord, reference: Option<GeoPoint>) -> Option<GeoPoint> {
        let Some(detail) = CourtDetail::from_record(record, reference) else {
            tracing::warn!(court = %record.name, "Selected court has no valid position");
            return None;
        };
        if let Err(e) = self.detail.show_detail(&detail) {
            tracing::error!(error = %e, court = %detail.name, "Detail sink rejected selection");
        }
        Some(detail.position)
    }

    /// Dismiss the detail view.
    pub fn close_detail(&mut self) {
        self.detail.close_detail();
    }

    pub fn map_sink(&self) -> &M {
        &self.map
    }

    pub fn list_sink(&self) -> &L {
        &self.list
    }

    pub fn detail_sink(&self) -> &D {
        &self.detail
    }
}
