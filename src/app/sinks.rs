// CourtScout - app/sinks.rs
//
// Concrete sinks for the filter engine. The GUI sinks hold the display
// models the panels render each frame; `TextListSink` writes the list to any
// writer for headless use.

use crate::core::detail::CourtDetail;
use crate::core::engine::{DetailSink, ListSink, MapSink};
use crate::core::model::{CourtRecord, CourtType, GeoPoint};
use crate::util::constants;
use crate::util::error::SinkError;
use std::io::Write;

// =============================================================================
// Map layer
// =============================================================================

/// One court marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: usize,
    pub position: GeoPoint,
    pub count: u32,
    pub court_type: CourtType,
}

/// The court marker layer. Replaced wholesale on every filter pass.
#[derive(Debug, Default)]
pub struct MapLayer {
    pub markers: Vec<Marker>,
}

impl MapSink for MapLayer {
    fn replace_features(&mut self, records: &[&CourtRecord]) -> Result<(), SinkError> {
        self.markers = records
            .iter()
            .filter_map(|r| {
                r.position().map(|position| Marker {
                    id: r.id,
                    position,
                    count: r.count,
                    court_type: r.court_type,
                })
            })
            .collect();
        Ok(())
    }
}

// =============================================================================
// Court list
// =============================================================================

/// One row of the court list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: usize,
    pub name: String,
    pub location: Option<String>,
    /// Formatted distance; present only when a reference location is set.
    pub distance: Option<String>,
}

impl ListRow {
    fn from_record(record: &CourtRecord, located: bool) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            location: record.location.clone(),
            distance: if located {
                record.distance_label()
            } else {
                None
            },
        }
    }
}

/// The sidebar court list, in display order.
#[derive(Debug, Default)]
pub struct CourtList {
    pub rows: Vec<ListRow>,
    pub located: bool,
}

impl ListSink for CourtList {
    fn show_courts(
        &mut self,
        records: &[&CourtRecord],
        reference: Option<GeoPoint>,
    ) -> Result<(), SinkError> {
        self.located = reference.is_some();
        self.rows = records
            .iter()
            .map(|r| ListRow::from_record(r, self.located))
            .collect();
        Ok(())
    }
}

// =============================================================================
// Detail panel
// =============================================================================

/// The court detail panel. `None` when closed.
#[derive(Debug, Default)]
pub struct DetailPanel {
    pub current: Option<CourtDetail>,
}

impl DetailSink for DetailPanel {
    fn show_detail(&mut self, detail: &CourtDetail) -> Result<(), SinkError> {
        self.current = Some(detail.clone());
        Ok(())
    }

    fn close_detail(&mut self) {
        self.current = None;
    }
}

// =============================================================================
// Text list
// =============================================================================

/// List sink writing one line per court, for `--list` output.
#[derive(Debug)]
pub struct TextListSink<W: Write> {
    writer: W,
}

impl<W: Write> TextListSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ListSink for TextListSink<W> {
    fn show_courts(
        &mut self,
        records: &[&CourtRecord],
        reference: Option<GeoPoint>,
    ) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io {
            sink: "list",
            source,
        };

        if records.is_empty() {
            writeln!(self.writer, "{}", constants::NO_RESULTS_MESSAGE).map_err(io_err)?;
            return self.writer.flush().map_err(io_err);
        }

        for record in records {
            let row = ListRow::from_record(record, reference.is_some());
            let mut line = row.name;
            if let Some(location) = row.location {
                line.push_str(" - ");
                line.push_str(&location);
            }
            if let Some(distance) = row.distance {
                line.push_str(&format!(" ({distance})"));
            }
            writeln!(self.writer, "{line}").map_err(io_err)?;
        }
        self.writer.flush().map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::FilterEngine;
    use crate::core::filter::FilterState;
    use crate::core::test_support::{sample_records, sample_reference};

    #[test]
    fn test_map_layer_skips_invalid_positions() {
        let mut records = sample_records();
        let mut engine = FilterEngine::new(MapLayer::default(), CourtList::default(), DetailPanel::default());
        engine.refresh(&mut records, &FilterState::default());

        let ids: Vec<usize> = engine.map_sink().markers.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(engine.list_sink().rows.len(), 5);
    }

    #[test]
    fn test_list_shows_distance_only_when_located() {
        let mut records = sample_records();
        let mut engine = FilterEngine::new(MapLayer::default(), CourtList::default(), DetailPanel::default());

        engine.refresh(&mut records, &FilterState::default());
        assert!(!engine.list_sink().located);
        assert!(engine.list_sink().rows.iter().all(|r| r.distance.is_none()));

        let filter = FilterState {
            reference: Some(sample_reference()),
            ..Default::default()
        };
        engine.refresh(&mut records, &filter);
        let rows = &engine.list_sink().rows;
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[0].distance.as_deref(), Some("0.00 km"));
        // E has no position and drops out once distances are measured.
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.distance.is_some()));
    }

    #[test]
    fn test_detail_panel_open_and_close() {
        let records = sample_records();
        let mut engine = FilterEngine::new(MapLayer::default(), CourtList::default(), DetailPanel::default());
        engine.select(&records[0], None);
        assert_eq!(
            engine.detail_sink().current.as_ref().map(|d| d.name.as_str()),
            Some("A")
        );
        engine.close_detail();
        assert!(engine.detail_sink().current.is_none());
    }

    #[test]
    fn test_text_sink_no_results() {
        let mut sink = TextListSink::new(Vec::new());
        sink.show_courts(&[], None).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "No courts found matching your criteria.\n");
    }

    #[test]
    fn test_text_sink_lines() {
        let mut records = sample_records();
        records[0].location = Some("Laurelhurst Park".to_string());
        records[0].distance_km = Some(0.0);
        let courts = vec![&records[0], &records[1]];

        let mut sink = TextListSink::new(Vec::new());
        sink.show_courts(&courts, Some(sample_reference())).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "A - Laurelhurst Park (0.00 km)\nB\n");
    }

    #[test]
    fn test_text_sink_write_failure() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = TextListSink::new(Broken);
        let err = sink.show_courts(&[], None).unwrap_err();
        assert!(err.to_string().starts_with("list sink write failed"));
    }
}
