// CourtScout - tests/e2e_courts.rs
//
// End-to-end tests for the load -> filter -> sink pipeline.
//
// These tests read the real GeoJSON fixture from disk, run the real filter
// engine, and check what the map and list sinks receive. The five fixture
// courts sit around Portland, OR: A on the reference point, B and D about
// 13.6 km away, C about 27 km away, and E with null coordinates.

use courtscout::app::location::ConfiguredLocation;
use courtscout::app::sinks::{CourtList, DetailPanel, MapLayer, TextListSink};
use courtscout::app::state::AppState;
use courtscout::app::viewport::MapViewport;
use courtscout::core::dataset;
use courtscout::core::engine::{FilterEngine, NoopSink};
use courtscout::core::export;
use courtscout::core::filter::{CourtTypeFilter, FilterState};
use courtscout::core::model::{CourtRecord, CourtType, GeoPoint};
use courtscout::util::error::DatasetError;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_sample() -> Vec<CourtRecord> {
    dataset::load_file(&fixture("sample_courts.geojson")).expect("fixture loads")
}

fn reference() -> GeoPoint {
    GeoPoint::new(45.5, -122.7)
}

type GuiEngine = FilterEngine<MapLayer, CourtList, DetailPanel>;

fn gui_engine() -> GuiEngine {
    FilterEngine::new(MapLayer::default(), CourtList::default(), DetailPanel::default())
}

fn list_names(engine: &GuiEngine) -> Vec<String> {
    engine.list_sink().rows.iter().map(|r| r.name.clone()).collect()
}

fn marker_ids(engine: &GuiEngine) -> Vec<usize> {
    engine.map_sink().markers.iter().map(|m| m.id).collect()
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn e2e_fixture_loads_with_derived_fields() {
    let courts = load_sample();
    assert_eq!(courts.len(), 5);

    let derived: Vec<(u32, CourtType)> = courts.iter().map(|c| (c.count, c.court_type)).collect();
    assert_eq!(
        derived,
        vec![
            (3, CourtType::Indoor),
            (2, CourtType::Outdoor),
            (4, CourtType::Both),
            (1, CourtType::Outdoor),
            (1, CourtType::Outdoor),
        ]
    );
    assert_eq!(courts[0].location.as_deref(), Some("Laurelhurst Park"));
    assert_eq!(courts[2].location, None);
    assert_eq!(courts[4].position(), None);
}

#[test]
fn e2e_missing_dataset_is_io_error() {
    let result = dataset::load_file(&fixture("does_not_exist.geojson"));
    assert!(
        matches!(result, Err(DatasetError::Io { .. })),
        "expected Io error, got {result:?}"
    );
}

#[test]
fn e2e_non_collection_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("point.geojson");
    std::fs::write(&path, r#"{"type":"Point","coordinates":[0,0]}"#).unwrap();
    let result = dataset::load_file(&path);
    assert!(
        matches!(result, Err(DatasetError::NotFeatureCollection { .. })),
        "expected NotFeatureCollection, got {result:?}"
    );
}

// =============================================================================
// Filter scenarios
// =============================================================================

#[test]
fn e2e_within_15km_of_a() {
    let mut courts = load_sample();
    let mut engine = gui_engine();
    let filter = FilterState {
        reference: Some(reference()),
        max_distance_km: Some(15.0),
        ..Default::default()
    };
    engine.refresh(&mut courts, &filter);

    assert_eq!(marker_ids(&engine), vec![0, 1, 3]);
    assert_eq!(list_names(&engine), vec!["A", "B", "D"]);
    assert!(engine.list_sink().located);
    assert_eq!(
        engine.list_sink().rows[0].distance.as_deref(),
        Some("0.00 km")
    );
}

#[test]
fn e2e_indoor_without_location() {
    let mut courts = load_sample();
    let mut engine = gui_engine();
    let filter = FilterState {
        court_type: CourtTypeFilter::Indoor,
        ..Default::default()
    };
    engine.refresh(&mut courts, &filter);

    assert_eq!(marker_ids(&engine), vec![0, 2]);
    assert_eq!(list_names(&engine), vec!["A", "C"]);
    assert!(engine.list_sink().rows.iter().all(|r| r.distance.is_none()));
}

#[test]
fn e2e_min_three_courts() {
    let mut courts = load_sample();
    let mut engine = gui_engine();
    let filter = FilterState {
        min_courts: 3,
        ..Default::default()
    };
    engine.refresh(&mut courts, &filter);
    assert_eq!(list_names(&engine), vec!["A", "C"]);
}

#[test]
fn e2e_combined_filters_sorted_by_distance() {
    let mut courts = load_sample();
    let mut engine = gui_engine();
    let filter = FilterState {
        reference: Some(reference()),
        max_distance_km: Some(30.0),
        court_type: CourtTypeFilter::Outdoor,
        min_courts: 2,
    };
    engine.refresh(&mut courts, &filter);

    // B (2 outdoor) and C (4 indoor/outdoor) qualify; B is nearer.
    assert_eq!(list_names(&engine), vec!["B", "C"]);
    assert_eq!(marker_ids(&engine), vec![1, 2]);
}

#[test]
fn e2e_no_results_reaches_both_sinks() {
    let mut courts = load_sample();
    let filter = FilterState {
        min_courts: 10,
        ..Default::default()
    };

    let mut engine = gui_engine();
    let result = engine.refresh(&mut courts, &filter);
    assert!(result.is_empty());
    assert!(engine.map_sink().markers.is_empty());
    assert!(engine.list_sink().rows.is_empty());
}

#[test]
fn e2e_text_list_output() {
    let mut courts = load_sample();
    let filter = FilterState {
        reference: Some(reference()),
        max_distance_km: Some(15.0),
        ..Default::default()
    };

    let mut buf = Vec::new();
    {
        let mut engine = FilterEngine::new(NoopSink, TextListSink::new(&mut buf), NoopSink);
        engine.refresh(&mut courts, &filter);
    }
    let output = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "A - Laurelhurst Park (0.00 km)");
    assert!(lines[1].starts_with("B - Pier Park (13.5"));
    assert!(lines[2].starts_with("D (13.5"));
}

#[test]
fn e2e_text_list_no_results() {
    let mut courts = load_sample();
    let filter = FilterState {
        min_courts: 10,
        ..Default::default()
    };

    let mut buf = Vec::new();
    {
        let mut engine = FilterEngine::new(NoopSink, TextListSink::new(&mut buf), NoopSink);
        engine.refresh(&mut courts, &filter);
    }
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "No courts found matching your criteria.\n"
    );
}

// =============================================================================
// App state
// =============================================================================

#[test]
fn e2e_app_state_locate_select_and_export() {
    let mut state = AppState::new(
        FilterState {
            max_distance_km: Some(15.0),
            ..Default::default()
        },
        MapViewport::default(),
        Box::new(ConfiguredLocation::new(Some(reference()))),
        false,
    );
    state
        .load_dataset(&fixture("sample_courts.geojson"))
        .expect("fixture loads");
    assert_eq!(state.last_result.len(), 5);

    state.locate();
    let names: Vec<&str> = state.filtered_courts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "D"]);

    state.select(1);
    let detail = state.engine.detail_sink().current.clone().expect("detail shown");
    assert_eq!(detail.location, "Pier Park");
    assert!(detail
        .directions_url
        .starts_with("https://www.google.com/maps/dir/?api=1&origin=45.5,-122.7"));
    assert_eq!(state.viewport.center, GeoPoint::new(45.6, -122.8));

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("courts.csv");
    let file = std::fs::File::create(&dest).unwrap();
    let written = export::export_csv(&state.filtered_courts(), file, &dest).unwrap();
    assert_eq!(written, 3);
    let csv = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.lines().nth(1).unwrap().starts_with("A,Laurelhurst Park,3 Indoor courts,3,indoor"));
}
