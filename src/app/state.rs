// CourtScout - app/state.rs
//
// Application state management. Holds the loaded courts, filter state,
// the filter engine with its display sinks, the map camera, and selection.
// Owned by the eframe::App implementation.

use crate::app::location::LocationProvider;
use crate::app::sinks::{CourtList, DetailPanel, MapLayer};
use crate::app::viewport::MapViewport;
use crate::core::dataset;
use crate::core::engine::FilterEngine;
use crate::core::filter::{CourtTypeFilter, FilterState, FilteredResult};
use crate::core::model::CourtRecord;
use crate::util::constants;
use crate::util::error::{DatasetError, LocationError};
use std::path::{Path, PathBuf};

/// Engine wired to the GUI sinks.
pub type GuiEngine = FilterEngine<MapLayer, CourtList, DetailPanel>;

/// Top-level application state.
pub struct AppState {
    /// Path of the loaded dataset (None until one is opened).
    pub dataset_path: Option<PathBuf>,

    /// All courts from the loaded dataset, in dataset order.
    pub courts: Vec<CourtRecord>,

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Distance slider position. Committed to `filter_state` on release.
    pub distance_input_km: f64,

    /// Filter engine and the sinks the panels render from.
    pub engine: GuiEngine,

    /// Result of the most recent filter pass.
    pub last_result: FilteredResult,

    /// Map camera.
    pub viewport: MapViewport,

    /// Id of the court shown in the detail panel.
    pub selected: Option<usize>,

    /// Status message for the status bar.
    pub status_message: String,

    /// User-facing notice (e.g. location failure). Cleared on next success.
    pub notice: Option<String>,

    /// Startup warnings from config.toml. Kept across dataset loads.
    pub config_warnings: Vec<String>,

    /// Config warnings followed by warnings from the last dataset load.
    pub warnings: Vec<String>,

    /// Whether to show the about dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    location: Box<dyn LocationProvider>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("dataset_path", &self.dataset_path)
            .field("courts", &self.courts.len())
            .field("filter_state", &self.filter_state)
            .field("matched", &self.last_result.len())
            .field("viewport", &self.viewport)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create initial state with no dataset loaded.
    pub fn new(
        filter_state: FilterState,
        viewport: MapViewport,
        location: Box<dyn LocationProvider>,
        debug_mode: bool,
    ) -> Self {
        Self {
            dataset_path: None,
            courts: Vec::new(),
            distance_input_km: filter_state
                .max_distance_km
                .unwrap_or(constants::DEFAULT_MAX_DISTANCE_KM),
            filter_state,
            engine: FilterEngine::new(
                MapLayer::default(),
                CourtList::default(),
                DetailPanel::default(),
            ),
            last_result: FilteredResult::default(),
            viewport,
            selected: None,
            status_message: "Ready. Open a court dataset to begin.".to_string(),
            notice: None,
            config_warnings: Vec::new(),
            warnings: Vec::new(),
            show_about: false,
            debug_mode,
            location,
        }
    }

    /// Run a filter pass over the loaded courts and update both sinks.
    pub fn refresh(&mut self) {
        self.last_result = self.engine.refresh(&mut self.courts, &self.filter_state);
        self.status_message = if self.courts.is_empty() {
            "No dataset loaded.".to_string()
        } else {
            format!(
                "Showing {} of {} courts",
                self.last_result.len(),
                self.courts.len()
            )
        };
    }

    /// Replace the loaded courts and refresh.
    pub fn set_courts(&mut self, courts: Vec<CourtRecord>, path: Option<PathBuf>) {
        self.warnings = self.config_warnings.clone();
        self.warnings.extend(
            courts
                .iter()
                .filter(|c| c.position().is_none())
                .map(|c| format!("'{}' has no valid position", c.name)),
        );
        self.courts = courts;
        self.dataset_path = path;
        self.close_detail();
        self.refresh();
    }

    /// Load a dataset file, replacing the current courts on success.
    /// On failure the current courts are kept.
    pub fn load_dataset(&mut self, path: &Path) -> Result<(), DatasetError> {
        let courts = dataset::load_file(path)?;
        self.set_courts(courts, Some(path.to_path_buf()));
        Ok(())
    }

    /// Ask the location provider for the user's position and re-filter.
    ///
    /// On success the reference is set and the map flies there. On failure
    /// the reference is cleared, a notice is shown, and the list is still
    /// refreshed so it falls back to dataset order without distances.
    pub fn locate(&mut self) {
        match self.location.current_location() {
            Ok(position) => {
                tracing::info!("Reference location acquired");
                tracing::debug!(%position, "Reference location");
                self.filter_state.reference = Some(position);
                self.viewport.fly_to(position, constants::LOCATE_MIN_ZOOM);
                self.notice = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not determine location");
                self.filter_state.reference = None;
                self.notice = Some(match e {
                    LocationError::Unsupported => constants::LOCATION_UNSUPPORTED_NOTICE,
                    _ => constants::LOCATION_FAILED_NOTICE,
                }
                .to_string());
            }
        }
        self.refresh();
    }

    pub fn set_court_type(&mut self, court_type: CourtTypeFilter) {
        if self.filter_state.court_type != court_type {
            self.filter_state.court_type = court_type;
            self.refresh();
        }
    }

    pub fn set_min_courts(&mut self, min_courts: u32) {
        if self.filter_state.min_courts != min_courts {
            self.filter_state.min_courts = min_courts;
            self.refresh();
        }
    }

    pub fn set_max_distance(&mut self, max_distance_km: Option<f64>) {
        if self.filter_state.max_distance_km != max_distance_km {
            self.filter_state.max_distance_km = max_distance_km;
            self.refresh();
        }
    }

    /// Show the detail for court `id` and move the map to it.
    pub fn select(&mut self, id: usize) {
        let Some(record) = self.courts.get(id) else {
            return;
        };
        if let Some(position) = self.engine.select(record, self.filter_state.reference) {
            self.selected = Some(id);
            self.viewport.fly_to(position, constants::SELECTION_MIN_ZOOM);
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
        self.engine.close_detail();
    }

    /// Courts from the last pass, in list order.
    pub fn filtered_courts(&self) -> Vec<&CourtRecord> {
        self.last_result.ordered_records(&self.courts)
    }
}
