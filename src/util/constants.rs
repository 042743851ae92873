// CourtScout - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CourtScout";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CourtScout";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Geography
// =============================================================================

/// Mean Earth radius used by the haversine distance (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Valid latitude range in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Valid longitude range in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

// =============================================================================
// Dataset limits
// =============================================================================

/// Property key holding the free-text court description in the dataset.
pub const COURTS_PROPERTY: &str = "number of courts";

/// Maximum size of a dataset file in bytes. Court datasets are small; a file
/// beyond this is almost certainly the wrong file.
pub const MAX_DATASET_FILE_SIZE: u64 = 32 * 1024 * 1024; // 32 MB

/// Maximum number of features accepted from a single dataset.
pub const MAX_FEATURES: usize = 100_000;

// =============================================================================
// Filter defaults
// =============================================================================

/// Default distance slider position (km) once a reference location is known.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 10.0;

/// Smallest distance the slider allows (km).
pub const MIN_DISTANCE_KM: f64 = 1.0;

/// Largest distance the slider allows (km).
pub const MAX_DISTANCE_KM: f64 = 100.0;

/// Minimum-court options offered by the filter panel.
pub const MIN_COURT_OPTIONS: &[u32] = &[0, 1, 2, 3, 4, 5];

/// Upper bound accepted for a configured minimum court count.
pub const MAX_MIN_COURTS: u32 = 100;

// =============================================================================
// Map view
// =============================================================================

/// Initial map centre: Portland, OR (longitude, latitude).
pub const DEFAULT_MAP_CENTER_LNG: f64 = -122.6784;
pub const DEFAULT_MAP_CENTER_LAT: f64 = 45.5152;

/// Initial map zoom level.
pub const DEFAULT_MAP_ZOOM: f64 = 9.0;

/// Zoom bounds for the map view.
pub const MIN_MAP_ZOOM: f64 = 1.0;
pub const MAX_MAP_ZOOM: f64 = 19.0;

/// Zoom the map flies to (at least) when a court is selected.
pub const SELECTION_MIN_ZOOM: f64 = 14.0;

/// Zoom the map flies to (at least) when the user's location is found.
pub const LOCATE_MIN_ZOOM: f64 = 11.0;

/// Web-Mercator tile size in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Zoom change per scroll notch.
pub const SCROLL_ZOOM_STEP: f64 = 0.5;

/// Pixel radius around a click within which a marker counts as hit.
pub const MARKER_HIT_RADIUS: f32 = 12.0;

// =============================================================================
// Directions
// =============================================================================

/// Map search URL used when no reference location is known.
pub const DIRECTIONS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1";

/// Route URL used when a reference location is known.
pub const DIRECTIONS_ROUTE_URL: &str = "https://www.google.com/maps/dir/?api=1";

// =============================================================================
// User-visible notices
// =============================================================================

/// Shown when the location provider fails.
pub const LOCATION_FAILED_NOTICE: &str =
    "Could not get your location. Please ensure location services are enabled.";

/// Shown when no location provider is configured.
pub const LOCATION_UNSUPPORTED_NOTICE: &str = "Geolocation is not supported on this system.";

/// Shown by the list when the filtered set is empty.
pub const NO_RESULTS_MESSAGE: &str = "No courts found matching your criteria.";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
