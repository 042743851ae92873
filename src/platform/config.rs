// CourtScout - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::filter::CourtTypeFilter;
use crate::core::model::GeoPoint;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for CourtScout configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/courtscout/ or %APPDATA%\CourtScout\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub filters: FiltersSection,
    pub location: LocationSection,
    pub map: MapSection,
    pub ui: UiSection,
    pub logging: LoggingSection,
}

/// `[filters]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct FiltersSection {
    /// Initial distance threshold in km.
    pub max_distance_km: Option<f64>,
    /// "any", "indoor", "outdoor" or "both".
    pub court_type: Option<String>,
    /// Minimum number of courts.
    pub min_courts: Option<u32>,
}

/// `[location]` config section: fixed reference position.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LocationSection {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// `[map]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct MapSection {
    pub center_latitude: Option<f64>,
    pub center_longitude: Option<f64>,
    pub zoom: Option<f64>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Filters --
    pub max_distance_km: f64,
    pub court_type: CourtTypeFilter,
    pub min_courts: u32,

    // -- Location --
    /// Fixed reference position used by "Find nearby".
    pub location: Option<GeoPoint>,

    // -- Map --
    pub map_center: GeoPoint,
    pub map_zoom: f64,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_distance_km: constants::DEFAULT_MAX_DISTANCE_KM,
            court_type: CourtTypeFilter::Any,
            min_courts: 0,
            location: None,
            map_center: GeoPoint::new(
                constants::DEFAULT_MAP_CENTER_LAT,
                constants::DEFAULT_MAP_CENTER_LNG,
            ),
            map_zoom: constants::DEFAULT_MAP_ZOOM,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn out_of_range(field: &str, value: impl ToString, expected: impl ToString) -> String {
    let err = ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    };
    format!("{err}. Using default.")
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw(config_path) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "{e}. Using defaults. See config.example.toml for the expected format."
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Validate each field against named constants, accumulating all warnings.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Filters: max_distance_km --
    if let Some(km) = raw.filters.max_distance_km {
        if (constants::MIN_DISTANCE_KM..=constants::MAX_DISTANCE_KM).contains(&km) {
            config.max_distance_km = km;
        } else {
            warnings.push(out_of_range(
                "filters.max_distance_km",
                km,
                format!(
                    "{}-{}",
                    constants::MIN_DISTANCE_KM,
                    constants::MAX_DISTANCE_KM
                ),
            ));
        }
    }

    // -- Filters: court_type --
    if let Some(ref court_type) = raw.filters.court_type {
        match court_type.parse::<CourtTypeFilter>() {
            Ok(t) => config.court_type = t,
            Err(e) => warnings.push(format!("[filters] {e}. Using default (any).")),
        }
    }

    // -- Filters: min_courts --
    if let Some(min) = raw.filters.min_courts {
        if min <= constants::MAX_MIN_COURTS {
            config.min_courts = min;
        } else {
            warnings.push(out_of_range(
                "filters.min_courts",
                min,
                format!("0-{}", constants::MAX_MIN_COURTS),
            ));
        }
    }

    // -- Location: latitude + longitude (both or neither) --
    match (raw.location.latitude, raw.location.longitude) {
        (Some(lat), Some(lng)) => {
            let point = GeoPoint::new(lat, lng);
            if point.in_range() {
                config.location = Some(point);
            } else {
                warnings.push(out_of_range(
                    "location",
                    point,
                    "latitude -90..90, longitude -180..180",
                ));
            }
        }
        (None, None) => {}
        _ => warnings.push(
            "[location] latitude and longitude must be set together. Ignoring location."
                .to_string(),
        ),
    }

    // -- Map: centre --
    match (raw.map.center_latitude, raw.map.center_longitude) {
        (Some(lat), Some(lng)) => {
            let point = GeoPoint::new(lat, lng);
            if point.in_range() {
                config.map_center = point;
            } else {
                warnings.push(out_of_range(
                    "map.center",
                    point,
                    "latitude -90..90, longitude -180..180",
                ));
            }
        }
        (None, None) => {}
        _ => warnings.push(
            "[map] center_latitude and center_longitude must be set together. Using default centre."
                .to_string(),
        ),
    }

    // -- Map: zoom --
    if let Some(zoom) = raw.map.zoom {
        if (constants::MIN_MAP_ZOOM..=constants::MAX_MAP_ZOOM).contains(&zoom) {
            config.map_zoom = zoom;
        } else {
            warnings.push(out_of_range(
                "map.zoom",
                zoom,
                format!("{}-{}", constants::MIN_MAP_ZOOM, constants::MAX_MAP_ZOOM),
            ));
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(out_of_range(
                "ui.font_size",
                size,
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    config
}
