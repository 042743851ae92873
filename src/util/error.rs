// CourtScout - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// The filter pass itself never fails: sink and location errors are logged
// and degraded by their callers rather than propagated to the user.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CourtScout operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CourtScoutError {
    /// Court dataset loading failed.
    Dataset(DatasetError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// A result sink rejected an update.
    Sink(SinkError),

    /// Reference location could not be determined.
    Location(LocationError),
}

impl fmt::Display for CourtScoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dataset(e) => write!(f, "Dataset error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Sink(e) => write!(f, "Sink error: {e}"),
            Self::Location(e) => write!(f, "Location error: {e}"),
        }
    }
}

impl std::error::Error for CourtScoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dataset(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Sink(e) => Some(e),
            Self::Location(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset errors
// ---------------------------------------------------------------------------

/// Errors related to loading the court dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// I/O error reading the dataset file.
    Io { path: PathBuf, source: io::Error },

    /// The dataset is not valid JSON, or does not match the GeoJSON shape.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The top-level object is not a `FeatureCollection`.
    NotFeatureCollection { path: PathBuf, found: String },

    /// Dataset file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Dataset holds more features than the configured maximum.
    TooManyFeatures { count: usize, max: usize },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Could not read '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "'{}' is not valid GeoJSON: {source}", path.display())
            }
            Self::NotFeatureCollection { path, found } => write!(
                f,
                "'{}' has type '{found}', expected 'FeatureCollection'",
                path.display()
            ),
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Dataset '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::TooManyFeatures { count, max } => {
                write!(f, "Dataset holds {count} features, maximum is {max}")
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DatasetError> for CourtScoutError {
    fn from(e: DatasetError) -> Self {
        Self::Dataset(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "GeoJSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for CourtScoutError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for CourtScoutError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Sink errors
// ---------------------------------------------------------------------------

/// Errors reported by map, list, or detail sinks.
#[derive(Debug)]
pub enum SinkError {
    /// The sink failed to write its output.
    Io { sink: &'static str, source: io::Error },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { sink, source } => write!(f, "{sink} sink write failed: {source}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<SinkError> for CourtScoutError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

// ---------------------------------------------------------------------------
// Location errors
// ---------------------------------------------------------------------------

/// Errors from a reference-location provider.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    /// No location source exists on this system/configuration.
    Unsupported,

    /// The provider exists but could not produce a position.
    Unavailable { reason: String },

    /// The provider returned coordinates outside the valid range.
    OutOfRange { latitude: f64, longitude: f64 },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "no location provider is available"),
            Self::Unavailable { reason } => write!(f, "location unavailable: {reason}"),
            Self::OutOfRange {
                latitude,
                longitude,
            } => write!(
                f,
                "location ({latitude}, {longitude}) is outside the valid coordinate range"
            ),
        }
    }
}

impl std::error::Error for LocationError {}

impl From<LocationError> for CourtScoutError {
    fn from(e: LocationError) -> Self {
        Self::Location(e)
    }
}

/// Convenience type alias for CourtScout results.
pub type Result<T> = std::result::Result<T, CourtScoutError>;
