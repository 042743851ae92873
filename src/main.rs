// CourtScout - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Dataset loading
// 4. Headless list output (--list) or eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use courtscout::app;
pub use courtscout::core;
pub use courtscout::platform;
pub use courtscout::ui;
pub use courtscout::util;

use app::location::{ConfiguredLocation, LocationProvider};
use app::sinks::TextListSink;
use app::state::AppState;
use app::viewport::MapViewport;
use clap::Parser;
use crate::core::engine::{FilterEngine, NoopSink};
use crate::core::filter::{CourtTypeFilter, FilterState};
use crate::core::model::GeoPoint;
use platform::config::AppConfig;
use std::path::{Path, PathBuf};

/// CourtScout - find pickleball courts near you.
///
/// Loads a GeoJSON court dataset and shows it on a map with distance,
/// court-type, and court-count filters.
#[derive(Parser, Debug)]
#[command(name = "CourtScout", version, about)]
struct Cli {
    /// GeoJSON court dataset (opens file dialog if omitted).
    path: Option<PathBuf>,

    /// Latitude of your location, used by "Find nearby".
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    lat: Option<f64>,

    /// Longitude of your location, used by "Find nearby".
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lng: Option<f64>,

    /// Maximum distance in km.
    #[arg(short = 'm', long = "max-distance", value_parser = parse_distance)]
    max_distance: Option<f64>,

    /// Court type: any, indoor, outdoor or both.
    #[arg(short = 't', long = "court-type")]
    court_type: Option<CourtTypeFilter>,

    /// Minimum number of courts.
    #[arg(short = 'n', long = "min-courts")]
    min_courts: Option<u32>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the filtered court list to stdout instead of opening the GUI.
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn parse_distance(s: &str) -> Result<f64, String> {
    let km: f64 = s.parse().map_err(|e| format!("{e}"))?;
    let range = util::constants::MIN_DISTANCE_KM..=util::constants::MAX_DISTANCE_KM;
    if range.contains(&km) {
        Ok(km)
    } else {
        Err(format!(
            "{km} is out of range ({}-{} km)",
            range.start(),
            range.end()
        ))
    }
}

/// Initial filter state: CLI flags override config.toml.
fn initial_filter(cli: &Cli, config: &AppConfig) -> FilterState {
    FilterState {
        max_distance_km: Some(cli.max_distance.unwrap_or(config.max_distance_km)),
        court_type: cli.court_type.unwrap_or(config.court_type),
        min_courts: cli.min_courts.unwrap_or(config.min_courts),
        reference: None,
    }
}

/// Apply theme and font size from config.
fn configure_style(ctx: &egui::Context, config: &AppConfig) {
    ctx.set_visuals(if config.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    let size = config.font_size;
    ctx.style_mut(|style| {
        if let Some(font) = style.text_styles.get_mut(&egui::TextStyle::Body) {
            font.size = size;
        }
        if let Some(font) = style.text_styles.get_mut(&egui::TextStyle::Button) {
            font.size = size;
        }
    });
}

/// Headless mode: one filter pass, list printed to stdout.
fn run_list(
    path: &Path,
    mut filter: FilterState,
    mut location: ConfiguredLocation,
) -> util::error::Result<usize> {
    let mut courts = crate::core::dataset::load_file(path)?;

    match location.current_location() {
        Ok(position) => filter.reference = Some(position),
        Err(e) => {
            tracing::debug!(error = %e, "Listing without a reference location");
        }
    }

    let stdout = std::io::stdout();
    let mut engine = FilterEngine::new(NoopSink, TextListSink::new(stdout.lock()), NoopSink);
    let result = engine.refresh(&mut courts, &filter);
    Ok(result.len())
}

fn main() {
    let cli = Cli::parse();

    // Config first so its log level can seed the subscriber.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform_paths.config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "CourtScout starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    let filter = initial_filter(&cli, &config);
    let position = match (cli.lat, cli.lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
        _ => config.location,
    };
    let location = ConfiguredLocation::new(position);

    if cli.list {
        let Some(path) = cli.path else {
            eprintln!("Error: --list requires a dataset path.");
            std::process::exit(2);
        };
        match run_list(&path, filter, location) {
            Ok(n) => tracing::debug!(courts = n, "List written"),
            Err(e) => {
                tracing::error!(error = %e, "List failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // Create application state
    let mut state = AppState::new(
        filter,
        MapViewport::new(config.map_center, config.map_zoom),
        Box::new(location),
        cli.debug,
    );
    state.config_warnings = config_warnings;
    state.warnings = state.config_warnings.clone();
    let dataset = cli.path.or_else(|| {
        rfd::FileDialog::new()
            .set_title("Open court dataset")
            .add_filter("GeoJSON", &["geojson", "json"])
            .pick_file()
    });
    if let Some(ref path) = dataset {
        if let Err(e) = state.load_dataset(path) {
            tracing::error!(error = %e, "Failed to load dataset");
            state.status_message = format!("Could not load dataset: {e}");
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_style(&cc.egui_ctx, &config);
            Ok(Box::new(gui::CourtScoutApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch CourtScout GUI: {e}");
        std::process::exit(1);
    }
}
