// CourtScout - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr. Never logs user locations above debug level.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive from the available sources.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
/// Returns `None` when RUST_LOG should be used as-is.
fn select_level(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> Option<String> {
    if env_set {
        None
    } else if debug_flag {
        Some("debug".to_string())
    } else {
        Some(
            config_level
                .unwrap_or(super::constants::DEFAULT_LOG_LEVEL)
                .to_string(),
        )
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
///
/// Safe to call more than once; later calls are ignored.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let env_set = std::env::var("RUST_LOG").is_ok();
    let filter = match select_level(env_set, debug_flag, config_level) {
        None => EnvFilter::from_default_env(),
        Some(level) => EnvFilter::new(level),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Logging initialised"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_wins() {
        assert_eq!(select_level(true, true, Some("trace")), None);
    }

    #[test]
    fn test_debug_flag_beats_config() {
        assert_eq!(
            select_level(false, true, Some("warn")).as_deref(),
            Some("debug")
        );
    }

    #[test]
    fn test_default_level() {
        assert_eq!(select_level(false, false, None).as_deref(), Some("info"));
        assert_eq!(
            select_level(false, false, Some("warn")).as_deref(),
            Some("warn")
        );
    }
}
