//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//! Every setting has a built-in default, so all sources are optional.
//!
//! ## Loading Strategy
//! 1. If any `SICMATCH_*` variable is set, the environment is the sole
//!    source, applied on top of the built-in defaults
//! 2. Otherwise, probes standard paths for a config file
//! 3. Falls back to the built-in defaults when neither source exists
//!
//! ## Environment Variables
//! - `SICMATCH_CATALOG_PATH`: CSV catalog file path (embedded catalog
//!   when unset)
//! - `SICMATCH_MATCH_LIMIT`: Default number of matches per prediction
//! - `SICMATCH_INDUSTRY_BOOST`: Score boost for industry-term overlap
//! - `SICMATCH_CURRENT_CODE_THRESHOLD`: Accuracy threshold for a
//!   company's registered code
//! - `SICMATCH_PREDICTION_THRESHOLD`: Accuracy threshold for predictions
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./sicmatch.toml` or `./sicmatch.json` (current working directory)
//! 2. Relative to the executable location

use std::path::{Path, PathBuf};

use sicmatch_domain::{Config, Result, SicMatchError};

/// Environment variables recognized by [`load_from_env`]
const ENV_VARS: &[&str] = &[
    "SICMATCH_CATALOG_PATH",
    "SICMATCH_MATCH_LIMIT",
    "SICMATCH_INDUSTRY_BOOST",
    "SICMATCH_CURRENT_CODE_THRESHOLD",
    "SICMATCH_PREDICTION_THRESHOLD",
];

/// Load configuration with automatic fallback strategy
///
/// Environment variables win when any are set; otherwise the standard
/// config file locations are probed, and the built-in defaults apply
/// when no file exists either.
///
/// # Errors
/// Returns `SicMatchError::Config` if:
/// - An environment variable holds an unparsable value
/// - A discovered config file cannot be read or parsed
pub fn load() -> Result<Config> {
    if env_overrides_present() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found; using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Unset variables keep their default values; set variables must parse.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `SicMatchError::Config` if a set variable has an invalid
/// value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    if let Ok(path) = std::env::var("SICMATCH_CATALOG_PATH") {
        config.catalog.csv_path = Some(path);
    }
    if let Some(limit) = env_parse::<usize>("SICMATCH_MATCH_LIMIT", "match limit")? {
        config.matcher.default_limit = limit;
    }
    if let Some(boost) = env_parse::<f64>("SICMATCH_INDUSTRY_BOOST", "industry boost")? {
        config.matcher.industry_boost = boost;
    }
    if let Some(threshold) =
        env_parse::<f64>("SICMATCH_CURRENT_CODE_THRESHOLD", "current code threshold")?
    {
        config.matcher.current_code_threshold = threshold;
    }
    if let Some(threshold) =
        env_parse::<f64>("SICMATCH_PREDICTION_THRESHOLD", "prediction threshold")?
    {
        config.matcher.prediction_threshold = threshold;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports both
/// JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `SicMatchError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SicMatchError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SicMatchError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SicMatchError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `SicMatchError::Config` if format is invalid or parsing
/// fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SicMatchError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SicMatchError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SicMatchError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard paths for configuration files
///
/// Searches the current working directory and the executable's
/// directory for `sicmatch.toml` / `sicmatch.json`.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("sicmatch.toml"));
        candidates.push(cwd.join("sicmatch.json"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("sicmatch.toml"));
            candidates.push(exe_dir.join("sicmatch.json"));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn env_overrides_present() -> bool {
    ENV_VARS.iter().any(|key| std::env::var_os(key).is_some())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `SicMatchError::Config` if the variable is set but does not
/// parse as `T`.
fn env_parse<T: std::str::FromStr>(key: &str, label: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| SicMatchError::Config(format!("Invalid {}: {}", label, e))),
        Err(_) => Ok(None),
    }
}
