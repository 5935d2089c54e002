//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.prismik/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PrismikConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Category to open on launch instead of the overview.
    pub start_category: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub animations: Option<bool>,
    pub frame_interval_ms: Option<u64>,
    pub mouse: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 80;
pub const MIN_FRAME_INTERVAL_MS: u64 = 16;
pub const DEFAULT_LOG_FILE: &str = "prismik.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_category: Option<String>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub animations: bool,
    pub frame_interval: Duration,
    pub mouse: bool,
    /// Log level value that failed to parse; `main` reports it once logging is up.
    pub rejected_log_level: Option<String>,
}

/// Values taken from command-line flags. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides<'a> {
    pub start_category: Option<&'a str>,
    pub no_animation: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.prismik/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".prismik").join("config.toml"))
}

/// Where the loaded config came from. Logged by `main` once the logger is up.
#[derive(Debug)]
pub enum ConfigSource {
    NoHomeDir,
    File(PathBuf),
    Generated(PathBuf),
    GenerateFailed(PathBuf, std::io::Error),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::NoHomeDir => {
                write!(f, "could not determine home directory, using default config")
            }
            ConfigSource::File(path) => write!(f, "loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                write!(f, "no config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed(path, e) => {
                write!(f, "failed to write default config to {}: {e}", path.display())
            }
        }
    }
}

/// Load config from `~/.prismik/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PrismikConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(PrismikConfig, ConfigSource), ConfigError> {
    let Some(path) = config_path() else {
        return Ok((PrismikConfig::default(), ConfigSource::NoHomeDir));
    };

    if !path.exists() {
        let source = match generate_default_config(&path) {
            Ok(()) => ConfigSource::Generated(path),
            Err(e) => ConfigSource::GenerateFailed(path, e),
        };
        return Ok((PrismikConfig::default(), source));
    }

    let config = load_config_from(&path)?;
    Ok((config, ConfigSource::File(path)))
}

pub fn load_config_from(path: &Path) -> Result<PrismikConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Prismik Visual Guide Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_category = "Distribution"   # Or set PRISMIK_START_CATEGORY
# log_level = "info"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "prismik.log"

# [display]
# animations = true                 # false freezes previews on their first frame
# frame_interval_ms = 80            # Redraw interval while animating
# mouse = true                      # Click tiles, hover highlight, wheel scroll
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PrismikConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Start category: CLI → env → config
    let start_category = cli
        .start_category
        .map(|s| s.to_string())
        .or_else(|| std::env::var("PRISMIK_START_CATEGORY").ok())
        .or_else(|| config.general.start_category.clone())
        .filter(|s| !s.trim().is_empty());

    // Log level: env → config → default. Unparseable values fall back.
    let requested_level = std::env::var("PRISMIK_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone());
    let (log_level, rejected_log_level) = match requested_level {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(level) => match LevelFilter::from_str(level.trim()) {
            Ok(filter) => (filter, None),
            Err(_) => (DEFAULT_LOG_LEVEL, Some(level)),
        },
    };

    let log_file = config
        .general
        .log_file
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let animations = !cli.no_animation && config.display.animations.unwrap_or(true);

    let frame_interval_ms = config
        .display
        .frame_interval_ms
        .unwrap_or(DEFAULT_FRAME_INTERVAL_MS)
        .max(MIN_FRAME_INTERVAL_MS);

    ResolvedConfig {
        start_category,
        log_level,
        log_file,
        animations,
        frame_interval: Duration::from_millis(frame_interval_ms),
        mouse: config.display.mouse.unwrap_or(true),
        rejected_log_level,
    }
}
