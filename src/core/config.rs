//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.eurocountries/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::CatalogSource;
use crate::core::screen::ScreenMetrics;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EuroConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Country data file. Relative paths are resolved against `~/.eurocountries/`.
    pub data_file: Option<String>,
    pub show_disclaimer: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// 0 or unset = terminal width.
    pub width: Option<u16>,
    /// 0 or unset = terminal height.
    pub height: Option<u16>,
}

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub no_disclaimer: bool,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SHOW_DISCLAIMER: bool = true;
pub const CONFIG_DIR_NAME: &str = ".eurocountries";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub catalog_source: CatalogSource,
    pub show_disclaimer: bool,
    pub metrics: ScreenMetrics,
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

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.eurocountries/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME))
}

/// Returns the path to `~/.eurocountries/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.eurocountries/config.toml`.
pub fn load_config() -> Result<EuroConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(EuroConfig::default())
        }
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EuroConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<EuroConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(EuroConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: EuroConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# European Countries Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "countries.json"       # Path relative to ~/.eurocountries/, or absolute.
#                                    # Or set EUROCOUNTRIES_DATA_FILE. Unset = bundled data.
# show_disclaimer = true             # Or set EUROCOUNTRIES_DISCLAIMER=false

# [display]
# width = 0                          # Columns; 0 = terminal width
# height = 0                         # Rows; 0 = terminal height
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &EuroConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Data file: CLI → env → config → bundled
    let catalog_source = cli
        .data_file
        .clone()
        .or_else(|| std::env::var("EUROCOUNTRIES_DATA_FILE").ok().map(PathBuf::from))
        .or_else(|| config.general.data_file.as_deref().map(config_relative))
        .map(CatalogSource::File)
        .unwrap_or_default();

    // Disclaimer: CLI → env → config → default
    let show_disclaimer = if cli.no_disclaimer {
        false
    } else {
        std::env::var("EUROCOUNTRIES_DISCLAIMER")
            .ok()
            .and_then(|v| parse_flag(&v))
            .or(config.general.show_disclaimer)
            .unwrap_or(DEFAULT_SHOW_DISCLAIMER)
    };

    let metrics = ScreenMetrics::new(
        cli.width.or(config.display.width).unwrap_or(0),
        cli.height.or(config.display.height).unwrap_or(0),
    );

    ResolvedConfig {
        catalog_source,
        show_disclaimer,
        metrics,
    }
}

/// Absolute paths pass through; relative ones hang off the config directory.
fn config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("Ignoring unrecognised flag value {:?}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = EuroConfig::default();
        assert!(config.general.data_file.is_none());
        assert!(config.display.width.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&EuroConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.catalog_source, CatalogSource::Bundled);
        assert_eq!(resolved.show_disclaimer, DEFAULT_SHOW_DISCLAIMER);
        assert_eq!(resolved.metrics, ScreenMetrics::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = EuroConfig {
            general: GeneralConfig {
                data_file: Some("/srv/data/countries.json".to_string()),
                show_disclaimer: Some(false),
            },
            display: DisplayConfig {
                width: Some(120),
                height: Some(40),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(
            resolved.catalog_source,
            CatalogSource::File(PathBuf::from("/srv/data/countries.json"))
        );
        assert!(!resolved.show_disclaimer);
        assert_eq!(resolved.metrics, ScreenMetrics::new(120, 40));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = EuroConfig {
            general: GeneralConfig {
                data_file: Some("/srv/data/countries.json".to_string()),
                show_disclaimer: Some(true),
            },
            display: DisplayConfig {
                width: Some(120),
                height: None,
            },
        };
        let cli = CliOverrides {
            data_file: Some(PathBuf::from("local.json")),
            no_disclaimer: true,
            width: Some(60),
            height: Some(20),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(
            resolved.catalog_source,
            CatalogSource::File(PathBuf::from("local.json"))
        );
        assert!(!resolved.show_disclaimer);
        assert_eq!(resolved.metrics, ScreenMetrics::new(60, 20));
    }

    #[test]
    fn test_relative_data_file_hangs_off_config_dir() {
        let path = config_relative("countries.json");
        if let Some(dir) = config_dir() {
            assert_eq!(path, dir.join("countries.json"));
        }
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[display]
height = 30
"#;
        let config: EuroConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.height, Some(30));
        assert!(config.display.width.is_none());
        assert!(config.general.show_disclaimer.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
data_file = "countries.json"
show_disclaimer = false

[display]
width = 100
height = 30
"#;
        let config: EuroConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.data_file.as_deref(), Some("countries.json"));
        assert_eq!(config.general.show_disclaimer, Some(false));
        assert_eq!(config.display.width, Some(100));
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.data_file.is_none());
        assert!(path.exists());

        // The generated file is all comments and must parse back to defaults.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.general.show_disclaimer.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display]\nwidth = \"wide\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
