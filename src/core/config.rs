//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.clickstudio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::gesture::{
    DEFAULT_MOMENTUM_THRESHOLD, DEFAULT_SWIPE_THRESHOLD, GestureInterpreter,
};
use crate::core::hero::DEFAULT_HERO_INTERVAL_MS;
use crate::core::layout::LayoutMode;
use crate::core::services::{Service, ServiceCatalog};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_layout: Option<LayoutMode>,
    pub skip_intro: Option<bool>,
    pub hero_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GestureConfig {
    pub swipe_threshold: Option<f64>,
    pub momentum_threshold: Option<f64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_layout: LayoutMode,
    pub skip_intro: bool,
    pub hero_interval_ms: u64,
    pub gesture: GestureInterpreter,
    pub catalog: ServiceCatalog,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub layout: Option<LayoutMode>,
    pub skip_intro: bool,
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

/// Returns the path to `~/.clickstudio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".clickstudio").join("config.toml"))
}

/// Load config from `~/.clickstudio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StudioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StudioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StudioConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<StudioConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(StudioConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StudioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Click Studio Configuration
# All settings are optional. Defaults are used for anything left out.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_layout = "stack"           # "stack", "grid" or "list"
# skip_intro = false
# hero_interval_ms = 3000

# [gesture]
# swipe_threshold = 50.0             # drag distance that changes card
# momentum_threshold = 1000.0        # |distance| * velocity for a flick

# Replaces the built-in services when at least one entry is given.
# [[services]]
# id = "websites"
# title = "Website Development"
# description = "Professional websites that turn visitors into customers"
# full_description = "We build professional, responsive websites..."
# features = ["Custom design & development", "SEO optimization"]
# icon = "◎"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StudioConfig, cli: CliOverrides) -> ResolvedConfig {
    // Layout: CLI → env → config → default
    let default_layout = cli
        .layout
        .or_else(|| env_layout("CLICKSTUDIO_LAYOUT"))
        .or(config.general.default_layout)
        .unwrap_or_default();

    // Skip intro: CLI flag → env → config → default
    let skip_intro = cli.skip_intro
        || env_flag("CLICKSTUDIO_SKIP_INTRO")
            .or(config.general.skip_intro)
            .unwrap_or(false);

    let gesture = GestureInterpreter::new(
        positive_or(
            config.gesture.swipe_threshold,
            DEFAULT_SWIPE_THRESHOLD,
            "swipe_threshold",
        ),
        positive_or(
            config.gesture.momentum_threshold,
            DEFAULT_MOMENTUM_THRESHOLD,
            "momentum_threshold",
        ),
    );

    // Services: non-empty config list replaces the built-ins
    let catalog = if config.services.is_empty() {
        ServiceCatalog::builtin()
    } else {
        let services = unique_services(&config.services);
        info!("Using {} services from config", services.len());
        ServiceCatalog::new(services)
    };

    ResolvedConfig {
        default_layout,
        skip_intro,
        hero_interval_ms: config
            .general
            .hero_interval_ms
            .unwrap_or(DEFAULT_HERO_INTERVAL_MS),
        gesture,
        catalog,
    }
}

/// Card ids must be unique, so only the first service with a given id is kept.
fn unique_services(services: &[Service]) -> Vec<Service> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(services.len());
    for service in services {
        if seen.insert(service.id.as_str()) {
            unique.push(service.clone());
        } else {
            warn!("Ignoring duplicate service id '{}' in config", service.id);
        }
    }
    unique
}

fn env_layout(var: &str) -> Option<LayoutMode> {
    let raw = std::env::var(var).ok()?;
    match raw.parse() {
        Ok(mode) => Some(mode),
        Err(e) => {
            warn!("Ignoring {var}: {e}");
            None
        }
    }
}

fn env_flag(var: &str) -> Option<bool> {
    std::env::var(var)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

/// Thresholds must be finite and positive; anything else falls back.
fn positive_or(value: Option<f64>, default: f64, name: &str) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            warn!("Invalid {name} {v}, using default {default}");
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::App;

    #[test]
    fn test_default_config_parses() {
        let config = StudioConfig::default();
        assert!(config.services.is_empty());
        assert!(config.general.default_layout.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = StudioConfig::default();
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.hero_interval_ms, DEFAULT_HERO_INTERVAL_MS);
        assert_eq!(resolved.gesture, GestureInterpreter::default());
        assert_eq!(resolved.catalog, ServiceCatalog::builtin());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = StudioConfig {
            general: GeneralConfig {
                default_layout: Some(LayoutMode::List),
                skip_intro: Some(true),
                hero_interval_ms: Some(1500),
            },
            gesture: GestureConfig {
                swipe_threshold: Some(30.0),
                momentum_threshold: Some(500.0),
            },
            ..Default::default()
        };
        let resolved = resolve(
            &config,
            CliOverrides {
                layout: None,
                skip_intro: false,
            },
        );
        assert!(resolved.skip_intro);
        assert_eq!(resolved.hero_interval_ms, 1500);
        assert_eq!(resolved.gesture, GestureInterpreter::new(30.0, 500.0));
    }

    #[test]
    fn test_resolve_cli_layout_wins() {
        let config = StudioConfig {
            general: GeneralConfig {
                default_layout: Some(LayoutMode::List),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(
            &config,
            CliOverrides {
                layout: Some(LayoutMode::Grid),
                skip_intro: true,
            },
        );
        assert_eq!(resolved.default_layout, LayoutMode::Grid);
        assert!(resolved.skip_intro);
    }

    #[test]
    fn test_invalid_thresholds_fall_back() {
        let config = StudioConfig {
            gesture: GestureConfig {
                swipe_threshold: Some(-3.0),
                momentum_threshold: Some(f64::NAN),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.gesture, GestureInterpreter::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_layout = "grid"
skip_intro = true
hero_interval_ms = 2000

[gesture]
swipe_threshold = 40.0

[[services]]
id = "seo"
title = "SEO"
description = "Get found"
full_description = "We get you found on search engines."
features = ["Keyword research", "Audits"]

[[services]]
id = "print"
title = "Print"
description = "Flyers and cards"
full_description = "Business cards, flyers and banners."
icon = "▦"
"#;
        let config: StudioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_layout, Some(LayoutMode::Grid));
        assert_eq!(config.gesture.swipe_threshold, Some(40.0));
        assert!(config.gesture.momentum_threshold.is_none());
        assert_eq!(config.services.len(), 2);
        assert_eq!(config.services[0].features.len(), 2);
        assert!(config.services[1].features.is_empty());
        assert_eq!(config.services[1].icon.as_deref(), Some("▦"));

        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.catalog.len(), 2);
        assert!(resolved.catalog.get("seo").is_some());
    }

    #[test]
    fn test_duplicate_service_ids_keep_the_first() {
        let toml_str = r#"
[[services]]
id = "x"
title = "First"
description = "kept"
full_description = "kept"

[[services]]
id = "x"
title = "Second"
description = "dropped"
full_description = "dropped"

[[services]]
id = "y"
title = "Other"
description = "kept"
full_description = "kept"
"#;
        let config: StudioConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.catalog.len(), 2);
        assert_eq!(resolved.catalog.get("x").unwrap().title, "First");

        let mut app = App::from_config(&resolved);
        app.navigator.card_clicked("x");
        let expanded = app
            .navigator
            .render_model()
            .iter()
            .filter(|entry| entry.is_expanded)
            .count();
        assert_eq!(expanded, 1);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[general]
skip_intro = true
"#;
        let config: StudioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.skip_intro, Some(true));
        assert!(config.general.default_layout.is_none());
        assert!(config.services.is_empty());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.services.is_empty());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Click Studio Configuration"));
        // Everything is commented out, so it parses back to defaults
        let reparsed: StudioConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.general.default_layout.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nskip_intro = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
