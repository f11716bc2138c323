// iconsmith - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. Only paths and logging are configurable;
// the emblem's colours and geometry are fixed.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for iconsmith configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/iconsmith/ or %APPDATA%\iconsmith\config\)
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
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[output]` section.
    pub output: OutputSection,
    /// `[inspect]` section.
    pub inspect: InspectSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Android resource root containing the mipmap-* folders.
    pub res_dir: Option<String>,
}

/// `[inspect]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct InspectSection {
    /// Image opened by `inspect` when no path is given.
    pub path: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Resource root the generator writes into.
    pub res_dir: PathBuf,
    /// Default image for the inspector.
    pub inspect_path: PathBuf,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            res_dir: PathBuf::from(constants::DEFAULT_RES_DIR),
            inspect_path: PathBuf::from(constants::DEFAULT_INSPECT_PATH),
            log_level: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and the non-fatal problems
/// found. A missing file yields defaults with no problems. Unreadable or
/// unparseable files yield defaults plus one problem; invalid values fall
/// back to their defaults individually.
///
/// Runs before logging is initialised, so problems are returned rather than
/// logged; the caller reports them once the subscriber is up.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- Output: res_dir --
    if let Some(ref dir) = raw.output.res_dir {
        if dir.trim().is_empty() {
            warnings.push(non_empty_path("[output] res_dir", dir));
        } else {
            config.res_dir = PathBuf::from(dir);
        }
    }

    // -- Inspect: path --
    if let Some(ref path) = raw.inspect.path {
        if path.trim().is_empty() {
            warnings.push(non_empty_path("[inspect] path", path));
        } else {
            config.inspect_path = PathBuf::from(path);
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    (config, warnings)
}

fn non_empty_path(field: &str, value: &str) -> ConfigError {
    ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: "a non-empty path".to_string(),
    }
}
