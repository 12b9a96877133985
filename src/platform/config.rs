// ScanShelf - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ScanShelf configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/scanshelf/ or %APPDATA%\ScanShelf\config\)
    pub config_dir: PathBuf,

    /// Data directory; the default artifact directory lives beneath it.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Default artifact directory: `<data_dir>/profiles`.
    pub fn default_profiles_dir(&self) -> PathBuf {
        self.data_dir.join(constants::PROFILES_DIR_NAME)
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
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[delete]` section.
    pub delete: DeleteSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[catalog]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Directory holding the profile artifacts.
    pub profiles_dir: Option<String>,
    /// Filename suffix that marks an artifact, e.g. ".json".
    pub artifact_suffix: Option<String>,
    /// Records per page.
    pub page_size: Option<usize>,
}

/// `[delete]` config section.
#[derive(Default, serde::Deserialize)]
#[serde(default)]
pub struct DeleteSection {
    /// Shared token bulk-delete requests must present.
    pub token: Option<String>,
}

// Hand-written so the token never reaches debug output.
impl std::fmt::Debug for DeleteSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeleteSection")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
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
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Clone)]
pub struct AppConfig {
    /// Artifact directory override; `None` means the platform default.
    pub profiles_dir: Option<PathBuf>,
    /// Artifact suffix.
    pub artifact_suffix: String,
    /// Records per page.
    pub page_size: usize,
    /// Bulk-delete token; `None` disables bulk delete.
    pub delete_token: Option<String>,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profiles_dir: None,
            artifact_suffix: constants::DEFAULT_ARTIFACT_SUFFIX.to_string(),
            page_size: constants::DEFAULT_PAGE_SIZE,
            delete_token: None,
            log_level: None,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("profiles_dir", &self.profiles_dir)
            .field("artifact_suffix", &self.artifact_suffix)
            .field("page_size", &self.page_size)
            .field("delete_token", &self.delete_token.as_ref().map(|_| "<redacted>"))
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Read and parse a config file without validating values.
pub fn read_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Validate raw values against the named bounds.
///
/// Returns the config plus one warning per rejected value.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Catalog: profiles_dir --
    if let Some(dir) = raw.catalog.profiles_dir {
        if dir.trim().is_empty() {
            warnings.push(
                "[catalog] profiles_dir is empty. Using the platform default directory."
                    .to_string(),
            );
        } else {
            config.profiles_dir = Some(PathBuf::from(dir));
        }
    }

    // -- Catalog: artifact_suffix --
    if let Some(suffix) = raw.catalog.artifact_suffix {
        if suffix.len() > 1 && suffix.starts_with('.') && !suffix.contains(['/', '\\']) {
            config.artifact_suffix = suffix;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[catalog] artifact_suffix".to_string(),
                    value: suffix,
                    expected: format!(
                        "a '.'-prefixed extension such as \"{}\"",
                        constants::DEFAULT_ARTIFACT_SUFFIX
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Catalog: page_size --
    if let Some(size) = raw.catalog.page_size {
        if (constants::MIN_PAGE_SIZE..=constants::MAX_PAGE_SIZE).contains(&size) {
            config.page_size = size;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[catalog] page_size".to_string(),
                    value: size.to_string(),
                    expected: format!(
                        "{}-{} (default {})",
                        constants::MIN_PAGE_SIZE,
                        constants::MAX_PAGE_SIZE,
                        constants::DEFAULT_PAGE_SIZE
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Delete: token --
    if let Some(token) = raw.delete.token {
        if token.is_empty() {
            warnings.push("[delete] token is empty; bulk delete stays disabled.".to_string());
        } else {
            config.delete_token = Some(token);
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the tool still starts but the user is told.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let raw = match read_config_file(&config_path) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            return (AppConfig::default(), vec![msg]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, warnings) = validate(raw);
    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }
    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(constants::CONFIG_FILE_NAME), content).unwrap();
        dir
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.page_size, constants::DEFAULT_PAGE_SIZE);
        assert_eq!(config.artifact_suffix, ".json");
        assert!(config.delete_token.is_none());
    }

    #[test]
    fn test_valid_config() {
        let dir = write_config(
            r#"
            [catalog]
            profiles_dir = "/srv/profiles"
            artifact_suffix = ".profile"
            page_size = 50

            [delete]
            token = "hunter2"

            [logging]
            level = "debug"

            [future_section]
            ignored = true
            "#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.profiles_dir, Some(PathBuf::from("/srv/profiles")));
        assert_eq!(config.artifact_suffix, ".profile");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.delete_token.as_deref(), Some("hunter2"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_default() {
        let dir = write_config(
            r#"
            [catalog]
            artifact_suffix = "json"
            page_size = 0

            [logging]
            level = "verbose"
            "#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 3, "got: {warnings:?}");
        assert_eq!(config.artifact_suffix, ".json");
        assert_eq!(config.page_size, constants::DEFAULT_PAGE_SIZE);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_unparseable_config_warns() {
        let dir = write_config("[catalog\npage_size = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("parse"), "got: {}", warnings[0]);
        assert_eq!(config.page_size, constants::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = AppConfig {
            delete_token: Some("hunter2".to_string()),
            ..Default::default()
        };
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
