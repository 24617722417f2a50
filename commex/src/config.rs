use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::navigation::Route;
use crate::shared::i18n::Language;

const DEFAULT_MODAL_TRANSITION_MS: u64 = 150;

/// Errors emitted while reading the startup configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
}

/// Startup options read from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) language: Language,
    pub(crate) sidebar_expanded: bool,
    pub(crate) modal_transition_ms: u64,
    /// View id shown at startup instead of the default view.
    pub(crate) start_view: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::PtBr,
            sidebar_expanded: true,
            modal_transition_ms: DEFAULT_MODAL_TRANSITION_MS,
            start_view: None,
        }
    }
}

impl AppConfig {
    /// Delay between closing one wizard dialog and revealing the next.
    pub(crate) fn modal_transition(&self) -> Duration {
        Duration::from_millis(self.modal_transition_ms)
    }

    /// Route mounted at startup. Unknown ids fall back to the default view.
    pub(crate) fn start_route(&self) -> Route {
        self.start_view
            .as_deref()
            .map(Route::from_id_or_default)
            .unwrap_or(Route::DEFAULT)
    }
}

/// Status describing how the configuration was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: AppConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: AppConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (AppConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the configuration, falling back to defaults on any failure.
pub(crate) fn load_or_default() -> AppConfig {
    let path = config_path();
    match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("loaded config from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!(
                        "no config at {}, using defaults",
                        path.display()
                    );
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!(
                        "invalid config at {}, using defaults: {message}",
                        path.display()
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("failed to read config, using defaults: {err}");
            AppConfig::default()
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<AppConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            AppConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("commex")
            .join("config.json");
    }

    std::env::temp_dir().join("commex").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{
        AppConfig, ConfigError, ConfigLoadStatus, load_config_from_path,
    };
    use crate::navigation::Route;
    use crate::shared::i18n::Language;

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let loaded = load_config_from_path(&root.join("config.json"))
            .expect("missing config should not be an error");
        let (config, status) = loaded.into_parts();

        assert_eq!(config, AppConfig::default());
        assert_eq!(status, ConfigLoadStatus::Missing);
        assert_eq!(config.modal_transition(), Duration::from_millis(150));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_partial_json_when_load_then_absent_fields_use_defaults() {
        let root = test_temp_dir("partial");
        let path = root.join("config.json");
        let payload = r#"{ "language": "en-US", "modal_transition_ms": 0 }"#;
        fs::write(&path, payload).expect("config payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("config should load")
            .into_parts();

        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(config.language, Language::EnUs);
        assert!(config.sidebar_expanded);
        assert_eq!(config.modal_transition_ms, 0);
        assert_eq!(config.start_route(), Route::DEFAULT);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("config.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("loading invalid config should not fail with io error")
            .into_parts();

        assert_eq!(config, AppConfig::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_start_view_when_resolving_start_route_then_unknown_ids_fall_back()
    {
        let known = AppConfig {
            start_view: Some(String::from("pricing-liberacao")),
            ..AppConfig::default()
        };
        assert_eq!(known.start_route(), Route::PricingLiberacao);

        let unknown = AppConfig {
            start_view: Some(String::from("relatorios")),
            ..AppConfig::default()
        };
        assert_eq!(unknown.start_route(), Route::DEFAULT);
    }

    #[test]
    fn given_directory_path_when_load_then_io_error_is_returned() {
        let root = test_temp_dir("directory");
        let result = load_config_from_path(&root);
        assert!(matches!(result, Err(ConfigError::Io(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "commex-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
