use std::path::{Path, PathBuf};
use std::time::Duration;

use cardstack_core::{EasingFunction, TransitionSpec};
use iced::Size;
use serde::Deserialize;
use thiserror::Error;

use crate::state::State;

pub const CONFIG_PATH_ENV: &str = "CARDSTACK_CONFIG";
pub const TRANSITION_MS_ENV: &str = "CARDSTACK_TRANSITION_MS";
pub const EASING_ENV: &str = "CARDSTACK_EASING";
pub const IMAGE_DIR_ENV: &str = "CARDSTACK_IMAGE_DIR";

const DEFAULT_WINDOW_SIZE: Size = Size::new(720.0, 760.0);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Optional overrides read from the TOML file named by `CARDSTACK_CONFIG`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub transition_ms: Option<u64>,
    pub easing: Option<EasingFunction>,
    pub caption_delay_ms: Option<u64>,
    pub image_dir: Option<PathBuf>,
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let raw =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(toml::from_str(&raw)?)
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub transition: TransitionSpec,
    /// Directory holding `<image_ref>.jpg|png` files for the cards.
    pub image_dir: Option<PathBuf>,
    pub window_size: Size,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transition: TransitionSpec::default(),
            image_dir: None,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl AppConfig {
    /// Defaults, then the config file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    pub fn from_sources(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = file {
            log::info!("Loading config from {}", path.display());
            config.apply_file(ConfigFile::read(path)?);
        }

        if let Some(value) = env(TRANSITION_MS_ENV) {
            let millis = value.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: TRANSITION_MS_ENV,
                    value: value.clone(),
                }
            })?;
            config.transition.duration = Duration::from_millis(millis);
        }

        if let Some(value) = env(EASING_ENV) {
            config.transition.easing = value.parse().map_err(|_| {
                ConfigError::InvalidValue {
                    key: EASING_ENV,
                    value: value.clone(),
                }
            })?;
        }

        if let Some(value) = env(IMAGE_DIR_ENV) {
            config.image_dir = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(millis) = file.transition_ms {
            self.transition.duration = Duration::from_millis(millis);
        }
        if let Some(easing) = file.easing {
            self.transition.easing = easing;
        }
        if let Some(millis) = file.caption_delay_ms {
            self.transition.caption_delay = Duration::from_millis(millis);
        }
        if file.image_dir.is_some() {
            self.image_dir = file.image_dir;
        }
        if let Some(width) = file.window_width {
            self.window_size.width = width;
        }
        if let Some(height) = file.window_height {
            self.window_size.height = height;
        }
    }
}

/// Boot logic shared by the runtime application and tests.
pub fn boot(config: &AppConfig) -> State {
    State::new(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_follow_card_timing() {
        let config = AppConfig::from_sources(None, no_env).unwrap();
        assert_eq!(config.transition, TransitionSpec::default());
        assert!(config.image_dir.is_none());
    }

    #[test]
    fn file_then_env_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "transition_ms = 250\neasing = \"linear\"\nimage_dir = \"/srv/cats\"\nwindow_width = 900.0"
        )
        .unwrap();

        let config = AppConfig::from_sources(Some(file.path()), |key| {
            (key == TRANSITION_MS_ENV).then(|| "800".to_string())
        })
        .unwrap();

        assert_eq!(config.transition.duration, Duration::from_millis(800));
        assert_eq!(config.transition.easing, EasingFunction::Linear);
        assert_eq!(config.image_dir, Some(PathBuf::from("/srv/cats")));
        assert_eq!(config.window_size.width, 900.0);
    }

    #[test]
    fn invalid_env_value_is_reported() {
        let err = AppConfig::from_sources(None, |key| {
            (key == EASING_ENV).then(|| "wobbly".to_string())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: EASING_ENV, .. }
        ));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "autoplay = true").unwrap();
        let err = AppConfig::from_sources(Some(file.path()), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::from_sources(
            Some(Path::new("/definitely/not/here.toml")),
            no_env,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
