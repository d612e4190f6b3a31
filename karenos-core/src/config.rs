//! TOML configuration: animation timings, viewport thresholds, input and
//! storage settings, and the page content.
//!
//! Every field has a default, so an empty file (or no file) is valid.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::SiteContent;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub count_up_ms: u64,
    pub glow_smoothing: f64,
    pub glow_radius: f64,
    pub glow_opacity: f64,
    pub typing_start_ms: u64,
    pub typing_char_ms: u64,
    pub typing_hold_ms: u64,
    pub typing_restart_ms: u64,
    /// Host frame interval (the display refresh clock).
    pub frame_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            count_up_ms: 1200,
            glow_smoothing: 0.12,
            glow_radius: 200.0,
            glow_opacity: 0.35,
            typing_start_ms: 800,
            typing_char_ms: 45,
            typing_hold_ms: 2500,
            typing_restart_ms: 800,
            frame_ms: 16,
        }
    }
}

impl AnimationConfig {
    pub fn count_up_duration(&self) -> Duration {
        Duration::from_millis(self.count_up_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Reveal once top < viewport height - this.
    pub reveal_offset: f64,
    /// Count-up starts once top < viewport height - this.
    pub count_up_offset: f64,
    pub navbar_scrolled_after: f64,
    pub tooltip_margin: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            reveal_offset: 80.0,
            count_up_offset: 100.0,
            navbar_scrolled_after: 50.0,
            tooltip_margin: 16.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Touch-primary devices get no cursor glow.
    pub touch_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Idle minutes after which a stored session counts as a new one.
    pub session_ttl_minutes: i64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_ttl_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KarenConfig {
    pub animation: AnimationConfig,
    pub viewport: ViewportConfig,
    pub input: InputConfig,
    pub storage: StorageConfig,
    pub content: SiteContent,
}

impl KarenConfig {
    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: KarenConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.animation;
        if !(a.glow_smoothing > 0.0 && a.glow_smoothing <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "animation.glow_smoothing",
                reason: format!("must be in (0, 1], got {}", a.glow_smoothing),
            });
        }
        if !(0.0..=1.0).contains(&a.glow_opacity) {
            return Err(ConfigError::Invalid {
                field: "animation.glow_opacity",
                reason: format!("must be in [0, 1], got {}", a.glow_opacity),
            });
        }
        if a.frame_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "animation.frame_ms",
                reason: "must be > 0".into(),
            });
        }
        if a.typing_char_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "animation.typing_char_ms",
                reason: "must be > 0".into(),
            });
        }
        if self.storage.session_ttl_minutes <= 0 {
            return Err(ConfigError::Invalid {
                field: "storage.session_ttl_minutes",
                reason: format!("must be > 0, got {}", self.storage.session_ttl_minutes),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let c: KarenConfig = toml::from_str("").unwrap();
        assert_eq!(c, KarenConfig::default());
        assert_eq!(c.animation.count_up_duration(), Duration::from_millis(1200));
        assert_eq!(c.viewport.reveal_offset, 80.0);
        assert_eq!(c.viewport.count_up_offset, 100.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let c: KarenConfig = toml::from_str(
            r#"
            [animation]
            glow_smoothing = 0.2

            [input]
            touch_primary = true
            "#,
        )
        .unwrap();
        assert_eq!(c.animation.glow_smoothing, 0.2);
        assert_eq!(c.animation.count_up_ms, 1200);
        assert!(c.input.touch_primary);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn default_roundtrips_through_toml() {
        let text = KarenConfig::default().to_toml().unwrap();
        let back: KarenConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, KarenConfig::default());
    }

    #[test]
    fn validation_rejects_bad_smoothing() {
        let mut c = KarenConfig::default();
        c.animation.glow_smoothing = 0.0;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid { field: "animation.glow_smoothing", .. })
        ));
        c.animation.glow_smoothing = 1.5;
        assert!(c.validate().is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = KarenConfig::load(Path::new("/nonexistent/karenos.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reports_bad_toml() {
        let dir = std::env::temp_dir().join("karenos_config_bad");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[animation\ncount_up_ms = ").unwrap();
        let err = KarenConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
