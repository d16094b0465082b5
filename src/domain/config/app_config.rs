//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default notification title
pub const DEFAULT_TITLE: &str = "Claude Code";

/// Default sound identifier
pub const DEFAULT_SOUND: &str = "default";

/// Default playback volume (percent)
pub const DEFAULT_VOLUME: u8 = 80;

/// Schema version written into new config files
pub const CONFIG_VERSION: &str = "1.0.0";

/// Notification section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_work_dir: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_time: Option<bool>,
}

/// Sound section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u32>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<SoundConfig>,
}

/// Resolved notification settings, read by the toast channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub title: String,
    pub show_work_dir: bool,
    pub show_time: bool,
}

/// Resolved sound settings, read by the sound channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundSettings {
    pub enabled: bool,
    pub file: String,
    pub volume: u8,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            version: Some(CONFIG_VERSION.to_string()),
            notification: Some(NotificationConfig {
                enabled: Some(true),
                title: Some(DEFAULT_TITLE.to_string()),
                show_work_dir: Some(true),
                show_time: Some(true),
            }),
            sound: Some(SoundConfig {
                enabled: Some(true),
                file: Some(DEFAULT_SOUND.to_string()),
                volume: Some(DEFAULT_VOLUME as u32),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            version: other.version.or(self.version),
            notification: Self::merge_notification(self.notification, other.notification),
            sound: Self::merge_sound(self.sound, other.sound),
        }
    }

    fn merge_notification(
        base: Option<NotificationConfig>,
        other: Option<NotificationConfig>,
    ) -> Option<NotificationConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(NotificationConfig {
                enabled: o.enabled.or(b.enabled),
                title: o.title.or(b.title),
                show_work_dir: o.show_work_dir.or(b.show_work_dir),
                show_time: o.show_time.or(b.show_time),
            }),
        }
    }

    fn merge_sound(base: Option<SoundConfig>, other: Option<SoundConfig>) -> Option<SoundConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(SoundConfig {
                enabled: o.enabled.or(b.enabled),
                file: o.file.or(b.file),
                volume: o.volume.or(b.volume),
            }),
        }
    }

    /// Resolve the notification section, filling gaps with defaults
    pub fn notification_settings(&self) -> NotificationSettings {
        let section = self.notification.clone().unwrap_or_default();
        NotificationSettings {
            enabled: section.enabled.unwrap_or(true),
            title: section
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            show_work_dir: section.show_work_dir.unwrap_or(true),
            show_time: section.show_time.unwrap_or(true),
        }
    }

    /// Resolve the sound section, filling gaps with defaults.
    ///
    /// Volume is clamped to 0..=100.
    pub fn sound_settings(&self) -> SoundSettings {
        let section = self.sound.clone().unwrap_or_default();
        let volume = section.volume.unwrap_or(DEFAULT_VOLUME as u32).min(100) as u8;
        SoundSettings {
            enabled: section.enabled.unwrap_or(true),
            file: section.file.unwrap_or_else(|| DEFAULT_SOUND.to_string()),
            volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.version, Some("1.0.0".to_string()));

        let notification = config.notification_settings();
        assert!(notification.enabled);
        assert_eq!(notification.title, "Claude Code");
        assert!(notification.show_work_dir);
        assert!(notification.show_time);

        let sound = config.sound_settings();
        assert!(sound.enabled);
        assert_eq!(sound.file, "default");
        assert_eq!(sound.volume, 80);
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.version.is_none());
        assert!(config.notification.is_none());
        assert!(config.sound.is_none());
    }

    #[test]
    fn empty_resolves_to_default_settings() {
        let config = AppConfig::empty();
        assert_eq!(
            config.notification_settings(),
            AppConfig::defaults().notification_settings()
        );
        assert_eq!(config.sound_settings(), AppConfig::defaults().sound_settings());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let other = AppConfig {
            notification: Some(NotificationConfig {
                title: Some("My Title".to_string()),
                show_time: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = AppConfig::defaults().merge(other);
        let notification = merged.notification_settings();

        assert_eq!(notification.title, "My Title");
        assert!(!notification.show_time);
        assert!(notification.show_work_dir); // Kept from base
        assert!(notification.enabled);
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let merged = AppConfig::defaults().merge(AppConfig::empty());
        assert_eq!(merged, AppConfig::defaults());
    }

    #[test]
    fn merge_sound_section() {
        let other = AppConfig {
            sound: Some(SoundConfig {
                file: Some("~/chime.wav".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let sound = AppConfig::defaults().merge(other).sound_settings();
        assert_eq!(sound.file, "~/chime.wav");
        assert_eq!(sound.volume, 80);
        assert!(sound.enabled);
    }

    #[test]
    fn volume_is_clamped() {
        let config = AppConfig {
            sound: Some(SoundConfig {
                volume: Some(250),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(config.sound_settings().volume, 100);
    }

    #[test]
    fn empty_title_falls_back_to_default() {
        let config = AppConfig {
            notification: Some(NotificationConfig {
                title: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(config.notification_settings().title, "Claude Code");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = serde_json::to_string(&AppConfig::defaults()).unwrap();
        assert!(json.contains("\"showWorkDir\":true"));
        assert!(json.contains("\"showTime\":true"));
        assert!(!json.contains("show_work_dir"));
    }

    #[test]
    fn partial_json_parses() {
        let config: AppConfig =
            serde_json::from_str(r#"{"sound":{"enabled":false},"extra":1}"#).unwrap();
        assert!(!config.sound_settings().enabled);
        assert!(config.notification.is_none());
    }
}
