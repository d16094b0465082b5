//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, NotificationConfig, NotificationSettings, SoundConfig, SoundSettings,
    CONFIG_VERSION, DEFAULT_SOUND, DEFAULT_TITLE, DEFAULT_VOLUME,
};
