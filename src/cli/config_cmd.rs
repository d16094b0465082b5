//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    if config.version.is_none() {
        config.version = AppConfig::defaults().version;
    }
    set_value(&mut config, key, value)?;

    store.save(&config).await?;
    log::info!("Config updated: {} = {}", key, value);
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(&display_value(&config, key));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, &display_value(&config, key));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// File value, or the default marked as such
fn display_value(config: &AppConfig, key: &str) -> String {
    match get_value(config, key) {
        Some(v) => v,
        None => match get_value(&AppConfig::defaults(), key) {
            Some(d) => format!("{} (default)", d),
            None => "(not set)".to_string(),
        },
    }
}

/// Read a dotted key from the config, None if unset
fn get_value(config: &AppConfig, key: &str) -> Option<String> {
    let notification = config.notification.as_ref();
    let sound = config.sound.as_ref();

    match key {
        "notification.enabled" => notification.and_then(|n| n.enabled).map(|b| b.to_string()),
        "notification.title" => notification.and_then(|n| n.title.clone()),
        "notification.show_work_dir" => notification
            .and_then(|n| n.show_work_dir)
            .map(|b| b.to_string()),
        "notification.show_time" => notification.and_then(|n| n.show_time).map(|b| b.to_string()),
        "sound.enabled" => sound.and_then(|s| s.enabled).map(|b| b.to_string()),
        "sound.file" => sound.and_then(|s| s.file.clone()),
        "sound.volume" => sound.and_then(|s| s.volume).map(|v| v.to_string()),
        _ => None,
    }
}

/// Validate `value` for `key` and store it
fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "notification.enabled" => {
            config.notification.get_or_insert_with(Default::default).enabled =
                Some(bool_value(key, value)?)
        }
        "notification.title" => {
            config.notification.get_or_insert_with(Default::default).title =
                Some(non_empty(key, value)?)
        }
        "notification.show_work_dir" => {
            config
                .notification
                .get_or_insert_with(Default::default)
                .show_work_dir = Some(bool_value(key, value)?)
        }
        "notification.show_time" => {
            config.notification.get_or_insert_with(Default::default).show_time =
                Some(bool_value(key, value)?)
        }
        "sound.enabled" => {
            config.sound.get_or_insert_with(Default::default).enabled =
                Some(bool_value(key, value)?)
        }
        "sound.file" => {
            config.sound.get_or_insert_with(Default::default).file = Some(non_empty(key, value)?)
        }
        "sound.volume" => {
            config.sound.get_or_insert_with(Default::default).volume =
                Some(volume_value(key, value)?)
        }
        _ => return check_key(key),
    }
    Ok(())
}

fn bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

fn non_empty(key: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn volume_value(key: &str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(v) if v <= 100 => Ok(v),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be an integer between 0 and 100".to_string(),
        }),
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
