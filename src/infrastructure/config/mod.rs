//! Configuration storage adapters

mod json_store;

pub use json_store::{config_dir, JsonConfigStore, APP_DIR_NAME, CONFIG_FILE_NAME};
