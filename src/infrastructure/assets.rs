//! Location of bundled sounds and the toast icon

use std::path::{Path, PathBuf};

use super::config::config_dir;

/// Overrides the assets directory
pub const ASSETS_DIR_ENV: &str = "CCNOTIFY_ASSETS_DIR";

const ASSETS_DIR_NAME: &str = "assets";
const SOUNDS_DIR_NAME: &str = "sounds";
const ICON_FILE_NAME: &str = "icon.png";

/// Resolved assets directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$CCNOTIFY_ASSETS_DIR`, then `assets/` beside the executable, then
    /// `assets/` in the config directory.
    pub fn locate() -> Self {
        let env_dir = std::env::var_os(ASSETS_DIR_ENV).map(PathBuf::from);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::resolve(env_dir, exe_dir.as_deref(), &config_dir())
    }

    fn resolve(env_dir: Option<PathBuf>, exe_dir: Option<&Path>, config_dir: &Path) -> Self {
        if let Some(dir) = env_dir.filter(|d| !d.as_os_str().is_empty()) {
            return Self::new(dir);
        }
        if let Some(dir) = exe_dir.map(|d| d.join(ASSETS_DIR_NAME)).filter(|d| d.is_dir()) {
            return Self::new(dir);
        }
        Self::new(config_dir.join(ASSETS_DIR_NAME))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sounds_dir(&self) -> PathBuf {
        self.root.join(SOUNDS_DIR_NAME)
    }

    /// Icon path, if the file exists
    pub fn icon(&self) -> Option<PathBuf> {
        Some(self.root.join(ICON_FILE_NAME)).filter(|p| p.is_file())
    }
}
