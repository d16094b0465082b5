//! Built-in sound library and sound identifier resolution

use std::fs;
use std::path::{Path, PathBuf};

/// Built-in sounds: logical name to file name inside the sounds directory
pub const BUILT_IN_SOUNDS: &[(&str, &str)] = &[("default", "default.mp3")];

/// File extensions listed as selectable sounds
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "ogg", "aiff", "caf"];

/// Directory of bundled sounds plus the home directory used for `~` expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundLibrary {
    sounds_dir: PathBuf,
    home: Option<PathBuf>,
}

impl SoundLibrary {
    /// Create a library over `sounds_dir`, expanding `~` to the user's home
    pub fn new(sounds_dir: impl Into<PathBuf>) -> Self {
        Self {
            sounds_dir: sounds_dir.into(),
            home: dirs::home_dir(),
        }
    }

    /// Create with an explicit home directory
    pub fn with_home(sounds_dir: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            sounds_dir: sounds_dir.into(),
            home: Some(home.into()),
        }
    }

    pub fn sounds_dir(&self) -> &Path {
        &self.sounds_dir
    }

    /// Path of the built-in default sound
    pub fn default_path(&self) -> PathBuf {
        self.sounds_dir.join(BUILT_IN_SOUNDS[0].1)
    }

    /// Resolve a sound identifier to a file path. First match wins:
    ///
    /// 1. empty or `"default"`: the built-in default
    /// 2. a built-in name: that built-in's file
    /// 3. an absolute path that exists: the path itself
    /// 4. a `~` path that exists once expanded: the expanded path
    /// 5. anything else: the built-in default
    ///
    /// Never fails. The returned path is not guaranteed to exist; the
    /// sound channel re-checks before playback.
    pub fn resolve(&self, id: &str) -> PathBuf {
        let name = id.trim();
        if name.is_empty() || name == "default" {
            return self.default_path();
        }

        if let Some((_, file)) = BUILT_IN_SOUNDS.iter().find(|(builtin, _)| *builtin == name) {
            return self.sounds_dir.join(file);
        }

        let candidate = Path::new(id);
        if candidate.is_absolute() && candidate.exists() {
            return candidate.to_path_buf();
        }

        if let Some(expanded) = self.expand_home(id) {
            if expanded.exists() {
                return expanded;
            }
        }

        self.default_path()
    }

    /// Expand a leading `~` to the home directory
    fn expand_home(&self, id: &str) -> Option<PathBuf> {
        let home = self.home.as_ref()?;
        if id == "~" {
            return Some(home.clone());
        }
        let rest = id.strip_prefix("~/").or_else(|| id.strip_prefix("~\\"))?;
        Some(home.join(rest))
    }

    /// List selectable sound names: the built-ins followed by the stem of
    /// every supported file in the sounds directory, without duplicates.
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = BUILT_IN_SOUNDS
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();

        let entries = match fs::read_dir(&self.sounds_dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!(
                    "Failed to read sounds directory {}: {}",
                    self.sounds_dir.display(),
                    e
                );
                return names;
            }
        };

        let mut found: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_supported_extension(path))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();
        found.sort();

        for name in found {
            if !names.contains(&name) {
                names.push(name);
            }
        }

        names
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library(dir: &TempDir) -> SoundLibrary {
        SoundLibrary::with_home(dir.path().join("sounds"), dir.path().join("home"))
    }

    #[test]
    fn empty_and_default_resolve_to_built_in() {
        let dir = TempDir::new().unwrap();
        let lib = library(&dir);
        let expected = dir.path().join("sounds").join("default.mp3");

        assert_eq!(lib.resolve(""), expected);
        assert_eq!(lib.resolve("default"), expected);
        assert_eq!(lib.resolve("  "), expected);
    }

    #[test]
    fn existing_absolute_path_is_returned_unchanged() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("chime.wav");
        fs::write(&custom, b"RIFF").unwrap();

        let lib = library(&dir);
        let id = custom.to_string_lossy().to_string();
        assert_eq!(lib.resolve(&id), custom);
    }

    #[cfg(unix)]
    #[test]
    fn absolute_path_with_trailing_space_is_kept_verbatim() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("chime.wav ");
        fs::write(&custom, b"RIFF").unwrap();

        let lib = library(&dir);
        let id = custom.to_string_lossy().to_string();
        assert_eq!(lib.resolve(&id), custom);
    }

    #[test]
    fn missing_absolute_path_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let lib = library(&dir);
        let missing = dir.path().join("nope.wav");

        assert_eq!(
            lib.resolve(&missing.to_string_lossy()),
            lib.default_path()
        );
    }

    #[test]
    fn existing_home_path_is_expanded() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        fs::create_dir_all(home.join("sounds")).unwrap();
        fs::write(home.join("sounds").join("ding.mp3"), b"ID3").unwrap();

        let lib = library(&dir);
        assert_eq!(
            lib.resolve("~/sounds/ding.mp3"),
            home.join("sounds").join("ding.mp3")
        );
    }

    #[test]
    fn missing_home_path_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let lib = library(&dir);

        let resolved = lib.resolve("~/does/not/exist.mp3");
        assert_eq!(resolved, lib.default_path());
        assert!(!resolved.to_string_lossy().contains('~'));
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let lib = library(&dir);
        assert_eq!(lib.resolve("trumpet"), lib.default_path());
    }

    #[test]
    fn available_lists_built_ins_and_supported_files() {
        let dir = TempDir::new().unwrap();
        let sounds = dir.path().join("sounds");
        fs::create_dir_all(&sounds).unwrap();
        fs::write(sounds.join("default.mp3"), b"").unwrap();
        fs::write(sounds.join("bell.WAV"), b"").unwrap();
        fs::write(sounds.join("chime.ogg"), b"").unwrap();
        fs::write(sounds.join("notes.txt"), b"").unwrap();

        let names = library(&dir).available();
        assert_eq!(names, vec!["default", "bell", "chime"]);
    }

    #[test]
    fn available_without_directory_lists_built_ins() {
        let dir = TempDir::new().unwrap();
        assert_eq!(library(&dir).available(), vec!["default"]);
    }
}
