//! Install / uninstall use case for the assistant's `Stop` hook

use std::path::PathBuf;

use crate::domain::error::InstallError;
use crate::domain::hooks::{has_stop_hook, remove_stop_hooks, upsert_stop_hook, HookChange};

use super::ports::{ConfigStore, HookSettingsStore};

/// Result of an install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Whether a default config file was written
    pub config_created: bool,
    /// Backup of the previous settings file, if one existed
    pub backup: Option<PathBuf>,
    /// What happened to the hook entry (None when hooks were skipped)
    pub hook_change: Option<HookChange>,
}

/// Result of an uninstall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallReport {
    /// Number of hook commands removed
    pub hooks_removed: usize,
    /// Whether the config directory was removed
    pub config_removed: bool,
}

/// Installation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallStatus {
    pub has_hook: bool,
    pub has_config: bool,
}

impl InstallStatus {
    pub fn installed(&self) -> bool {
        self.has_hook && self.has_config
    }
}

/// Installer use case
pub struct InstallUseCase<C, H>
where
    C: ConfigStore,
    H: HookSettingsStore,
{
    config: C,
    settings: H,
}

impl<C, H> InstallUseCase<C, H>
where
    C: ConfigStore,
    H: HookSettingsStore,
{
    /// Create a new use case instance
    pub fn new(config: C, settings: H) -> Self {
        Self { config, settings }
    }

    /// Write the default config (unless present) and register `hook_command`
    /// as a `Stop` hook.
    pub async fn install(
        &self,
        hook_command: &str,
        skip_hooks: bool,
    ) -> Result<InstallReport, InstallError> {
        log::info!("Install started: skip_hooks={}", skip_hooks);

        let config_created = if self.config.exists() {
            log::info!("Keeping existing config at {}", self.config.path().display());
            false
        } else {
            self.config.init().await?;
            log::info!("Config file created at {}", self.config.path().display());
            true
        };

        if skip_hooks {
            log::info!("Hook installation skipped");
            return Ok(InstallReport {
                config_created,
                backup: None,
                hook_change: None,
            });
        }

        let backup = self.settings.backup().await?;
        if let Some(ref path) = backup {
            log::info!("Settings backed up to {}", path.display());
        }

        let mut document = self.settings.load().await;
        let change = upsert_stop_hook(&mut document, hook_command)?;
        self.settings.save(&document).await?;
        log::info!("Stop hook {:?}: {}", change, hook_command);

        Ok(InstallReport {
            config_created,
            backup,
            hook_change: Some(change),
        })
    }

    /// Remove our `Stop` hooks and, unless `keep_config`, the config directory.
    pub async fn uninstall(&self, keep_config: bool) -> Result<UninstallReport, InstallError> {
        log::info!("Uninstall started: keep_config={}", keep_config);

        let mut document = self.settings.load().await;
        let hooks_removed = remove_stop_hooks(&mut document);
        if hooks_removed > 0 {
            self.settings.save(&document).await?;
            log::info!("Removed {} hook command(s)", hooks_removed);
        }

        let config_removed = if keep_config {
            false
        } else {
            let removed = self.config.remove_dir().await?;
            if removed {
                log::info!("Config directory removed");
            }
            removed
        };

        Ok(UninstallReport {
            hooks_removed,
            config_removed,
        })
    }

    /// Report whether the hook and the config file are present
    pub async fn status(&self) -> InstallStatus {
        let document = self.settings.load().await;
        let status = InstallStatus {
            has_hook: has_stop_hook(&document),
            has_config: self.config.exists(),
        };
        log::debug!("Installation check: {:?}", status);
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::domain::config::AppConfig;
    use crate::domain::error::{ConfigError, HookSettingsError};

    const CMD: &str = "\"/usr/bin/ccnotify\" run";

    #[derive(Default, Clone)]
    struct MemoryConfig {
        saved: Arc<Mutex<Option<AppConfig>>>,
    }

    #[async_trait]
    impl ConfigStore for MemoryConfig {
        async fn load(&self) -> Result<AppConfig, ConfigError> {
            Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
            *self.saved.lock().unwrap() = Some(config.clone());
            Ok(())
        }

        fn path(&self) -> PathBuf {
            PathBuf::from("/mem/config.json")
        }

        fn exists(&self) -> bool {
            self.saved.lock().unwrap().is_some()
        }

        async fn init(&self) -> Result<(), ConfigError> {
            self.save(&AppConfig::defaults()).await
        }

        async fn remove_dir(&self) -> Result<bool, ConfigError> {
            Ok(self.saved.lock().unwrap().take().is_some())
        }
    }

    #[derive(Clone)]
    struct MemorySettings {
        document: Arc<Mutex<Option<Value>>>,
        saves: Arc<Mutex<usize>>,
    }

    impl MemorySettings {
        fn new(document: Option<Value>) -> Self {
            Self {
                document: Arc::new(Mutex::new(document)),
                saves: Arc::new(Mutex::new(0)),
            }
        }

        fn current(&self) -> Value {
            self.document.lock().unwrap().clone().unwrap_or(json!({}))
        }
    }

    #[async_trait]
    impl HookSettingsStore for MemorySettings {
        async fn load(&self) -> Value {
            self.current()
        }

        async fn save(&self, settings: &Value) -> Result<(), HookSettingsError> {
            *self.document.lock().unwrap() = Some(settings.clone());
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }

        async fn backup(&self) -> Result<Option<PathBuf>, HookSettingsError> {
            Ok(self
                .document
                .lock()
                .unwrap()
                .as_ref()
                .map(|_| PathBuf::from("/mem/settings.json.backup")))
        }

        fn path(&self) -> PathBuf {
            PathBuf::from("/mem/settings.json")
        }
    }

    #[tokio::test]
    async fn install_writes_config_and_hook() {
        let config = MemoryConfig::default();
        let settings = MemorySettings::new(None);
        let use_case = InstallUseCase::new(config.clone(), settings.clone());

        let report = use_case.install(CMD, false).await.unwrap();

        assert!(report.config_created);
        assert!(report.backup.is_none());
        assert_eq!(report.hook_change, Some(HookChange::Added));
        assert_eq!(settings.current()["hooks"]["Stop"][0]["hooks"][0]["command"], CMD);
        assert!(use_case.status().await.installed());
    }

    #[tokio::test]
    async fn install_twice_updates_in_place() {
        let settings = MemorySettings::new(Some(json!({ "model": "opus" })));
        let use_case = InstallUseCase::new(MemoryConfig::default(), settings.clone());

        use_case.install(CMD, false).await.unwrap();
        let second = use_case.install(CMD, false).await.unwrap();

        assert!(!second.config_created);
        assert!(second.backup.is_some());
        assert_eq!(second.hook_change, Some(HookChange::Updated));
        assert_eq!(settings.current()["hooks"]["Stop"].as_array().unwrap().len(), 1);
        assert_eq!(settings.current()["model"], "opus");
    }

    #[tokio::test]
    async fn install_skip_hooks_leaves_settings_untouched() {
        let settings = MemorySettings::new(None);
        let use_case = InstallUseCase::new(MemoryConfig::default(), settings.clone());

        let report = use_case.install(CMD, true).await.unwrap();

        assert!(report.config_created);
        assert!(report.hook_change.is_none());
        assert_eq!(*settings.saves.lock().unwrap(), 0);

        let status = use_case.status().await;
        assert!(status.has_config);
        assert!(!status.has_hook);
        assert!(!status.installed());
    }

    #[tokio::test]
    async fn install_rejects_malformed_settings() {
        let settings = MemorySettings::new(Some(json!({ "hooks": { "Stop": {} } })));
        let use_case = InstallUseCase::new(MemoryConfig::default(), settings.clone());

        let err = use_case.install(CMD, false).await.unwrap_err();
        assert!(matches!(err, InstallError::Settings(_)));
        assert_eq!(*settings.saves.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn uninstall_removes_hook_and_config() {
        let config = MemoryConfig::default();
        let settings = MemorySettings::new(Some(json!({ "model": "opus" })));
        let use_case = InstallUseCase::new(config.clone(), settings.clone());
        use_case.install(CMD, false).await.unwrap();

        let report = use_case.uninstall(false).await.unwrap();

        assert_eq!(report.hooks_removed, 1);
        assert!(report.config_removed);
        assert_eq!(settings.current(), json!({ "model": "opus" }));
        assert!(!config.exists());
    }

    #[tokio::test]
    async fn uninstall_keep_config() {
        let config = MemoryConfig::default();
        let use_case = InstallUseCase::new(config.clone(), MemorySettings::new(None));
        use_case.install(CMD, false).await.unwrap();

        let report = use_case.uninstall(true).await.unwrap();

        assert!(!report.config_removed);
        assert!(config.exists());
    }

    #[tokio::test]
    async fn uninstall_without_hook_does_not_rewrite_settings() {
        let settings = MemorySettings::new(Some(json!({ "theme": "dark" })));
        let use_case = InstallUseCase::new(MemoryConfig::default(), settings.clone());

        let report = use_case.uninstall(true).await.unwrap();

        assert_eq!(report.hooks_removed, 0);
        assert_eq!(*settings.saves.lock().unwrap(), 0);
    }
}
