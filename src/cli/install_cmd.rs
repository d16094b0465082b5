//! Install, uninstall and status handlers

use crate::application::ports::{ConfigStore, HookSettingsStore};
use crate::application::InstallUseCase;
use crate::domain::error::InstallError;
use crate::domain::hooks::{hook_command, HookChange};

use super::presenter::Presenter;

/// Command line the Stop hook runs, pointing at this executable
pub fn current_hook_command() -> Result<String, InstallError> {
    let exe = std::env::current_exe()
        .and_then(|p| p.canonicalize())
        .map_err(|e| InstallError::ExecutableNotFound(e.to_string()))?;
    Ok(hook_command(&exe))
}

/// Handle `install`
pub async fn handle_install<C, H>(
    use_case: &InstallUseCase<C, H>,
    settings_path: &str,
    skip_hooks: bool,
    presenter: &Presenter,
) -> Result<(), InstallError>
where
    C: ConfigStore,
    H: HookSettingsStore,
{
    let command = current_hook_command()?;
    let report = use_case.install(&command, skip_hooks).await?;

    if report.config_created {
        presenter.success("Default config written");
    } else {
        presenter.info("Existing config kept");
    }
    if let Some(backup) = report.backup {
        presenter.info(&format!("Settings backed up to {}", backup.display()));
    }
    match report.hook_change {
        Some(HookChange::Added) => presenter.success(&format!("Stop hook added to {}", settings_path)),
        Some(HookChange::Updated) => {
            presenter.success(&format!("Stop hook updated in {}", settings_path))
        }
        None => presenter.warn("Hook installation skipped"),
    }
    presenter.info("Run 'ccnotify test' to check notifications and sound");

    Ok(())
}

/// Handle `uninstall`
pub async fn handle_uninstall<C, H>(
    use_case: &InstallUseCase<C, H>,
    keep_config: bool,
    presenter: &Presenter,
) -> Result<(), InstallError>
where
    C: ConfigStore,
    H: HookSettingsStore,
{
    let report = use_case.uninstall(keep_config).await?;

    if report.hooks_removed > 0 {
        presenter.success(&format!("Removed {} Stop hook command(s)", report.hooks_removed));
    } else {
        presenter.info("No Stop hook found");
    }
    if report.config_removed {
        presenter.success("Config directory removed");
    } else if keep_config {
        presenter.info("Config kept");
    }

    Ok(())
}

/// Handle `status`
pub async fn handle_status<C, H>(use_case: &InstallUseCase<C, H>, presenter: &Presenter)
where
    C: ConfigStore,
    H: HookSettingsStore,
{
    let status = use_case.status().await;

    presenter.key_value("hook", yes_no(status.has_hook));
    presenter.key_value("config", yes_no(status.has_config));
    presenter.key_value("installed", yes_no(status.installed()));
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
