//! Hook and test runners

use std::env;
use std::process::ExitCode;

use chrono::Local;

use crate::application::ports::{ConfigStore, Notifier, SoundPlayer};
use crate::application::{DispatchSettings, DispatchUseCase};
use crate::domain::config::AppConfig;
use crate::domain::dispatch::DispatchReport;
use crate::domain::notification::NotificationRequest;
use crate::domain::platform::Platform;
use crate::domain::sound::SoundLibrary;
use crate::infrastructure::{
    create_notifier, create_sound_player, log_path, Assets, JsonConfigStore, SystemCommandRunner,
};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Working directory passed by the assistant to hook commands
pub const WORK_DIR_ENV: &str = "CLAUDE_PWD";

const TEST_TITLE: &str = "Claude Code Notify";
const TEST_MESSAGE: &str = "Test notification successful!";

/// Load the config file merged over defaults.
///
/// Read or parse failures fall back to defaults.
pub async fn load_config<S: ConfigStore>(store: &S) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Using default config: {}", e);
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config)
}

/// Snapshot the settings a dispatch needs
pub fn dispatch_settings(config: &AppConfig, assets: &Assets) -> DispatchSettings {
    DispatchSettings {
        notification: config.notification_settings(),
        sound: config.sound_settings(),
        library: SoundLibrary::new(assets.sounds_dir()),
    }
}

/// Local time in the notification's format
pub fn current_time() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `$CLAUDE_PWD`, then the current directory
pub fn work_dir() -> Option<String> {
    env::var(WORK_DIR_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            env::current_dir()
                .ok()
                .map(|p| p.to_string_lossy().into_owned())
        })
}

fn create_use_case(
    platform: Platform,
    assets: &Assets,
) -> DispatchUseCase<Box<dyn Notifier>, Box<dyn SoundPlayer>> {
    let runner = SystemCommandRunner::new();
    DispatchUseCase::new(
        create_notifier(platform, assets.icon(), runner),
        create_sound_player(platform, runner),
    )
}

async fn dispatch(request: NotificationRequest) -> DispatchReport {
    let platform = Platform::detect();
    log::info!("Platform detected: {}", platform);

    let config = load_config(&JsonConfigStore::new()).await;
    let assets = Assets::locate();
    log::debug!("Assets directory: {}", assets.root().display());

    let settings = dispatch_settings(&config, &assets);
    create_use_case(platform, &assets)
        .execute(&request, None, &settings)
        .await
}

/// Hook entry point. Never fails the hook.
pub async fn run_hook(title: Option<String>, message: Option<String>) -> ExitCode {
    log::info!("=== Hook run started ===");

    let mut request = NotificationRequest::new().with_time(current_time());
    if let Some(dir) = work_dir() {
        request = request.with_work_dir(dir);
    }
    if let Some(title) = title {
        request = request.with_title(title);
    }
    if let Some(message) = message {
        request = request.with_message(message);
    }

    let report = dispatch(request).await;
    log::info!(
        "=== Hook run finished: notify={} sound={} ===",
        report.notify.succeeded(),
        report.sound.succeeded()
    );

    ExitCode::from(EXIT_SUCCESS)
}

/// Send a test notification and report each channel
pub async fn run_test(presenter: &mut Presenter) -> ExitCode {
    log::info!("Test notification requested");

    let mut request = NotificationRequest::new()
        .with_title(TEST_TITLE)
        .with_message(TEST_MESSAGE)
        .with_time(current_time());
    if let Some(dir) = work_dir() {
        request = request.with_work_dir(dir);
    }

    presenter.start_spinner("Sending test notification...");
    let report = dispatch(request).await;
    presenter.stop_spinner();

    for outcome in report.outcomes() {
        presenter.outcome(outcome);
    }
    presenter.info(&format!("Log file: {}", log_path().display()));

    if report.outcomes().iter().any(|o| o.error_detail().is_some()) {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// List built-in and user-provided sounds
pub fn list_sounds(presenter: &Presenter) -> ExitCode {
    let library = SoundLibrary::new(Assets::locate().sounds_dir());
    for name in library.available() {
        presenter.output(&name);
    }
    presenter.info(&format!(
        "Sounds directory: {}",
        library.sounds_dir().display()
    ));
    ExitCode::from(EXIT_SUCCESS)
}
