//! ccnotify CLI entry point

use std::process::ExitCode;

use clap::Parser;

use ccnotify::application::InstallUseCase;
use ccnotify::application::ports::HookSettingsStore;
use ccnotify::cli::{
    app::{list_sounds, run_hook, run_test, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    install_cmd::{handle_install, handle_status, handle_uninstall},
    logs_cmd::handle_logs,
    presenter::Presenter,
};
use ccnotify::domain::platform::Platform;
use ccnotify::infrastructure::{init_logging, log_path, ClaudeSettingsFile, JsonConfigStore};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Logs { .. }) {
        init_logging(Platform::detect());
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            Presenter::new().error(&format!("Failed to start runtime: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let code = runtime.block_on(run(cli));

    // A timed-out notification may still be blocking a worker
    runtime.shutdown_background();
    code
}

async fn run(cli: Cli) -> ExitCode {
    let mut presenter = Presenter::new();

    match cli.command {
        Commands::Run { title, message } => run_hook(title, message).await,
        Commands::Test => run_test(&mut presenter).await,
        Commands::Install { skip_hooks } => {
            let settings = ClaudeSettingsFile::new();
            let settings_path = settings.path().display().to_string();
            let use_case = InstallUseCase::new(JsonConfigStore::new(), settings);
            match handle_install(&use_case, &settings_path, skip_hooks, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("Install failed: {}", e);
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Commands::Uninstall { keep_config } => {
            let use_case = InstallUseCase::new(JsonConfigStore::new(), ClaudeSettingsFile::new());
            match handle_uninstall(&use_case, keep_config, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("Uninstall failed: {}", e);
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Commands::Status => {
            let use_case = InstallUseCase::new(JsonConfigStore::new(), ClaudeSettingsFile::new());
            handle_status(&use_case, &presenter).await;
            ExitCode::SUCCESS
        }
        Commands::Config { action } => {
            let store = JsonConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Sounds => list_sounds(&presenter),
        Commands::Logs {
            lines,
            follow,
            clear,
        } => {
            if let Err(e) = handle_logs(&log_path(), lines, follow, clear, &presenter).await {
                presenter.error(&format!("Failed to read log: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
    }
}
