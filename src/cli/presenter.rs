//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::dispatch::{ChannelStatus, DispatchOutcome};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list and status)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print one channel's dispatch outcome
    pub fn outcome(&self, outcome: &DispatchOutcome) {
        match outcome.status {
            ChannelStatus::Delivered { .. } => self.success(&outcome.to_string()),
            ChannelStatus::Skipped { .. } => self.warn(&outcome.to_string()),
            ChannelStatus::Failed { .. } | ChannelStatus::TimedOut => {
                self.error(&outcome.to_string())
            }
        }
    }

    /// Print a log line colored by its level tag
    pub fn log_line(&self, line: &str) {
        println!("{}", colorize_log_line(line));
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

fn colorize_log_line(line: &str) -> ColoredString {
    if line.contains("] [ERROR]") {
        line.red()
    } else if line.contains("] [WARN]") {
        line.yellow()
    } else if line.contains("] [INFO]") {
        line.normal()
    } else {
        line.dimmed()
    }
}
