//! Command runner backed by tokio::process

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CommandError, CommandRunner};

/// Hide the console window PowerShell would otherwise flash
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Runs programs found on PATH
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(program: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        #[cfg(windows)]
        cmd.creation_flags(CREATE_NO_WINDOW);

        cmd
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn is_available(&self, program: &str) -> bool {
        let found = which::which(program).is_ok();
        log::debug!("Lookup {}: {}", program, if found { "found" } else { "missing" });
        found
    }

    async fn run(&self, program: &str, args: &[String]) -> Result<(), CommandError> {
        log::debug!("Running {} {:?}", program, args);

        let output = Self::command(program, args)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CommandError::NotFound(program.to_string())
                } else {
                    CommandError::SpawnFailed {
                        program: program.to_string(),
                        detail: e.to_string(),
                    }
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let detail = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}: {}", output.status, stderr)
            };
            return Err(CommandError::Failed {
                program: program.to_string(),
                detail,
            });
        }

        Ok(())
    }
}
