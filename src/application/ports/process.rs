//! External process port interface

use async_trait::async_trait;
use thiserror::Error;

/// Process execution errors
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Failed to start {program}: {detail}")]
    SpawnFailed { program: String, detail: String },

    #[error("{program} failed: {detail}")]
    Failed { program: String, detail: String },
}

/// Port for probing and running external programs
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Check whether `program` can be found on PATH.
    async fn is_available(&self, program: &str) -> bool;

    /// Run `program` with `args` to completion.
    ///
    /// # Returns
    /// Ok(()) when the process exits successfully, error otherwise
    async fn run(&self, program: &str, args: &[String]) -> Result<(), CommandError>;
}

/// Blanket implementation for shared runners
#[async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<T> {
    async fn is_available(&self, program: &str) -> bool {
        self.as_ref().is_available(program).await
    }

    async fn run(&self, program: &str, args: &[String]) -> Result<(), CommandError> {
        self.as_ref().run(program, args).await
    }
}
