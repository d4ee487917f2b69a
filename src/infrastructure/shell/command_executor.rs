//! Command executor for running external programs
//!
//! Programs are spawned directly with an argument vector, never through a
//! shell, so URLs and package names are passed through untouched.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::generation::GenerationError;

/// Trait for executing external programs
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args` in the given working directory
    async fn execute(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<CommandResult, GenerationError>;
}

/// Result of command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Command executor backed by `tokio::process`
#[derive(Debug, Default)]
pub struct ProcessCommandExecutor;

impl ProcessCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for ProcessCommandExecutor {
    async fn execute(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<CommandResult, GenerationError> {
        tracing::debug!(%program, ?args, working_dir = %working_dir.display(), "Spawning command");

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                GenerationError::ExternalCommand(format!("Failed to run '{program}': {e}"))
            })?;

        Ok(CommandResult {
            // Killed by a signal
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Records invocations and answers with a canned result
#[cfg(test)]
pub struct MockCommandExecutor {
    pub result: CommandResult,
    pub calls: std::sync::Mutex<Vec<(String, Vec<String>)>>,
}

#[cfg(test)]
impl MockCommandExecutor {
    pub fn new(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            result: CommandResult {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl CommandExecutor for MockCommandExecutor {
    async fn execute(
        &self,
        program: &str,
        args: &[String],
        _working_dir: &Path,
    ) -> Result<CommandResult, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        Ok(self.result.clone())
    }
}
