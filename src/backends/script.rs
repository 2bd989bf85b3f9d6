use async_trait::async_trait;
use log::{debug, error};
use std::time::Duration;
use tokio::process::Command;

use crate::app_config::BackendConfig;
use crate::backends::GenerationBackend;
use crate::errors::{BackendDiagnostics, BackendError};

/// Characters of stdout preserved in failure diagnostics
const STDOUT_PREVIEW_CHARS: usize = 300;

/// Backend that spawns an external worker process.
///
/// The worker is invoked as `<program> <args...> <video-url> [target-language]`
/// and is expected to write SRT text to stdout and diagnostics to stderr,
/// exiting 0 on success. An empty stdout is a failure even on a clean exit.
#[derive(Debug, Clone)]
pub struct ScriptBackend {
    /// Program used to launch the worker
    program: String,

    /// Arguments placed before the video URL
    leading_args: Vec<String>,

    /// Seconds to wait before killing the worker
    timeout_secs: u64,
}

impl ScriptBackend {
    /// Create a backend for the given worker command
    pub fn new(program: impl Into<String>, leading_args: Vec<String>, timeout_secs: u64) -> Self {
        ScriptBackend {
            program: program.into(),
            leading_args,
            timeout_secs,
        }
    }

    /// Create a backend from the application configuration
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone(), config.timeout_secs)
    }

    /// First characters of the success channel, for diagnostics
    fn preview(stdout: &str) -> String {
        stdout.chars().take(STDOUT_PREVIEW_CHARS).collect()
    }
}

#[async_trait]
impl GenerationBackend for ScriptBackend {
    async fn run(&self, video_url: &str, target_language: Option<&str>) -> Result<String, BackendError> {
        let mut command = Command::new(&self.program);
        command.args(&self.leading_args);
        command.arg(video_url);
        if let Some(language) = target_language {
            command.arg(language);
        }
        command.kill_on_drop(true);

        debug!("Launching worker: {} {:?}", self.program, self.leading_args);

        // A stuck worker must not hang the request indefinitely
        let output_future = command.output();
        let timeout_duration = Duration::from_secs(self.timeout_secs);
        let output = tokio::select! {
            result = output_future => {
                result.map_err(|e| BackendError::Spawn(e.to_string()))?
            },
            _ = tokio::time::sleep(timeout_duration) => {
                error!("Worker timed out after {}s", self.timeout_secs);
                return Err(BackendError::Timeout { seconds: self.timeout_secs });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        debug!(
            "Worker exited with {:?}, {} bytes on stdout",
            output.status.code(),
            stdout.len()
        );

        // An empty payload counts as failure even with a success exit
        if output.status.success() && !stdout.trim().is_empty() {
            Ok(stdout)
        } else {
            Err(BackendError::Failed(BackendDiagnostics {
                exit_code: output.status.code(),
                stdout_preview: Self::preview(&stdout),
                stdout_length: stdout.len(),
                stderr,
            }))
        }
    }
}
