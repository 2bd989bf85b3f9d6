/*!
 * Generation backends for subtitle production.
 *
 * A backend is the out-of-process collaborator that turns a video URL into
 * SRT text. The pipeline only sees this trait, never process-spawning
 * details, so it can be tested with a scripted backend:
 * - `ScriptBackend`: spawns the configured worker command
 * - `MockBackend`: scripted behaviors for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::BackendError;

/// Common trait for subtitle generation backends
///
/// Implementations take the video URL and an optional target-language hint
/// and return the full SRT payload, or a structured error carrying whatever
/// diagnostics the worker produced.
#[async_trait]
pub trait GenerationBackend: Send + Sync + Debug {
    /// Produce SRT text for the given video
    ///
    /// # Arguments
    /// * `video_url` - Canonical watch URL of the video
    /// * `target_language` - Optional hint for workers that can pick a
    ///   transcript language themselves
    ///
    /// # Returns
    /// * `Result<String, BackendError>` - The SRT payload or a structured failure
    async fn run(&self, video_url: &str, target_language: Option<&str>) -> Result<String, BackendError>;
}

pub mod mock;
pub mod script;

pub use mock::{MockBackend, MockBehavior};
pub use script::ScriptBackend;
