/*!
 * Error types for the ytsubgen application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use serde::Serialize;
use thiserror::Error;

/// Classification of failures at the orchestration boundary.
///
/// Every failure leaving `Controller::process` carries exactly one of these
/// kinds. Translation failure is deliberately absent: the pipeline absorbs it
/// by falling back to the original-language document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request URL was missing, empty, or did not resolve to a video id
    InvalidInput,

    /// The watch page could not be fetched at all
    MetadataUnavailable,

    /// The generation worker produced no usable subtitles
    GenerationFailed,

    /// Anything that escaped the stages above
    InternalError,
}

impl ErrorKind {
    /// Single human-readable message shown to the end user for this kind
    pub fn user_message(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid YouTube URL.",
            Self::MetadataUnavailable => "Could not fetch video information.",
            Self::GenerationFailed => "Failed to generate subtitles.",
            Self::InternalError => "Failed to process request.",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

/// Diagnostics captured from a failed worker run.
///
/// Attached to the failure outcome for developer inspection; clients must
/// never need it for correct behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendDiagnostics {
    /// Process exit code, if the worker exited at all
    pub exit_code: Option<i32>,

    /// First characters of the success channel
    pub stdout_preview: String,

    /// Total byte length of the success channel
    pub stdout_length: usize,

    /// Full failure channel output
    pub stderr: String,
}

/// Errors from the out-of-process generation worker
#[derive(Error, Debug)]
pub enum BackendError {
    /// The worker process could not be launched
    #[error("failed to launch worker process: {0}")]
    Spawn(String),

    /// The worker did not complete within the configured deadline
    #[error("worker timed out after {seconds}s")]
    Timeout {
        /// Configured deadline in seconds
        seconds: u64,
    },

    /// The worker ran but produced no usable subtitles
    #[error("worker produced no usable subtitles (exit code {:?})", .0.exit_code)]
    Failed(BackendDiagnostics),
}

impl BackendError {
    /// Diagnostics for the failure outcome, when the worker ran far enough
    /// to produce any
    pub fn diagnostics(&self) -> Option<&BackendDiagnostics> {
        match self {
            Self::Failed(diagnostics) => Some(diagnostics),
            _ => None,
        }
    }
}

/// Errors raised by the translation stage.
///
/// These never cross the pipeline boundary: the pipeline catches them and
/// returns the untranslated stage-1 document instead.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The generated payload did not parse as SRT, so there is nothing to translate
    #[error("generated subtitles did not parse as SRT: {0}")]
    Malformed(String),

    /// The translation engine itself failed
    #[error("translation engine error: {0}")]
    Engine(String),
}

/// Errors fetching the watch page
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The outbound request failed or timed out
    #[error("failed to fetch watch page: {0}")]
    Fetch(#[from] reqwest::Error),
}
