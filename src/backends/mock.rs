/*!
 * Mock generation backend for testing.
 *
 * Simulates the out-of-process worker without spawning anything:
 * - `MockBackend::working()` - Always succeeds with a canned document
 * - `MockBackend::failing()` - Always fails with diagnostics
 * - `MockBackend::empty()` - Succeeds at the process level but emits nothing
 */

// Allow dead code - the binary never drives the mock
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::backends::GenerationBackend;
use crate::errors::{BackendDiagnostics, BackendError};

/// Canned document returned by the working mock
pub const DEMO_SUBTITLES: &str = "1
00:00:00,000 --> 00:00:03,000
歡迎來到這個示範影片

2
00:00:03,500 --> 00:00:07,000
這是一個自動生成字幕的示範

3
00:00:07,500 --> 00:00:12,000
實際應用中，我們會使用 AI 服務來處理真實的影片內容

4
00:00:12,500 --> 00:00:18,000
您可以將這個系統整合到您的網站中
";

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the canned document
    Working,
    /// Always fails with diagnostics
    Failing,
    /// Exits cleanly but emits an empty payload
    Empty,
    /// Simulates a slow worker (for timeout testing)
    Slow { delay_ms: u64 },
}

/// Mock backend for testing pipeline behavior
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Payload override for the working mode
    subtitles: Option<String>,
    /// Number of invocations so far
    call_count: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            subtitles: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock backend that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock backend that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that emits an empty payload with a success signal
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock that sleeps before answering
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Replace the canned payload
    pub fn with_subtitles(mut self, subtitles: impl Into<String>) -> Self {
        self.subtitles = Some(subtitles.into());
        self
    }

    /// Number of times the backend has been invoked
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn payload(&self) -> String {
        self.subtitles
            .clone()
            .unwrap_or_else(|| DEMO_SUBTITLES.to_string())
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn run(&self, _video_url: &str, _target_language: Option<&str>) -> Result<String, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(self.payload()),
            MockBehavior::Failing => Err(BackendError::Failed(BackendDiagnostics {
                exit_code: Some(1),
                stdout_preview: String::new(),
                stdout_length: 0,
                stderr: "[ERROR] no transcript available".to_string(),
            })),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(self.payload())
            }
        }
    }
}
