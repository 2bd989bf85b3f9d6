/*!
 * # ytsubgen - YouTube subtitle generation and translation
 *
 * A Rust library that turns a YouTube URL and a target language into a
 * SubRip subtitle track.
 *
 * ## Features
 *
 * - Resolve the 11-character video id out of any common URL shape
 * - Scrape the public watch page for the title and available caption languages
 * - Drive an out-of-process generation worker to produce SRT text
 * - Optionally translate the generated cues, falling back to the original
 *   document when translation fails
 * - Fold every failure mode into a single structured outcome at the facade
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `video_id`: URL-to-identifier resolution
 * - `metadata_scraper`: Watch-page title and caption-language extraction
 * - `subtitle_processor`: SubRip parsing and rendering
 * - `backends`: Generation worker boundary:
 *   - `backends::script`: Spawns the configured worker process
 *   - `backends::mock`: Scripted behaviors for tests
 * - `translation`: Translation stage contract and stand-in engine
 * - `pipeline`: Generate -> translate sequencing with fallback
 * - `app_controller`: Orchestration facade and outcome types
 * - `app_config`: Configuration management
 * - `language_utils`: Caption language tag utilities
 * - `file_utils`: Subtitle file output
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod backends;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod metadata_scraper;
pub mod pipeline;
pub mod subtitle_processor;
pub mod translation;
pub mod video_id;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, PipelineOutcome, ProcessFailure, ProcessedVideo, SubtitleRequest};
pub use backends::{GenerationBackend, MockBackend, ScriptBackend};
pub use errors::{BackendDiagnostics, BackendError, ErrorKind, ScrapeError, TranslationError};
pub use metadata_scraper::{LanguageOption, MetadataScraper, VideoMetadata};
pub use pipeline::SubtitlePipeline;
pub use subtitle_processor::{SubtitleDocument, SubtitleEntry};
pub use translation::{PassthroughTranslator, Translator};
pub use video_id::VideoId;
