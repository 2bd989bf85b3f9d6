use anyhow::Result;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app_config::Config;
use crate::backends::{GenerationBackend, ScriptBackend};
use crate::errors::{BackendDiagnostics, ErrorKind};
use crate::metadata_scraper::{LanguageOption, MetadataScraper, VideoMetadata};
use crate::pipeline::SubtitlePipeline;
use crate::translation::{PassthroughTranslator, Translator};
use crate::video_id::VideoId;

// @module: Orchestration facade

/// Inbound request from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubtitleRequest {
    /// Free-form video URL, required and non-empty
    pub url: String,

    /// Desired subtitle language, optional
    #[serde(default)]
    pub target_language: Option<String>,
}

impl SubtitleRequest {
    /// Convenience constructor for a request without a target language
    pub fn new(url: impl Into<String>) -> Self {
        SubtitleRequest {
            url: url.into(),
            target_language: None,
        }
    }

    /// Set the target language
    pub fn with_target_language(mut self, code: impl Into<String>) -> Self {
        self.target_language = Some(code.into());
        self
    }
}

/// Successful processing result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedVideo {
    /// Video title, possibly empty
    pub title: String,

    /// Final SRT payload
    pub subtitles: String,

    /// Caption languages the platform offers for this video
    pub languages: Vec<LanguageOption>,
}

/// Failed processing result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessFailure {
    /// Failure classification, for programmatic handling
    #[serde(skip)]
    pub kind: ErrorKind,

    /// Human-readable message
    #[serde(rename = "error")]
    pub message: String,

    /// Supplementary worker diagnostics, never required by clients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<BackendDiagnostics>,
}

impl ProcessFailure {
    /// Failure with the kind's standard message
    pub fn from_kind(kind: ErrorKind) -> Self {
        ProcessFailure {
            kind,
            message: kind.user_message().to_string(),
            debug: None,
        }
    }

    /// Attach worker diagnostics
    pub fn with_debug(mut self, debug: BackendDiagnostics) -> Self {
        self.debug = Some(debug);
        self
    }
}

/// The only value crossing the core/presentation boundary.
///
/// Serializes to the wire shape the front end consumes: success as
/// `{title, subtitles, languages}`, failure as `{error, debug?}`. Immutable
/// once produced; nothing upstream of the facade observes a raw error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PipelineOutcome {
    /// All required stages completed
    Success(ProcessedVideo),

    /// Some required stage failed
    Failure(ProcessFailure),
}

impl PipelineOutcome {
    /// Failure outcome for the given kind
    pub fn failure(kind: ErrorKind) -> Self {
        PipelineOutcome::Failure(ProcessFailure::from_kind(kind))
    }

    /// Whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineOutcome::Success(_))
    }

    /// The success payload, if any
    pub fn as_success(&self) -> Option<&ProcessedVideo> {
        match self {
            PipelineOutcome::Success(processed) => Some(processed),
            PipelineOutcome::Failure(_) => None,
        }
    }

    /// The failure payload, if any
    pub fn as_failure(&self) -> Option<&ProcessFailure> {
        match self {
            PipelineOutcome::Success(_) => None,
            PipelineOutcome::Failure(failure) => Some(failure),
        }
    }
}

/// Orchestration facade sequencing resolve -> scrape -> pipeline.
///
/// The sole boundary the presentation layer talks to. Each request works on
/// fresh local values; the controller holds no per-request state and can
/// serve any number of requests concurrently.
pub struct Controller<B, T> {
    /// Watch-page scraper
    scraper: MetadataScraper,

    /// Generate/translate pipeline
    pipeline: SubtitlePipeline<B, T>,
}

impl Controller<ScriptBackend, PassthroughTranslator> {
    /// Build the production controller from configuration: script-backed
    /// generation, stand-in translation
    pub fn from_config(config: &Config) -> Result<Self> {
        let scraper = MetadataScraper::new(
            &config.scrape.user_agent,
            Duration::from_secs(config.scrape.timeout_secs),
        )?;

        let backend = ScriptBackend::from_config(&config.backend);
        let mut pipeline = SubtitlePipeline::new(backend, PassthroughTranslator::new());
        if let Some(source) = &config.source_language {
            pipeline = pipeline.with_source_language(source.clone());
        }

        Ok(Controller::new(scraper, pipeline))
    }
}

impl<B: GenerationBackend, T: Translator> Controller<B, T> {
    /// Create a controller over the given collaborators
    pub fn new(scraper: MetadataScraper, pipeline: SubtitlePipeline<B, T>) -> Self {
        Controller { scraper, pipeline }
    }

    /// Process a subtitle request end to end.
    ///
    /// Never returns an error and never panics on bad input: every failure
    /// mode is folded into a `PipelineOutcome` here.
    pub async fn process(&self, request: SubtitleRequest) -> PipelineOutcome {
        match self.process_inner(&request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Unhandled error while processing request: {:#}", e);
                PipelineOutcome::failure(ErrorKind::InternalError)
            }
        }
    }

    /// Metadata-only lookup: title and caption languages, no generation
    pub async fn fetch_video_info(&self, url: &str) -> Result<VideoMetadata, ProcessFailure> {
        let Some(id) = Self::resolve(url) else {
            return Err(ProcessFailure::from_kind(ErrorKind::InvalidInput));
        };

        self.scraper.fetch(&id).await.map_err(|e| {
            warn!("Metadata scrape failed for {}: {}", id, e);
            ProcessFailure::from_kind(ErrorKind::MetadataUnavailable)
        })
    }

    async fn process_inner(&self, request: &SubtitleRequest) -> Result<PipelineOutcome> {
        let Some(id) = Self::resolve(&request.url) else {
            return Ok(PipelineOutcome::failure(ErrorKind::InvalidInput));
        };
        debug!("Resolved video id {}", id);

        let target_language = request
            .target_language
            .as_deref()
            .map(str::trim)
            .filter(|language| !language.is_empty());

        // Metadata and generation both only need the id; run them
        // concurrently and fold the results in stage order below.
        let watch_url = id.watch_url();
        let (metadata, generated) = tokio::join!(
            self.scraper.fetch(&id),
            self.pipeline.run(&watch_url, target_language),
        );

        // An unreachable page is a hard stop; a page without a title is not
        let metadata = match metadata {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Metadata scrape failed for {}: {}", id, e);
                return Ok(PipelineOutcome::failure(ErrorKind::MetadataUnavailable));
            }
        };

        let subtitles = match generated {
            Ok(subtitles) => subtitles,
            Err(e) => {
                warn!("Subtitle generation failed for {}: {}", id, e);
                let mut failure = ProcessFailure::from_kind(ErrorKind::GenerationFailed);
                if let Some(diagnostics) = e.diagnostics() {
                    failure = failure.with_debug(diagnostics.clone());
                }
                return Ok(PipelineOutcome::Failure(failure));
            }
        };

        info!(
            "Generated {} bytes of subtitles for {} ({})",
            subtitles.len(),
            id,
            if metadata.title.is_empty() { "untitled" } else { &metadata.title }
        );

        Ok(PipelineOutcome::Success(ProcessedVideo {
            title: metadata.title,
            subtitles,
            languages: metadata.languages,
        }))
    }

    /// Validate and resolve the request URL
    fn resolve(url: &str) -> Option<VideoId> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        VideoId::from_url(url)
    }
}
