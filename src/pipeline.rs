use log::{debug, warn};

use crate::backends::GenerationBackend;
use crate::errors::{BackendDiagnostics, BackendError, TranslationError};
use crate::language_utils;
use crate::subtitle_processor::SubtitleDocument;
use crate::translation::Translator;

// @module: Generate -> translate pipeline

/// Two-stage subtitle pipeline.
///
/// Stage 1 asks the generation backend for an original-language document;
/// failure there is terminal. Stage 2 translates the cue text when a target
/// language was requested and differs from the source; failure there is
/// absorbed and the stage-1 document is returned instead — an untranslated
/// subtitle beats no subtitle.
#[derive(Debug)]
pub struct SubtitlePipeline<B, T> {
    /// Generation collaborator
    backend: B,

    /// Translation collaborator
    translator: T,

    /// Language the backend is expected to produce, when known
    source_language: Option<String>,
}

impl<B: GenerationBackend, T: Translator> SubtitlePipeline<B, T> {
    /// Create a pipeline over the given collaborators
    pub fn new(backend: B, translator: T) -> Self {
        SubtitlePipeline {
            backend,
            translator,
            source_language: None,
        }
    }

    /// Declare the language the backend produces, enabling the
    /// same-language skip
    pub fn with_source_language(mut self, code: impl Into<String>) -> Self {
        self.source_language = Some(code.into());
        self
    }

    /// Run the pipeline for a video.
    ///
    /// The target language is passed through to the backend as a hint
    /// (workers that fetch platform transcripts can pick the right one),
    /// and the translate stage still runs on top unless the target matches
    /// the declared source language.
    pub async fn run(
        &self,
        video_url: &str,
        target_language: Option<&str>,
    ) -> Result<String, BackendError> {
        let original = self.backend.run(video_url, target_language).await?;

        // An empty success payload is a failure, whatever the backend said
        if original.trim().is_empty() {
            return Err(BackendError::Failed(BackendDiagnostics {
                exit_code: Some(0),
                stdout_preview: String::new(),
                stdout_length: original.len(),
                stderr: String::new(),
            }));
        }

        let Some(target) = target_language else {
            return Ok(original);
        };

        if let Some(source) = &self.source_language {
            if language_utils::codes_match(source, target) {
                debug!("Target language {} matches source, skipping translation", target);
                return Ok(original);
            }
        }

        match self.translate_stage(&original, target).await {
            Ok(translated) => Ok(translated),
            Err(e) => {
                warn!("Translation to {} failed, returning original-language subtitles: {}", target, e);
                Ok(original)
            }
        }
    }

    /// Parse, translate, re-render.
    ///
    /// The original string stays untouched throughout so the caller's
    /// fallback is verbatim stage-1 output.
    async fn translate_stage(&self, original: &str, target: &str) -> Result<String, TranslationError> {
        let document = SubtitleDocument::from_srt(original)
            .map_err(|e| TranslationError::Malformed(e.to_string()))?;

        let translated = self.translator.translate(&document, target).await?;

        // Structural drift here is a contract violation by the engine, not
        // something to silently pass downstream
        if translated.structure() != document.structure() {
            return Err(TranslationError::Engine(
                "engine altered cue numbering or timing".to_string(),
            ));
        }

        Ok(translated.to_srt())
    }
}
