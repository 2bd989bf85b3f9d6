/*!
 * Translation stage contract and stand-in engine.
 *
 * The pipeline only depends on the `Translator` trait; the real machine
 * translation engine is an external collaborator and this crate ships a
 * passthrough stand-in in its place. Implementations must preserve cue
 * numbering and timing exactly — only the text lines may change.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::TranslationError;
use crate::subtitle_processor::SubtitleDocument;

/// Common trait for subtitle translation engines
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Produce a new document with cue text in the target language.
    ///
    /// The input document is never mutated; the pipeline keeps it for
    /// fallback when this stage fails. Cue numbers and timestamps in the
    /// returned document must equal the input's.
    async fn translate(
        &self,
        document: &SubtitleDocument,
        target_language: &str,
    ) -> Result<SubtitleDocument, TranslationError>;
}

/// Stand-in engine that returns the document unchanged.
///
/// Wiring in a real engine means replacing this implementation; the
/// pipeline's fallback semantics do not change.
#[derive(Debug, Default, Clone)]
pub struct PassthroughTranslator;

impl PassthroughTranslator {
    /// Create a new passthrough translator
    pub fn new() -> Self {
        PassthroughTranslator
    }
}

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(
        &self,
        document: &SubtitleDocument,
        _target_language: &str,
    ) -> Result<SubtitleDocument, TranslationError> {
        Ok(document.clone())
    }
}
