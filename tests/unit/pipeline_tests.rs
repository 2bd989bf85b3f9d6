/*!
 * Tests for the generate -> translate pipeline
 */

use ytsubgen::backends::MockBackend;
use ytsubgen::errors::BackendError;
use ytsubgen::pipeline::SubtitlePipeline;
use ytsubgen::subtitle_processor::SubtitleDocument;
use ytsubgen::translation::PassthroughTranslator;

use crate::common::SAMPLE_SRT;
use crate::common::mock_engines::{
    FailingTranslator, RecordingBackend, RenumberingTranslator, TaggingTranslator,
};

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Test that generation failure is terminal for the pipeline
#[tokio::test]
async fn test_run_withFailingBackend_shouldReturnError() {
    let pipeline = SubtitlePipeline::new(MockBackend::failing(), PassthroughTranslator::new());

    let result = pipeline.run(VIDEO_URL, Some("en")).await;

    assert!(matches!(result, Err(BackendError::Failed(_))));
}

/// Test that an empty payload with a success signal is a failure
#[tokio::test]
async fn test_run_withEmptySuccessPayload_shouldReturnError() {
    let pipeline = SubtitlePipeline::new(MockBackend::empty(), PassthroughTranslator::new());

    let result = pipeline.run(VIDEO_URL, None).await;

    assert!(matches!(result, Err(BackendError::Failed(_))));
}

/// Test the no-target path: stage-1 output is returned verbatim
#[tokio::test]
async fn test_run_withNoTargetLanguage_shouldReturnOriginalVerbatim() {
    let backend = MockBackend::working().with_subtitles(SAMPLE_SRT);
    let pipeline = SubtitlePipeline::new(backend, TaggingTranslator);

    let subtitles = pipeline.run(VIDEO_URL, None).await.unwrap();

    assert_eq!(subtitles, SAMPLE_SRT);
}

/// Test that translation rewrites text while preserving structure
#[tokio::test]
async fn test_run_withTaggingTranslator_shouldPreserveStructure() {
    let backend = MockBackend::working().with_subtitles(SAMPLE_SRT);
    let pipeline = SubtitlePipeline::new(backend, TaggingTranslator);

    let translated = pipeline.run(VIDEO_URL, Some("fr")).await.unwrap();

    let original_document = SubtitleDocument::from_srt(SAMPLE_SRT).unwrap();
    let translated_document = SubtitleDocument::from_srt(&translated).unwrap();

    assert_eq!(original_document.structure(), translated_document.structure());
    assert!(translated_document.entries.iter().all(|e| e.text.starts_with("[fr] ")));
}

/// Test that translation failure falls back to the stage-1 document
#[tokio::test]
async fn test_run_withFailingTranslator_shouldFallBackToOriginal() {
    let backend = MockBackend::working().with_subtitles(SAMPLE_SRT);
    let pipeline = SubtitlePipeline::new(backend, FailingTranslator);

    let subtitles = pipeline.run(VIDEO_URL, Some("fr")).await.unwrap();

    assert_eq!(subtitles, SAMPLE_SRT);
}

/// Test that a structure-violating engine is treated as a failed translation
#[tokio::test]
async fn test_run_withRenumberingTranslator_shouldFallBackToOriginal() {
    let backend = MockBackend::working().with_subtitles(SAMPLE_SRT);
    let pipeline = SubtitlePipeline::new(backend, RenumberingTranslator);

    let subtitles = pipeline.run(VIDEO_URL, Some("fr")).await.unwrap();

    assert_eq!(subtitles, SAMPLE_SRT);
}

/// Test that unparsable stage-1 output survives as the fallback
#[tokio::test]
async fn test_run_withUnparsablePayload_shouldFallBackToOriginal() {
    let backend = MockBackend::working().with_subtitles("not srt at all");
    let pipeline = SubtitlePipeline::new(backend, TaggingTranslator);

    let subtitles = pipeline.run(VIDEO_URL, Some("fr")).await.unwrap();

    assert_eq!(subtitles, "not srt at all");
}

/// Test the same-language skip against the declared source language
#[tokio::test]
async fn test_run_withMatchingSourceLanguage_shouldSkipTranslation() {
    let backend = MockBackend::working().with_subtitles(SAMPLE_SRT);
    let pipeline = SubtitlePipeline::new(backend, TaggingTranslator).with_source_language("en");

    let subtitles = pipeline.run(VIDEO_URL, Some("en")).await.unwrap();

    // Byte-identical: the translate stage never ran
    assert_eq!(subtitles, SAMPLE_SRT);
}

/// Test that the target language is passed through to the backend as a hint
#[tokio::test]
async fn test_run_withTargetLanguage_shouldHintBackend() {
    let backend = RecordingBackend::new(SAMPLE_SRT);
    let calls = backend.calls.clone();
    let pipeline = SubtitlePipeline::new(backend, PassthroughTranslator::new());

    pipeline.run(VIDEO_URL, Some("zh-Hant")).await.unwrap();

    let recorded = calls.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, VIDEO_URL);
    assert_eq!(recorded[0].1.as_deref(), Some("zh-Hant"));
}
