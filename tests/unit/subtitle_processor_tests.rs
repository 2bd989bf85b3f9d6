/*!
 * Tests for SubRip parsing and rendering
 */

use ytsubgen::subtitle_processor::{SubtitleDocument, SubtitleEntry};

use crate::common::SAMPLE_SRT;

/// Test parsing of a well-formed document
#[test]
fn test_from_srt_withWellFormedContent_shouldParseAllCues() {
    let document = SubtitleDocument::from_srt(SAMPLE_SRT).unwrap();

    assert_eq!(document.len(), 3);
    assert_eq!(document.entries[0].seq_num, 1);
    assert_eq!(document.entries[0].start_time_ms, 0);
    assert_eq!(document.entries[0].end_time_ms, 3_000);
    assert_eq!(document.entries[0].text, "Welcome to this demo video");
    assert_eq!(document.entries[2].start_time_ms, 7_500);
    assert_eq!(document.entries[2].end_time_ms, 12_000);
}

/// Test that upstream cue numbering is preserved, not rewritten
#[test]
fn test_from_srt_withNonSequentialNumbering_shouldPreserveNumbers() {
    let content = "7
00:00:01,000 --> 00:00:02,000
first

3
00:00:05,000 --> 00:00:06,000
second

";
    let document = SubtitleDocument::from_srt(content).unwrap();

    let numbers: Vec<usize> = document.entries.iter().map(|e| e.seq_num).collect();
    assert_eq!(numbers, vec![7, 3]);
}

/// Test multi-line cue text
#[test]
fn test_from_srt_withMultiLineCue_shouldJoinTextLines() {
    let content = "1
00:00:01,000 --> 00:00:04,000
line one
line two

";
    let document = SubtitleDocument::from_srt(content).unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(document.entries[0].text, "line one\nline two");
}

/// Test that malformed cues are skipped without failing the document
#[test]
fn test_from_srt_withInvalidCue_shouldSkipItAndKeepOthers() {
    let content = "1
00:00:05,000 --> 00:00:02,000
end before start

2
00:00:06,000 --> 00:00:08,000
valid cue

";
    let document = SubtitleDocument::from_srt(content).unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(document.entries[0].seq_num, 2);
}

/// Test that content with no valid cues is an error
#[test]
fn test_from_srt_withNoValidCues_shouldReturnError() {
    assert!(SubtitleDocument::from_srt("").is_err());
    assert!(SubtitleDocument::from_srt("just some text\nwithout structure").is_err());
}

/// Test timestamp formatting
#[test]
fn test_format_timestamp_withVariousValues_shouldUseSrtFormat() {
    assert_eq!(SubtitleEntry::format_timestamp(0), "00:00:00,000");
    assert_eq!(SubtitleEntry::format_timestamp(3_500), "00:00:03,500");
    assert_eq!(SubtitleEntry::format_timestamp(61_001), "00:01:01,001");
    assert_eq!(SubtitleEntry::format_timestamp(3_600_000 + 23 * 60_000 + 45_000 + 678), "01:23:45,678");
}

/// Test that parse and render round-trip preserves the document
#[test]
fn test_to_srt_withParsedDocument_shouldRoundTrip() {
    let document = SubtitleDocument::from_srt(SAMPLE_SRT).unwrap();
    let rendered = document.to_srt();

    assert_eq!(rendered, SAMPLE_SRT);
}

/// Test the structure accessor used by the translation invariant
#[test]
fn test_structure_withTextRewrite_shouldBeUnchanged() {
    let document = SubtitleDocument::from_srt(SAMPLE_SRT).unwrap();

    let rewritten = SubtitleDocument {
        entries: document
            .entries
            .iter()
            .map(|entry| entry.with_text("different".to_string()))
            .collect(),
    };

    assert_eq!(document.structure(), rewritten.structure());
    assert_ne!(document, rewritten);
}
