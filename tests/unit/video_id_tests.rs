/*!
 * Tests for video id resolution
 */

use ytsubgen::video_id::VideoId;

/// Test resolution of the standard watch URL form
#[test]
fn test_from_url_withWatchForm_shouldResolveId() {
    let id = VideoId::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

/// Test that trailing tracking parameters are truncated
#[test]
fn test_from_url_withTrackingParameters_shouldTruncateAtSeparator() {
    let id = VideoId::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=43s").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");

    let id = VideoId::from_url("https://youtu.be/dQw4w9WgXcQ?si=abcdef").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");

    let id = VideoId::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=90").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

/// Test resolution of the short-link form
#[test]
fn test_from_url_withShortLink_shouldResolveId() {
    let id = VideoId::from_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

/// Test resolution of the embed and legacy forms
#[test]
fn test_from_url_withEmbedAndLegacyForms_shouldResolveId() {
    let id = VideoId::from_url("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");

    let id = VideoId::from_url("https://www.youtube.com/v/dQw4w9WgXcQ").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");

    let id = VideoId::from_url("https://www.youtube.com/u/w/dQw4w9WgXcQ").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

/// Test rejection of inputs without an identifier marker
#[test]
fn test_from_url_withNoMarker_shouldReturnNone() {
    assert!(VideoId::from_url("not a url").is_none());
    assert!(VideoId::from_url("").is_none());
    assert!(VideoId::from_url("https://example.com/some/path").is_none());
}

/// Test that any candidate length other than 11 is not found
#[test]
fn test_from_url_withWrongLengthCandidate_shouldReturnNone() {
    // Too short
    assert!(VideoId::from_url("https://www.youtube.com/watch?v=shortid").is_none());

    // Too long
    assert!(VideoId::from_url("https://youtu.be/dQw4w9WgXcQtoolong").is_none());

    // Empty candidate
    assert!(VideoId::from_url("https://www.youtube.com/watch?v=").is_none());
    assert!(VideoId::from_url("https://youtu.be/").is_none());
}

/// Test the canonical watch URL accessor
#[test]
fn test_watch_url_withResolvedId_shouldBuildCanonicalUrl() {
    let id = VideoId::from_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
    assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(id.to_string(), "dQw4w9WgXcQ");
}
