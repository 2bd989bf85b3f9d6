use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// @module: Video identifier resolution

/// Length of every YouTube video identifier
const VIDEO_ID_LEN: usize = 11;

// @const: URL marker regex; the capture runs until the first '#', '&' or '?'
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|/embed/|watch\?v=)([^#&?]*)").unwrap()
});

/// An 11-character YouTube video identifier.
///
/// Only `VideoId::from_url` constructs one, so holding a `VideoId` means the
/// length invariant already holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Resolve a free-form URL string into a video id.
    ///
    /// Accepts the `watch?v=`, `youtu.be/`, `/v/`, `/embed/` and `/u/<letter>/`
    /// URL shapes. Anything after the id up to the first `#`, `&` or `?` is
    /// discarded; a candidate of any length other than 11 is treated as not
    /// found rather than a partial match. Pure and infallible: malformed or
    /// empty input yields `None`, never a panic.
    pub fn from_url(url: &str) -> Option<Self> {
        let captures = VIDEO_ID_REGEX.captures(url)?;
        let candidate = captures.get(1).map_or("", |m| m.as_str());

        if candidate.chars().count() == VIDEO_ID_LEN {
            Some(VideoId(candidate.to_string()))
        } else {
            None
        }
    }

    /// The raw 11-character id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch-page URL for this video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
