use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::errors::ScrapeError;
use crate::language_utils;
use crate::video_id::VideoId;

// @module: Watch-page metadata scraping

/// Browser-identifying user agent sent with the watch-page fetch.
///
/// The platform may reject or alter responses for non-browser-like requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36";

const DEFAULT_BASE_URL: &str = "https://www.youtube.com";

// @const: Document title element
static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<title>([^<]*)</title>").unwrap()
});

// @const: Script-injected player configuration assignment
static PLAYER_RESPONSE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)ytInitialPlayerResponse\s*=\s*(\{.*?\});").unwrap()
});

/// One caption track the platform offers for a video.
///
/// Serialized as `{value, label}` for the front end's language picker.
/// Duplicate codes from upstream pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// BCP-47-like language tag
    #[serde(rename = "value")]
    pub code: String,

    /// Display name for the picker
    pub label: String,
}

/// Title and caption languages scraped from a watch page.
///
/// Built fresh per request from a live scrape; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoMetadata {
    /// Video title, empty when the page carries none
    pub title: String,

    /// Caption tracks in upstream order
    pub languages: Vec<LanguageOption>,
}

/// Scraper for the public watch page.
///
/// The page format is an external, unversioned contract, so every
/// extraction step degrades independently: a missing title yields an empty
/// string, a missing or unparsable player configuration yields an empty
/// language list. Only the fetch itself can fail hard.
#[derive(Debug, Clone)]
pub struct MetadataScraper {
    /// HTTP client for the outbound fetch
    client: Client,

    /// Watch-page origin, overridable for tests
    base_url: String,
}

impl MetadataScraper {
    /// Create a scraper with the given user agent and request timeout
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for metadata scraping")?;

        Ok(MetadataScraper {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the scraper at a different origin
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch and parse the watch page for a video.
    ///
    /// Partial metadata is still useful to the caller, so extraction never
    /// fails: only an unreachable page is an error.
    pub async fn fetch(&self, id: &VideoId) -> Result<VideoMetadata, ScrapeError> {
        let url = self.watch_page_url(id);
        debug!("Fetching watch page: {}", url);

        let html = self.client
            .get(&url)
            .send()
            .await?
            .text()
            .await?;

        debug!("Watch page fetched, {} bytes", html.len());
        Ok(Self::parse_watch_page(&html))
    }

    /// Parse a watch-page document into metadata.
    ///
    /// Split out from the fetch so upstream format drift can be exercised
    /// without network access.
    pub fn parse_watch_page(html: &str) -> VideoMetadata {
        VideoMetadata {
            title: Self::extract_title(html),
            languages: Self::extract_caption_languages(html),
        }
    }

    /// Watch-page URL on the configured origin
    fn watch_page_url(&self, id: &VideoId) -> String {
        format!("{}/watch?v={}", self.base_url.trim_end_matches('/'), id)
    }

    /// Title element content, with the trailing branding suffix stripped.
    /// Empty when the element is absent.
    fn extract_title(html: &str) -> String {
        let raw = TITLE_REGEX
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str());

        let trimmed = raw.trim();
        trimmed
            .strip_suffix(" - YouTube")
            .unwrap_or(trimmed)
            .trim()
            .to_string()
    }

    /// Caption tracks from the embedded player configuration.
    ///
    /// Walks `captions.playerCaptionsTracklistRenderer.captionTracks`. Label
    /// precedence per track: its self-reported display name, then the static
    /// label table, then the raw code. Any missing link in the chain —
    /// marker, JSON, nested path — yields an empty list, never an error.
    fn extract_caption_languages(html: &str) -> Vec<LanguageOption> {
        let Some(raw) = PLAYER_RESPONSE_REGEX
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            debug!("No player response marker in watch page");
            return Vec::new();
        };

        let player_response: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Player response JSON did not parse: {}", e);
                return Vec::new();
            }
        };

        let Some(tracks) = player_response
            .get("captions")
            .and_then(|captions| captions.get("playerCaptionsTracklistRenderer"))
            .and_then(|renderer| renderer.get("captionTracks"))
            .and_then(Value::as_array)
        else {
            debug!("Player response carries no caption tracks");
            return Vec::new();
        };

        tracks
            .iter()
            .filter_map(|track| {
                let code = track.get("languageCode").and_then(Value::as_str)?;
                let label = track
                    .get("name")
                    .and_then(|name| name.get("simpleText"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| language_utils::label_for_code(code));

                Some(LanguageOption {
                    code: code.to_string(),
                    label,
                })
            })
            .collect()
    }
}
