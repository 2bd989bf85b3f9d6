use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// @module: Subtitle file output utilities

/// Fallback stem when a title sanitizes down to nothing
const FALLBACK_STEM: &str = "subtitles";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Strip a video title down to filename-safe characters.
    ///
    /// Keeps alphanumerics and spaces, drops everything else, and collapses
    /// the spaces to underscores. An empty result falls back to a fixed stem
    /// so the download always has a name.
    pub fn sanitize_title(title: &str) -> String {
        let kept: String = title
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
            .collect();

        let stem = kept
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");

        if stem.is_empty() {
            FALLBACK_STEM.to_string()
        } else {
            stem
        }
    }

    // @generates: Download filename for a subtitle payload
    // @params: title, target_language
    pub fn subtitle_filename(title: &str, target_language: Option<&str>) -> String {
        let stem = Self::sanitize_title(title);
        match target_language {
            Some(language) => format!("{}_{}.srt", stem, language),
            None => format!("{}.srt", stem),
        }
    }

    /// Write a string to a file, creating parent directories as needed
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))
    }
}
