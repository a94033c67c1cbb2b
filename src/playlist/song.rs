use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;
use uuid::Uuid;

use super::PlaylistError;

/// Shown when a song is added without a duration
pub const DEFAULT_DURATION: &str = "0:00";

/// Opaque song identifier, assigned once when the song is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(Uuid);

impl SongId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SongId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for SongId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub duration: String, // display only, never parsed
    pub is_favorite: bool,
}

impl Song {
    /// Build a song from raw user/assistant input.
    ///
    /// Title and artist are trimmed and must not end up empty. A missing or
    /// blank duration falls back to [`DEFAULT_DURATION`].
    pub fn new(title: &str, artist: &str, duration: Option<&str>) -> Result<Self, PlaylistError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PlaylistError::Validation { field: "title" });
        }

        let artist = artist.trim();
        if artist.is_empty() {
            return Err(PlaylistError::Validation { field: "artist" });
        }

        let duration = duration
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DURATION);

        if !looks_like_duration(duration) {
            // accepted as-is, it's only ever displayed
            debug!("Duration '{}' for '{}' is not in M:SS form", duration, title);
        }

        Ok(Self {
            id: SongId::new(),
            title: title.to_string(),
            artist: artist.to_string(),
            duration: duration.to_string(),
            is_favorite: false,
        })
    }

    /// Case-insensitive substring match against title or artist.
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }

    pub fn favorite_toggled(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }
}

fn looks_like_duration(duration: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(\d+:)?\d{1,2}:\d{2}$").ok())
        .as_ref()
        .map_or(true, |regex| regex.is_match(duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_song_defaults() {
        let song = Song::new("  Yesterday ", "The Beatles", None).unwrap();
        assert_eq!(song.title, "Yesterday");
        assert_eq!(song.artist, "The Beatles");
        assert_eq!(song.duration, DEFAULT_DURATION);
        assert!(!song.is_favorite);

        let song = Song::new("Yesterday", "The Beatles", Some("   ")).unwrap();
        assert_eq!(song.duration, "0:00");
    }

    #[test]
    fn test_free_form_duration_is_kept() {
        let song = Song::new("Intro", "Someone", Some("about three minutes")).unwrap();
        assert_eq!(song.duration, "about three minutes");

        assert!(looks_like_duration("3:45"));
        assert!(looks_like_duration("1:02:03"));
        assert!(!looks_like_duration("345"));
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            Song::new("", "X", None).unwrap_err(),
            PlaylistError::Validation { field: "title" }
        );
        assert_eq!(
            Song::new("X", "   ", None).unwrap_err(),
            PlaylistError::Validation { field: "artist" }
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Song::new("A", "X", None).unwrap();
        let b = Song::new("A", "X", None).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_matches_text() {
        let song = Song::new("Let It Be", "The Beatles", None).unwrap();
        assert!(song.matches_text("let it"));
        assert!(song.matches_text("beatles"));
        assert!(!song.matches_text("queen"));
    }
}
