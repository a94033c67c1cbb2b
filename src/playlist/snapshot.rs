use serde::Serialize;

use super::{Playlist, SongId};

/// What the assistant gets to read. Field names follow the camelCase the assistant side expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnapshot {
    pub playlist_name: String,
    pub total_songs: usize,
    pub songs: Vec<SongSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSnapshot {
    pub position: usize, // 1-indexed
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub is_favorite: bool,
}

impl PlaylistSnapshot {
    pub fn from_playlist(playlist: &Playlist) -> Self {
        let songs = playlist
            .songs()
            .iter()
            .enumerate()
            .map(|(index, song)| SongSnapshot {
                position: index + 1,
                id: song.id,
                title: song.title.clone(),
                artist: song.artist.clone(),
                duration: song.duration.clone(),
                is_favorite: song.is_favorite,
            })
            .collect();

        Self {
            playlist_name: playlist.name().to_string(),
            total_songs: playlist.len(),
            songs,
        }
    }
}
