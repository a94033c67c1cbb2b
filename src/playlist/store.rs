use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resolve::{resolve_reference, ResolvedBy};
use super::{PlaylistError, PlaylistSnapshot, Song, SongId};

/// Name used when the config doesn't provide one
pub const DEFAULT_PLAYLIST_NAME: &str = "Awesome Playlist";

/// Ordered list of songs plus its display name.
///
/// Every operation borrows the current playlist and hands back the next one,
/// leaving `self` untouched. A failed operation produces no new playlist at
/// all, so there is nothing half-applied to clean up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    name: String,
    songs: Vec<Song>,
    version: u64,
    modified_at: DateTime<Utc>,
}

/// Result of a successful edit: the next playlist and the song it touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub playlist: Playlist,
    pub song: Song,
}

/// Removal also reports how the song was found, for nicer confirmations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub edit: Edit,
    pub by: ResolvedBy,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
            version: 0,
            modified_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Bumped once per successful mutation
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn get(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == *id)
    }

    /// Song at a 1-indexed position
    pub fn at_position(&self, position: usize) -> Option<&Song> {
        position.checked_sub(1).and_then(|index| self.songs.get(index))
    }

    /// Read-only view for the assistant, rebuilt on every call
    pub fn snapshot(&self) -> PlaylistSnapshot {
        PlaylistSnapshot::from_playlist(self)
    }

    /// Append a new song. Title and artist must be non-blank.
    pub fn add_song(&self, title: &str, artist: &str, duration: Option<&str>) -> Result<Edit, PlaylistError> {
        let song = Song::new(title, artist, duration)?;
        let playlist = self.next(|songs| songs.push(song.clone()));
        Ok(Edit { playlist, song })
    }

    /// Remove the song `identifier` refers to ("first", "last", a position, or title/artist text)
    pub fn remove_song(&self, identifier: &str) -> Result<Removal, PlaylistError> {
        let resolved = resolve_reference(identifier, &self.songs)?;
        let song = self.songs[resolved.index].clone();
        let playlist = self.next(|songs| {
            songs.remove(resolved.index);
        });
        Ok(Removal {
            edit: Edit { playlist, song },
            by: resolved.by,
        })
    }

    /// Move a song between 1-indexed positions.
    ///
    /// The song is taken out first and then inserted so that it ends up at
    /// `to_position` in the final list.
    pub fn reorder_song(&self, from_position: i64, to_position: i64) -> Result<Edit, PlaylistError> {
        let from = self.index_of_position(from_position);
        let to = self.index_of_position(to_position);
        let (Some(from), Some(to)) = (from, to) else {
            return Err(PlaylistError::InvalidPosition { len: self.len() });
        };

        let song = self.songs[from].clone();
        let playlist = self.next(|songs| {
            let moved = songs.remove(from);
            songs.insert(to, moved);
        });
        Ok(Edit { playlist, song })
    }

    /// Flip the favorite flag on the song `identifier` refers to.
    /// The returned song carries the new flag.
    pub fn toggle_favorite(&self, identifier: &str) -> Result<Edit, PlaylistError> {
        let resolved = resolve_reference(identifier, &self.songs)?;
        Ok(self.toggle_at(resolved.index))
    }

    /// Exact-id toggle used by the UI. `None` when the id isn't in the list.
    pub fn toggle_favorite_manual(&self, id: &SongId) -> Option<Edit> {
        let index = self.songs.iter().position(|song| song.id == *id)?;
        Some(self.toggle_at(index))
    }

    /// Exact-id removal used by the UI. `None` when the id isn't in the list.
    pub fn remove_manual(&self, id: &SongId) -> Option<Edit> {
        let index = self.songs.iter().position(|song| song.id == *id)?;
        let song = self.songs[index].clone();
        let playlist = self.next(|songs| {
            songs.remove(index);
        });
        Some(Edit { playlist, song })
    }

    fn toggle_at(&self, index: usize) -> Edit {
        let song = self.songs[index].favorite_toggled();
        let playlist = self.next(|songs| songs[index] = song.clone());
        Edit { playlist, song }
    }

    fn index_of_position(&self, position: i64) -> Option<usize> {
        let position = usize::try_from(position).ok()?;
        (1..=self.len()).contains(&position).then(|| position - 1)
    }

    // Copy, change, stamp. Only called once the edit is known to succeed.
    fn next(&self, change: impl FnOnce(&mut Vec<Song>)) -> Self {
        let mut songs = self.songs.clone();
        change(&mut songs);
        Self {
            name: self.name.clone(),
            songs,
            version: self.version + 1,
            modified_at: Utc::now(),
        }
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYLIST_NAME)
    }
}
