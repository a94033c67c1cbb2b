use serde::Serialize;
use std::fmt;

use super::Request;
use crate::playlist::{Playlist, PlaylistError, ResolvedBy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Applied,
    Rejected,
}

/// Human-readable result of one action, relayed to the assistant as-is.
/// A rejected outcome is normal conversation, not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub message: String,
}

impl Outcome {
    pub fn applied(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Applied,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Rejected,
            message: message.into(),
        }
    }

    pub fn is_applied(&self) -> bool {
        self.status == OutcomeStatus::Applied
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<PlaylistError> for Outcome {
    fn from(err: PlaylistError) -> Self {
        Outcome::rejected(err.to_string())
    }
}

/// Run one request against `playlist`.
///
/// Returns the next playlist and the outcome. On rejection the returned
/// playlist is an unchanged copy of the input.
pub fn apply(playlist: &Playlist, request: Request) -> (Playlist, Outcome) {
    match try_apply(playlist, request) {
        Ok((next, message)) => (next, Outcome::applied(message)),
        Err(err) => (playlist.clone(), err.into()),
    }
}

fn try_apply(playlist: &Playlist, request: Request) -> Result<(Playlist, String), PlaylistError> {
    match request {
        Request::AddSong { title, artist, duration } => {
            let edit = playlist.add_song(&title, &artist, duration.as_deref())?;
            let message = format!("Added \"{}\" by {} to the playlist", edit.song.title, edit.song.artist);
            Ok((edit.playlist, message))
        }
        Request::RemoveSong { identifier } => {
            let removal = playlist.remove_song(&identifier)?;
            let song = &removal.edit.song;
            let message = match removal.by {
                ResolvedBy::First | ResolvedBy::Last => {
                    format!("Removed \"{}\" from the playlist", song.title)
                }
                ResolvedBy::Position(position) => {
                    format!("Removed \"{}\" from position {}", song.title, position)
                }
                ResolvedBy::Text => {
                    format!("Removed \"{}\" by {} from the playlist", song.title, song.artist)
                }
            };
            Ok((removal.edit.playlist, message))
        }
        Request::ReorderSong { from_position, to_position } => {
            let edit = playlist.reorder_song(from_position, to_position)?;
            let message = format!(
                "Moved \"{}\" from position {} to position {}",
                edit.song.title, from_position, to_position
            );
            Ok((edit.playlist, message))
        }
        Request::ToggleFavorite { identifier } => {
            let edit = playlist.toggle_favorite(&identifier)?;
            let verb = if edit.song.is_favorite { "Marked" } else { "Unmarked" };
            let message = format!("{} \"{}\" as favorite", verb, edit.song.title);
            Ok((edit.playlist, message))
        }
    }
}
