// Session host - holds the live playlist for one editing session
// Both the UI and the assistant go through here; one edit at a time, no torn reads

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

use crate::assistant::{self, Outcome, Request};
use crate::playlist::{Edit, Playlist, PlaylistError, PlaylistSnapshot, Song, SongId};

const EVENT_CAPACITY: usize = 64;

/// Sent after every committed change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlaylistEvent {
    SongAdded { song: Song, version: u64 },
    SongRemoved { song: Song, version: u64 },
    SongMoved { song: Song, to_position: usize, version: u64 },
    FavoriteToggled { song: Song, version: u64 },
}

impl PlaylistEvent {
    pub fn version(&self) -> u64 {
        match self {
            PlaylistEvent::SongAdded { version, .. }
            | PlaylistEvent::SongRemoved { version, .. }
            | PlaylistEvent::SongMoved { version, .. }
            | PlaylistEvent::FavoriteToggled { version, .. } => *version,
        }
    }
}

#[derive(Clone)]
pub struct PlaylistSession {
    state: Arc<Mutex<Playlist>>,
    events: broadcast::Sender<PlaylistEvent>,
}

impl PlaylistSession {
    /// Start a session with an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_playlist(Playlist::new(name))
    }

    pub fn with_playlist(playlist: Playlist) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(playlist)),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlaylistEvent> {
        self.events.subscribe()
    }

    /// Copy of the current playlist
    pub async fn playlist(&self) -> Playlist {
        self.state.lock().await.clone()
    }

    /// Fresh readable state, never cached
    pub async fn snapshot(&self) -> PlaylistSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Assistant entry point: named action + JSON arguments
    pub async fn invoke(&self, action: &str, args: &serde_json::Value) -> Outcome {
        match Request::from_call(action, args) {
            Ok(request) => self.apply(request).await,
            Err(err) => {
                warn!("Rejected assistant call '{}': {}", action, err);
                Outcome::rejected(err.to_string())
            }
        }
    }

    pub async fn apply(&self, request: Request) -> Outcome {
        let action = request.action_name();
        let event_hint = EventHint::from(&request);

        let mut state = self.state.lock().await;
        let (next, outcome) = assistant::apply(&state, request);

        if outcome.is_applied() {
            let event = event_hint.into_event(&state, &next);
            *state = next;
            drop(state);

            info!("{}: {}", action, outcome.message);
            self.publish(event);
        } else {
            warn!("{} rejected: {}", action, outcome.message);
        }

        outcome
    }

    /// Manual add from the form. Fields are trimmed; blank title/artist is refused.
    pub async fn add_song(&self, title: &str, artist: &str, duration: Option<&str>) -> Result<Song, PlaylistError> {
        let mut state = self.state.lock().await;
        let Edit { playlist, song } = state.add_song(title, artist, duration)?;
        *state = playlist;
        let version = state.version();
        drop(state);

        info!("Added '{}' by {} to the playlist", song.title, song.artist);
        self.publish(Some(PlaylistEvent::SongAdded {
            song: song.clone(),
            version,
        }));
        Ok(song)
    }

    /// Heart button. Unknown ids are ignored.
    pub async fn toggle_favorite_manual(&self, id: &SongId) -> Option<Song> {
        let mut state = self.state.lock().await;
        let Some(Edit { playlist, song }) = state.toggle_favorite_manual(id) else {
            warn!("Toggle favorite ignored, no song with id {}", id);
            return None;
        };
        *state = playlist;
        let version = state.version();
        drop(state);

        info!("Toggled favorite on '{}' (now {})", song.title, song.is_favorite);
        self.publish(Some(PlaylistEvent::FavoriteToggled {
            song: song.clone(),
            version,
        }));
        Some(song)
    }

    /// Remove button. Unknown ids are ignored.
    pub async fn remove_manual(&self, id: &SongId) -> Option<Song> {
        let mut state = self.state.lock().await;
        let Some(Edit { playlist, song }) = state.remove_manual(id) else {
            warn!("Remove ignored, no song with id {}", id);
            return None;
        };
        *state = playlist;
        let version = state.version();
        drop(state);

        info!("Removed '{}' from the playlist", song.title);
        self.publish(Some(PlaylistEvent::SongRemoved {
            song: song.clone(),
            version,
        }));
        Some(song)
    }

    fn publish(&self, event: Option<PlaylistEvent>) {
        if let Some(event) = event {
            // no subscribers is fine
            let _ = self.events.send(event);
        }
    }
}

// What kind of event a request produces if it succeeds
enum EventHint {
    Added,
    Removed,
    Moved { to_position: usize },
    Toggled,
}

impl From<&Request> for EventHint {
    fn from(request: &Request) -> Self {
        match request {
            Request::AddSong { .. } => EventHint::Added,
            Request::RemoveSong { .. } => EventHint::Removed,
            Request::ReorderSong { to_position, .. } => EventHint::Moved {
                to_position: usize::try_from(*to_position).unwrap_or_default(),
            },
            Request::ToggleFavorite { .. } => EventHint::Toggled,
        }
    }
}

impl EventHint {
    // Works out the touched song by diffing ids, since the outcome only carries text
    fn into_event(self, before: &Playlist, after: &Playlist) -> Option<PlaylistEvent> {
        let version = after.version();
        match self {
            EventHint::Added => after.songs().last().cloned().map(|song| PlaylistEvent::SongAdded { song, version }),
            EventHint::Removed => before
                .songs()
                .iter()
                .find(|song| after.get(&song.id).is_none())
                .cloned()
                .map(|song| PlaylistEvent::SongRemoved { song, version }),
            EventHint::Moved { to_position } => after
                .at_position(to_position)
                .cloned()
                .map(|song| PlaylistEvent::SongMoved { song, to_position, version }),
            EventHint::Toggled => after
                .songs()
                .iter()
                .zip(before.songs())
                .find(|(now, was)| now.is_favorite != was.is_favorite)
                .map(|(now, _)| PlaylistEvent::FavoriteToggled {
                    song: now.clone(),
                    version,
                }),
        }
    }
}
