// mixtape library - playlist engine that both people and assistants can drive
// Pure playlist edits at the core, a session host around them, a shell on top

pub mod assistant; // actions the assistant can call, typed requests, outcomes
pub mod config;    // settings and preferences
pub mod playlist;  // songs, reference resolution, the edits themselves
pub mod session;   // live playlist for one session, change events
pub mod shell;     // terminal commands and playlist view

// Export the stuff other modules actually use
pub use assistant::{all_action_specs, ActionSpec, Outcome, Request};
pub use config::Config;
pub use playlist::{Playlist, PlaylistError, PlaylistSnapshot, Song, SongId};
pub use session::{PlaylistEvent, PlaylistSession};
