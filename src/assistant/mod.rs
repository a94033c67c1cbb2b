// Assistant side of the playlist - the actions it can call and the state it can read
// The assistant speaks in loose JSON; everything past `Request::from_call` is typed

pub mod actions;
pub mod dispatch;
pub mod request;

pub use actions::{all_action_specs, find_action_spec, ActionParameter, ActionSpec, ParamType};
pub use dispatch::{apply, Outcome, OutcomeStatus};
pub use request::{ActionError, Request};

use serde::Serialize;

use crate::playlist::{Playlist, PlaylistSnapshot};

/// Attached to the readable playlist snapshot so the assistant knows what it's looking at
pub const READABLE_DESCRIPTION: &str =
    "The current playlist state including all songs, their order, and favorites";

/// Readable state as handed to the assistant: a description plus the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readable {
    pub description: &'static str,
    pub value: PlaylistSnapshot,
}

impl Readable {
    pub fn new(value: PlaylistSnapshot) -> Self {
        Self {
            description: READABLE_DESCRIPTION,
            value,
        }
    }
}

/// Parse and run a named action call in one go.
/// Bad calls are rejected outcomes too, so the assistant can correct itself.
pub fn invoke(playlist: &Playlist, action: &str, args: &serde_json::Value) -> (Playlist, Outcome) {
    match Request::from_call(action, args) {
        Ok(request) => apply(playlist, request),
        Err(err) => (playlist.clone(), Outcome::rejected(err.to_string())),
    }
}
