// The playlist engine - songs, references, and the edits you can make
// Pure functions all the way down: hand in a playlist, get the next one back

pub mod error;
pub mod resolve;
pub mod snapshot;
pub mod song;
pub mod store;

pub use error::PlaylistError;
pub use resolve::{resolve_reference, Resolved, ResolvedBy};
pub use snapshot::{PlaylistSnapshot, SongSnapshot};
pub use song::{Song, SongId, DEFAULT_DURATION};
pub use store::{Edit, Playlist, Removal, DEFAULT_PLAYLIST_NAME};
