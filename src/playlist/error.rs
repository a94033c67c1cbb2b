// Expected, recoverable playlist failures.
// The Display text is what ends up in front of the user (or the assistant), so keep it readable.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    #[error("{} is required", capitalize(.field))]
    Validation { field: &'static str },

    #[error("The playlist is empty, there is no \"{keyword}\" song")]
    EmptyPlaylist { keyword: &'static str },

    #[error("Could not find song matching \"{identifier}\"")]
    NotFound { identifier: String },

    #[error("Invalid positions. Playlist has {len} songs.")]
    InvalidPosition { len: usize },
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PlaylistError::Validation { field: "title" }.to_string(),
            "Title is required"
        );
        assert_eq!(
            PlaylistError::NotFound { identifier: "Bohemian".into() }.to_string(),
            "Could not find song matching \"Bohemian\""
        );
        assert_eq!(
            PlaylistError::InvalidPosition { len: 3 }.to_string(),
            "Invalid positions. Playlist has 3 songs."
        );
        assert_eq!(
            PlaylistError::EmptyPlaylist { keyword: "last" }.to_string(),
            "The playlist is empty, there is no \"last\" song"
        );
    }
}
