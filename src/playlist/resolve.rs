// Turns a free-form reference ("first", "2", "beatles") into a position in the list.
// Resolvers run in a fixed order and the first one that has an opinion wins,
// so positional references always beat text matches.

use tracing::debug;

use super::{PlaylistError, Song};

/// Which rule picked the song
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBy {
    First,
    Last,
    Position(usize), // 1-indexed, as the caller wrote it
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub index: usize,
    pub by: ResolvedBy,
}

/// A resolver returns `None` when the identifier isn't its kind of reference.
type Resolver = fn(&str, &[Song]) -> Option<Result<Resolved, PlaylistError>>;

const RESOLVERS: [(&str, Resolver); 4] = [
    ("first", resolve_first),
    ("last", resolve_last),
    ("position", resolve_position),
    ("text", resolve_text),
];

/// Resolve `identifier` against `songs`.
///
/// Precedence: `first`, `last`, 1-indexed position, then case-insensitive
/// substring of title or artist (first match from the top). Anything else is
/// [`PlaylistError::NotFound`].
pub fn resolve_reference(identifier: &str, songs: &[Song]) -> Result<Resolved, PlaylistError> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(PlaylistError::Validation { field: "identifier" });
    }

    for (rule, resolver) in RESOLVERS {
        if let Some(result) = resolver(identifier, songs) {
            debug!("Identifier '{}' handled by '{}' rule: {:?}", identifier, rule, result);
            return result;
        }
    }

    Err(PlaylistError::NotFound {
        identifier: identifier.to_string(),
    })
}

fn resolve_first(identifier: &str, songs: &[Song]) -> Option<Result<Resolved, PlaylistError>> {
    if !identifier.eq_ignore_ascii_case("first") {
        return None;
    }
    Some(if songs.is_empty() {
        Err(PlaylistError::EmptyPlaylist { keyword: "first" })
    } else {
        Ok(Resolved { index: 0, by: ResolvedBy::First })
    })
}

fn resolve_last(identifier: &str, songs: &[Song]) -> Option<Result<Resolved, PlaylistError>> {
    if !identifier.eq_ignore_ascii_case("last") {
        return None;
    }
    Some(match songs.len() {
        0 => Err(PlaylistError::EmptyPlaylist { keyword: "last" }),
        len => Ok(Resolved { index: len - 1, by: ResolvedBy::Last }),
    })
}

fn resolve_position(identifier: &str, songs: &[Song]) -> Option<Result<Resolved, PlaylistError>> {
    // out-of-range numbers fall through to the text rule
    let position = identifier.parse::<usize>().ok()?;
    (1..=songs.len()).contains(&position).then(|| {
        Ok(Resolved {
            index: position - 1,
            by: ResolvedBy::Position(position),
        })
    })
}

fn resolve_text(identifier: &str, songs: &[Song]) -> Option<Result<Resolved, PlaylistError>> {
    let needle = identifier.to_lowercase();
    songs
        .iter()
        .position(|song| song.matches_text(&needle))
        .map(|index| Ok(Resolved { index, by: ResolvedBy::Text }))
}
