// Plain-text rendering of the playlist, redrawn after every change

use std::fmt::Write;

use crate::assistant::ActionSpec;
use crate::playlist::PlaylistSnapshot;

pub fn render(snapshot: &PlaylistSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🎵 {}", snapshot.playlist_name);
    let _ = writeln!(out, "{} songs", snapshot.total_songs);
    let _ = writeln!(out);

    if snapshot.songs.is_empty() {
        let _ = writeln!(out, "  Your playlist is empty");
        let _ = writeln!(out, "  Ask the assistant to add some songs!");
        return out;
    }

    // pad titles so durations line up
    let width = snapshot
        .songs
        .iter()
        .map(|song| song.title.chars().count() + song.artist.chars().count() + 3)
        .max()
        .unwrap_or(0);

    for song in &snapshot.songs {
        let label = format!("{} - {}", song.title, song.artist);
        let heart = if song.is_favorite { "❤️" } else { "🤍" };
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:>6}  {}",
            song.position,
            label,
            song.duration,
            heart,
            width = width
        );
    }

    out
}

pub fn render_actions(specs: &[ActionSpec]) -> String {
    let mut out = String::new();
    for spec in specs {
        let _ = writeln!(out, "{} - {}", spec.name, spec.description);
        for param in &spec.parameters {
            let _ = writeln!(
                out,
                "    {}: {:?}{}  {}",
                param.name,
                param.param_type,
                if param.required { "" } else { " (optional)" },
                param.description
            );
        }
    }
    out
}

pub const HELP: &str = "\
Commands:
  list                               Show the playlist
  add <title> | <artist> [| <dur>]   Add a song
  fav <row>                          Toggle favorite on a row
  rm <row>                           Remove a row
  ask <action> [<json>]              Relay an assistant action, e.g. ask removeSong {\"identifier\": \"first\"}
  actions                            List assistant actions
  state                              Show what the assistant can read (JSON)
  help                               This text
  quit                               Leave
";
