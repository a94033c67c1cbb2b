// Terminal shell - the stand-in for the page: a playlist view plus a way to talk to it
// Human edits go through the manual operations, `ask` relays assistant actions

pub mod commands;
pub mod view;

pub use commands::{ParseError, ShellCommand};
pub use view::{render, render_actions, HELP};

use tracing::debug;

use crate::assistant::{all_action_specs, Readable};
use crate::playlist::SongId;
use crate::session::PlaylistSession;

#[derive(Debug, Clone, PartialEq)]
pub enum ShellReply {
    Print(String),
    Quit,
}

pub struct Shell {
    session: PlaylistSession,
}

impl Shell {
    pub fn new(session: PlaylistSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &PlaylistSession {
        &self.session
    }

    /// Parse and run one input line. Blank lines print nothing.
    pub async fn handle_line(&self, line: &str) -> ShellReply {
        match line.parse::<ShellCommand>() {
            Ok(command) => self.execute(command).await,
            Err(ParseError::Empty) => ShellReply::Print(String::new()),
            Err(err) => ShellReply::Print(err.to_string()),
        }
    }

    pub async fn execute(&self, command: ShellCommand) -> ShellReply {
        debug!("Shell command: {:?}", command);

        let text = match command {
            ShellCommand::Quit => return ShellReply::Quit,
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::List => render(&self.session.snapshot().await),
            ShellCommand::Actions => render_actions(&all_action_specs()),
            ShellCommand::State => {
                let readable = Readable::new(self.session.snapshot().await);
                serde_json::to_string_pretty(&readable)
                    .unwrap_or_else(|e| format!("Could not serialize playlist: {}", e))
            }
            ShellCommand::Add { title, artist, duration } => {
                match self.session.add_song(&title, &artist, duration.as_deref()).await {
                    Ok(_) => self.redraw().await,
                    Err(err) => err.to_string(),
                }
            }
            ShellCommand::Favorite(row) => match self.id_at_row(row).await {
                Some(id) => {
                    self.session.toggle_favorite_manual(&id).await;
                    self.redraw().await
                }
                None => no_such_row(row),
            },
            ShellCommand::Remove(row) => match self.id_at_row(row).await {
                Some(id) => {
                    self.session.remove_manual(&id).await;
                    self.redraw().await
                }
                None => no_such_row(row),
            },
            ShellCommand::Ask { action, args } => {
                let outcome = self.session.invoke(&action, &args).await;
                if outcome.is_applied() {
                    format!("🤖 {}\n\n{}", outcome, self.redraw().await)
                } else {
                    format!("🤖 {}", outcome)
                }
            }
        };

        ShellReply::Print(text)
    }

    // Rows stand in for the buttons on each song, which already know the song's id
    async fn id_at_row(&self, row: usize) -> Option<SongId> {
        self.session.playlist().await.at_position(row).map(|song| song.id)
    }

    async fn redraw(&self) -> String {
        render(&self.session.snapshot().await)
    }
}

fn no_such_row(row: usize) -> String {
    format!("No song at row {}", row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print(reply: ShellReply) -> String {
        match reply {
            ShellReply::Print(text) => text,
            ShellReply::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test]
    async fn test_manual_flow() {
        let shell = Shell::new(PlaylistSession::new("Awesome Playlist"));

        let text = print(shell.handle_line("add Yesterday | The Beatles | 2:05").await);
        assert!(text.contains("1 songs"));
        assert!(text.contains("Yesterday - The Beatles"));

        let text = print(shell.handle_line("fav 1").await);
        assert!(text.contains("❤️"));

        let text = print(shell.handle_line("rm 1").await);
        assert!(text.contains("Your playlist is empty"));

        let text = print(shell.handle_line("rm 1").await);
        assert_eq!(text, "No song at row 1");
    }

    #[tokio::test]
    async fn test_add_validation_message() {
        let shell = Shell::new(PlaylistSession::new("Mix"));
        let text = print(shell.handle_line("add   | Queen").await);
        assert_eq!(text, "Title is required");
        assert!(shell.session().playlist().await.is_empty());
    }

    #[tokio::test]
    async fn test_ask_relays_outcome() {
        let shell = Shell::new(PlaylistSession::new("Mix"));

        let text = print(
            shell
                .handle_line(r#"ask addSong {"title": "Africa", "artist": "Toto", "duration": "4:55"}"#)
                .await,
        );
        assert!(text.starts_with("🤖 Added \"Africa\" by Toto to the playlist"));
        assert!(text.contains("4:55"));

        let text = print(shell.handle_line(r#"ask removeSong {"identifier": "abba"}"#).await);
        assert_eq!(text, "🤖 Could not find song matching \"abba\"");
    }

    #[tokio::test]
    async fn test_state_is_json() {
        let shell = Shell::new(PlaylistSession::new("Mix"));
        shell.handle_line("add A | X").await;

        let text = print(shell.handle_line("state").await);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["value"]["playlistName"], "Mix");
        assert_eq!(json["value"]["totalSongs"], 1);
        assert_eq!(json["value"]["songs"][0]["position"], 1);
    }

    #[tokio::test]
    async fn test_quit_and_errors() {
        let shell = Shell::new(PlaylistSession::new("Mix"));
        assert_eq!(shell.handle_line("quit").await, ShellReply::Quit);
        assert_eq!(shell.handle_line("").await, ShellReply::Print(String::new()));
        assert_eq!(
            shell.handle_line("dance").await,
            ShellReply::Print("Unknown command 'dance' (try 'help')".into())
        );
    }
}
