use std::str::FromStr;

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Help,
    List,
    State,
    Actions,
    Add {
        title: String,
        artist: String,
        duration: Option<String>,
    },
    Favorite(usize), // displayed row, 1-indexed
    Remove(usize),
    Ask {
        action: String,
        args: serde_json::Value,
    },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Arguments must be a JSON object: {0}")]
    BadJson(String),
}

pub const ADD_USAGE: &str = "add <title> | <artist> [| <duration>]";
pub const FAV_USAGE: &str = "fav <row>";
pub const RM_USAGE: &str = "rm <row>";
pub const ASK_USAGE: &str = "ask <action> [<json arguments>]";

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "help" | "?" => Ok(ShellCommand::Help),
            "list" | "ls" => Ok(ShellCommand::List),
            "state" => Ok(ShellCommand::State),
            "actions" => Ok(ShellCommand::Actions),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            "add" => parse_add(rest),
            "fav" => parse_row(rest, FAV_USAGE).map(ShellCommand::Favorite),
            "rm" => parse_row(rest, RM_USAGE).map(ShellCommand::Remove),
            "ask" => parse_ask(rest),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_add(rest: &str) -> Result<ShellCommand, ParseError> {
    let mut fields = rest.split('|').map(str::trim);
    let title = fields.next().unwrap_or_default();
    let artist = fields.next().ok_or(ParseError::Usage(ADD_USAGE))?;
    let duration = fields.next().filter(|d| !d.is_empty()).map(str::to_string);
    if fields.next().is_some() {
        return Err(ParseError::Usage(ADD_USAGE));
    }

    // blank title/artist goes through so the playlist can refuse it with its own message
    Ok(ShellCommand::Add {
        title: title.to_string(),
        artist: artist.to_string(),
        duration,
    })
}

fn parse_row(rest: &str, usage: &'static str) -> Result<usize, ParseError> {
    rest.parse::<usize>().map_err(|_| ParseError::Usage(usage))
}

fn parse_ask(rest: &str) -> Result<ShellCommand, ParseError> {
    let (action, json) = match rest.split_once(char::is_whitespace) {
        Some((action, json)) => (action, json.trim()),
        None => (rest, ""),
    };
    if action.is_empty() {
        return Err(ParseError::Usage(ASK_USAGE));
    }

    let args = if json.is_empty() {
        serde_json::Value::Object(Default::default())
    } else {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ParseError::BadJson(e.to_string()))?;
        if !value.is_object() {
            return Err(ParseError::BadJson(format!("got {}", value)));
        }
        value
    };

    Ok(ShellCommand::Ask {
        action: action.to_string(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_verbs() {
        assert_eq!("help".parse::<ShellCommand>(), Ok(ShellCommand::Help));
        assert_eq!("  LS ".parse::<ShellCommand>(), Ok(ShellCommand::List));
        assert_eq!("state".parse::<ShellCommand>(), Ok(ShellCommand::State));
        assert_eq!("actions".parse::<ShellCommand>(), Ok(ShellCommand::Actions));
        assert_eq!("exit".parse::<ShellCommand>(), Ok(ShellCommand::Quit));
    }

    #[test]
    fn test_add() {
        assert_eq!(
            "add Bohemian Rhapsody | Queen | 5:55".parse::<ShellCommand>(),
            Ok(ShellCommand::Add {
                title: "Bohemian Rhapsody".into(),
                artist: "Queen".into(),
                duration: Some("5:55".into()),
            })
        );
        assert_eq!(
            "add Imagine|John Lennon".parse::<ShellCommand>(),
            Ok(ShellCommand::Add {
                title: "Imagine".into(),
                artist: "John Lennon".into(),
                duration: None,
            })
        );
        assert_eq!(
            "add Imagine".parse::<ShellCommand>(),
            Err(ParseError::Usage(ADD_USAGE))
        );
    }

    #[test]
    fn test_rows() {
        assert_eq!("fav 2".parse::<ShellCommand>(), Ok(ShellCommand::Favorite(2)));
        assert_eq!("rm 1".parse::<ShellCommand>(), Ok(ShellCommand::Remove(1)));
        assert_eq!("rm first".parse::<ShellCommand>(), Err(ParseError::Usage(RM_USAGE)));
    }

    #[test]
    fn test_ask() {
        assert_eq!(
            r#"ask removeSong {"identifier": "first"}"#.parse::<ShellCommand>(),
            Ok(ShellCommand::Ask {
                action: "removeSong".into(),
                args: json!({ "identifier": "first" }),
            })
        );
        assert_eq!(
            "ask listSongs".parse::<ShellCommand>(),
            Ok(ShellCommand::Ask {
                action: "listSongs".into(),
                args: json!({}),
            })
        );
        assert!(matches!(
            "ask removeSong [1]".parse::<ShellCommand>(),
            Err(ParseError::BadJson(_))
        ));
        assert_eq!("ask".parse::<ShellCommand>(), Err(ParseError::Usage(ASK_USAGE)));
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!("   ".parse::<ShellCommand>(), Err(ParseError::Empty));
        assert_eq!(
            "shuffle".parse::<ShellCommand>(),
            Err(ParseError::Unknown("shuffle".into()))
        );
    }
}
