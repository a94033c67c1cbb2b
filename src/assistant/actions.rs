use serde::{Deserialize, Serialize};

// ── Action Spec ───────────────────────────────────────────────

/// Name, description, and parameters of an action the assistant may call.
/// The description is what the assistant matches user intent against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ActionParameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
}

impl ActionSpec {
    pub fn parameter(&self, name: &str) -> Option<&ActionParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

pub const ADD_SONG: &str = "addSong";
pub const REMOVE_SONG: &str = "removeSong";
pub const REORDER_SONG: &str = "reorderSong";
pub const TOGGLE_FAVORITE: &str = "toggleFavorite";

// ── Action Registry ───────────────────────────────────────────

/// Every action the assistant can invoke on the playlist
pub fn all_action_specs() -> Vec<ActionSpec> {
    vec![
        ActionSpec {
            name: ADD_SONG.into(),
            description: "Add a new song to the playlist. Use this when the user wants to add a song with title, artist, and duration.".into(),
            parameters: vec![
                param("title", ParamType::String, "The title of the song", true),
                param("artist", ParamType::String, "The artist or band name", true),
                param(
                    "duration",
                    ParamType::String,
                    "The duration in MM:SS format (e.g., '3:45')",
                    false,
                ),
            ],
        },
        ActionSpec {
            name: REMOVE_SONG.into(),
            description: "Remove a song from the playlist by its title, artist, or position number".into(),
            parameters: vec![param(
                "identifier",
                ParamType::String,
                "The song title, artist name, or position number (e.g., 'first', '1', 'Bohemian Rhapsody')",
                true,
            )],
        },
        ActionSpec {
            name: REORDER_SONG.into(),
            description: "Move a song to a different position in the playlist".into(),
            parameters: vec![
                param(
                    "fromPosition",
                    ParamType::Number,
                    "The current position of the song (1-indexed)",
                    true,
                ),
                param(
                    "toPosition",
                    ParamType::Number,
                    "The target position for the song (1-indexed)",
                    true,
                ),
            ],
        },
        ActionSpec {
            name: TOGGLE_FAVORITE.into(),
            description: "Mark or unmark a song as favorite".into(),
            parameters: vec![param(
                "identifier",
                ParamType::String,
                "The song title, artist, or position number",
                true,
            )],
        },
    ]
}

pub fn find_action_spec(name: &str) -> Option<ActionSpec> {
    all_action_specs().into_iter().find(|spec| spec.name == name)
}

fn param(name: &str, param_type: ParamType, description: &str, required: bool) -> ActionParameter {
    ActionParameter {
        name: name.into(),
        param_type,
        description: description.into(),
        required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let specs = all_action_specs();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["addSong", "removeSong", "reorderSong", "toggleFavorite"]);
    }

    #[test]
    fn test_add_song_parameters() {
        let spec = find_action_spec(ADD_SONG).unwrap();
        assert!(spec.parameter("title").unwrap().required);
        assert!(spec.parameter("artist").unwrap().required);
        assert!(!spec.parameter("duration").unwrap().required);
    }

    #[test]
    fn test_reorder_parameters_are_numbers() {
        let spec = find_action_spec(REORDER_SONG).unwrap();
        for p in &spec.parameters {
            assert_eq!(p.param_type, ParamType::Number);
            assert!(p.required);
        }
    }

    #[test]
    fn test_spec_serializes_with_type_key() {
        let spec = find_action_spec(REMOVE_SONG).unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["parameters"][0]["type"], "string");
        assert_eq!(json["parameters"][0]["name"], "identifier");
    }
}
