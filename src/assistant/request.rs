// Typed requests built from the assistant's loosely typed calls.
// All the "is this a string, is that a number" checking happens here, once.

use serde_json::Value;

use super::actions::{ADD_SONG, REMOVE_SONG, REORDER_SONG, TOGGLE_FAVORITE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    AddSong {
        title: String,
        artist: String,
        duration: Option<String>,
    },
    RemoveSong {
        identifier: String,
    },
    ReorderSong {
        from_position: i64,
        to_position: i64,
    },
    ToggleFavorite {
        identifier: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Missing required parameter \"{parameter}\" for {action}")]
    MissingParameter { action: String, parameter: String },

    #[error("Parameter \"{parameter}\" for {action} must be {expected}")]
    InvalidParameter {
        action: String,
        parameter: String,
        expected: &'static str,
    },
}

impl Request {
    /// Parse a named action call with its JSON arguments.
    ///
    /// `args` is expected to be an object; a `null` value counts as a missing
    /// parameter. Positions accept JSON integers, integral floats, and numeric
    /// strings since assistants aren't always strict about types.
    pub fn from_call(action: &str, args: &Value) -> Result<Self, ActionError> {
        let call = Call { action, args };
        match action {
            ADD_SONG => Ok(Request::AddSong {
                title: call.string("title")?,
                artist: call.string("artist")?,
                duration: call.optional_string("duration")?,
            }),
            REMOVE_SONG => Ok(Request::RemoveSong {
                identifier: call.string("identifier")?,
            }),
            REORDER_SONG => Ok(Request::ReorderSong {
                from_position: call.integer("fromPosition")?,
                to_position: call.integer("toPosition")?,
            }),
            TOGGLE_FAVORITE => Ok(Request::ToggleFavorite {
                identifier: call.string("identifier")?,
            }),
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }

    pub fn action_name(&self) -> &'static str {
        match self {
            Request::AddSong { .. } => ADD_SONG,
            Request::RemoveSong { .. } => REMOVE_SONG,
            Request::ReorderSong { .. } => REORDER_SONG,
            Request::ToggleFavorite { .. } => TOGGLE_FAVORITE,
        }
    }
}

struct Call<'a> {
    action: &'a str,
    args: &'a Value,
}

impl Call<'_> {
    fn value(&self, parameter: &str) -> Option<&Value> {
        self.args.get(parameter).filter(|v| !v.is_null())
    }

    fn missing(&self, parameter: &str) -> ActionError {
        ActionError::MissingParameter {
            action: self.action.to_string(),
            parameter: parameter.to_string(),
        }
    }

    fn invalid(&self, parameter: &str, expected: &'static str) -> ActionError {
        ActionError::InvalidParameter {
            action: self.action.to_string(),
            parameter: parameter.to_string(),
            expected,
        }
    }

    fn string(&self, parameter: &str) -> Result<String, ActionError> {
        self.optional_string(parameter)?
            .ok_or_else(|| self.missing(parameter))
    }

    fn optional_string(&self, parameter: &str) -> Result<Option<String>, ActionError> {
        match self.value(parameter) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            // "identifier": 2 is a reasonable thing for an assistant to send
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(_) => Err(self.invalid(parameter, "a string")),
        }
    }

    fn integer(&self, parameter: &str) -> Result<i64, ActionError> {
        let value = self.value(parameter).ok_or_else(|| self.missing(parameter))?;
        let number = match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
            Value::String(s) => s.trim().parse::<f64>().ok().and_then(integral),
            _ => None,
        };
        number.ok_or_else(|| self.invalid(parameter, "a whole number"))
    }
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64).then(|| value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_song_call() {
        let request = Request::from_call(
            "addSong",
            &json!({ "title": "Bohemian Rhapsody", "artist": "Queen", "duration": "5:55" }),
        )
        .unwrap();
        assert_eq!(
            request,
            Request::AddSong {
                title: "Bohemian Rhapsody".into(),
                artist: "Queen".into(),
                duration: Some("5:55".into()),
            }
        );

        let request = Request::from_call("addSong", &json!({ "title": "A", "artist": "B", "duration": null })).unwrap();
        assert!(matches!(request, Request::AddSong { duration: None, .. }));
    }

    #[test]
    fn test_missing_parameter() {
        let err = Request::from_call("addSong", &json!({ "title": "A" })).unwrap_err();
        assert_eq!(
            err,
            ActionError::MissingParameter {
                action: "addSong".into(),
                parameter: "artist".into(),
            }
        );
        assert_eq!(err.to_string(), "Missing required parameter \"artist\" for addSong");
    }

    #[test]
    fn test_unknown_action() {
        let err = Request::from_call("renamePlaylist", &json!({})).unwrap_err();
        assert_eq!(err, ActionError::UnknownAction("renamePlaylist".into()));
    }

    #[test]
    fn test_reorder_number_forms() {
        let expected = Request::ReorderSong { from_position: 1, to_position: 3 };
        assert_eq!(
            Request::from_call("reorderSong", &json!({ "fromPosition": 1, "toPosition": 3 })).unwrap(),
            expected
        );
        assert_eq!(
            Request::from_call("reorderSong", &json!({ "fromPosition": 1.0, "toPosition": "3" })).unwrap(),
            expected
        );
        // out of range is the store's call, not the parser's
        assert_eq!(
            Request::from_call("reorderSong", &json!({ "fromPosition": 0, "toPosition": -2 })).unwrap(),
            Request::ReorderSong { from_position: 0, to_position: -2 }
        );
    }

    #[test]
    fn test_reorder_rejects_fractions_and_text() {
        let err = Request::from_call("reorderSong", &json!({ "fromPosition": 1.5, "toPosition": 2 })).unwrap_err();
        assert!(matches!(err, ActionError::InvalidParameter { ref parameter, .. } if parameter == "fromPosition"));

        let err = Request::from_call("reorderSong", &json!({ "fromPosition": 1, "toPosition": "end" })).unwrap_err();
        assert!(matches!(err, ActionError::InvalidParameter { ref parameter, .. } if parameter == "toPosition"));
    }

    #[test]
    fn test_numeric_identifier_accepted() {
        let request = Request::from_call("toggleFavorite", &json!({ "identifier": 2 })).unwrap();
        assert_eq!(request, Request::ToggleFavorite { identifier: "2".into() });
        assert_eq!(request.action_name(), "toggleFavorite");
    }

    #[test]
    fn test_wrong_type_identifier() {
        let err = Request::from_call("removeSong", &json!({ "identifier": ["first"] })).unwrap_err();
        assert_eq!(err.to_string(), "Parameter \"identifier\" for removeSong must be a string");
    }
}
