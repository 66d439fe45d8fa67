use serde::{ Serialize, Deserialize };

/// A single prior turn of the conversation, as sent by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub text: String,
}

impl ChatTurn {
    /// The Gemini API only accepts "user" and "model" roles; anything
    /// else ("assistant", "system", typos) is coerced to "user".
    pub fn normalized_role(&self) -> &'static str {
        if self.role == "model" { "model" } else { "user" }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_role_is_kept() {
        let turn = ChatTurn { role: "model".to_string(), text: "hi".to_string() };
        assert_eq!(turn.normalized_role(), "model");
    }

    #[test]
    fn unrecognized_roles_coerce_to_user() {
        for role in ["user", "assistant", "system", "Model", ""] {
            let turn = ChatTurn { role: role.to_string(), text: "hi".to_string() };
            assert_eq!(turn.normalized_role(), "user", "role {:?}", role);
        }
    }

    #[test]
    fn history_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hello"}"#).unwrap();
        assert_eq!(req.message, "hello");
        assert!(req.history.is_empty());
    }

    #[test]
    fn history_entries_require_text() {
        let result = serde_json::from_str::<ChatRequest>(
            r#"{"message":"hello","history":[{"role":"user"}]}"#
        );
        assert!(result.is_err());
    }
}
