use async_trait::async_trait;
use serde::{ Deserialize, Serialize };
use log::info;

use super::{ ChatClient, LlmError };
use crate::config::GenerationSettings;
use crate::models::chat::ChatTurn;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
    generation_config: GenerationSettings,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

pub struct GeminiChatClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    persona: String,
    generation: GenerationSettings,
}

impl GeminiChatClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        persona: String,
        generation: GenerationSettings,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url,
            persona,
            generation,
        }
    }

    fn build_request(&self, message: &str, history: &[ChatTurn]) -> GenerateContentRequest {
        let mut contents: Vec<GeminiContent> = history
            .iter()
            .map(|turn| GeminiContent {
                role: Some(turn.normalized_role().to_string()),
                parts: vec![GeminiPart { text: turn.text.clone() }],
            })
            .collect();
        contents.push(GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart { text: message.to_string() }],
        });

        GenerateContentRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: self.persona.clone() }],
            },
            contents,
            generation_config: self.generation,
        }
    }
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn send_message(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, LlmError> {
        let payload = self.build_request(message, history);
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        info!(
            "GeminiChatClient::send_message() → model={} history_turns={}",
            self.model,
            history.len()
        );

        let response = self.http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send().await?
            .error_for_status()?;

        let body: GenerateContentResponse = response.json().await?;
        body.candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate.content.parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiChatClient {
        GeminiChatClient::new(
            "test-key".to_string(),
            "gemini-2.0-flash".to_string(),
            "https://generativelanguage.googleapis.com/v1beta".to_string(),
            "Persona text.".to_string(),
            GenerationSettings::default(),
        )
    }

    #[test]
    fn payload_replays_history_then_appends_message() {
        let history = vec![
            ChatTurn { role: "user".to_string(), text: "I have a headache".to_string() },
            ChatTurn { role: "model".to_string(), text: "How long?".to_string() },
            ChatTurn { role: "assistant".to_string(), text: "Two days".to_string() },
        ];
        let payload = client().build_request("Any remedies?", &history);
        let value = serde_json::to_value(&payload).unwrap();

        let contents = value["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "I have a headache");
        assert_eq!(contents[1]["role"], "model");
        // Unknown roles are coerced to "user" before they hit the wire.
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[3]["role"], "user");
        assert_eq!(contents[3]["parts"][0]["text"], "Any remedies?");
    }

    #[test]
    fn payload_carries_fixed_generation_config_and_persona() {
        let payload = client().build_request("hello", &[]);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["generationConfig"]["temperature"], 0.7);
        assert_eq!(value["generationConfig"]["topP"], 0.95);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1024);
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "Persona text.");
        assert!(value["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn response_text_joins_candidate_parts() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Rest "},{"text":"and hydrate."}]}}]}"#
        ).unwrap();
        let text: String = body.candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
            .unwrap();
        assert_eq!(text, "Rest and hydrate.");
    }

    #[test]
    fn empty_candidate_list_deserializes() {
        let body: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.candidates.is_empty());
    }
}
