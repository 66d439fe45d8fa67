pub mod persona;

use serde::Serialize;

/// Generation parameters sent with every model call. These are versioned
/// configuration, not caller input; the handler never overrides them.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}
