use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port for the HTTP server to listen on.
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// API key for the Gemini generative language service.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    /// Model name for chat completion.
    #[arg(long, env = "CHAT_MODEL", default_value = "gemini-2.0-flash")]
    pub chat_model: String,

    /// Base URL for the Gemini API.
    #[arg(
        long,
        env = "CHAT_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub chat_base_url: String,

    /// Optional path to a file overriding the built-in system persona.
    #[arg(long, env = "PERSONA_PATH")]
    pub persona_path: Option<String>,
}
