pub mod cli;
pub mod config;
pub mod llm;
pub mod models;
pub mod sanitize;
pub mod server;

use cli::Args;
use config::{ persona, GenerationSettings };
use llm::{ gemini::GeminiChatClient, ChatClient };
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Port: {}", args.port);
    info!("Chat Model: {}", args.chat_model);
    info!("Chat Base URL: {}", args.chat_base_url);
    info!("Persona: {}", args.persona_path.as_deref().unwrap_or("(built-in)"));
    info!("-------------------------");

    let persona = persona::load_persona(args.persona_path.as_deref())?;
    let client: Arc<dyn ChatClient> = Arc::new(GeminiChatClient::new(
        args.gemini_api_key.clone(),
        args.chat_model.clone(),
        args.chat_base_url.clone(),
        persona,
        GenerationSettings::default(),
    ));

    let server = Server::new(args.port, client);
    server.run().await
}
