use crate::llm::ChatClient;
use crate::models::chat::{ ChatRequest, ChatResponse, ErrorResponse };
use crate::sanitize::clean;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::post,
    Router,
    Json,
    extract::State,
    response::{ IntoResponse, Response },
    http::StatusCode,
};
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, error };

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ChatClient>,
}

pub async fn start_http_server(
    port: u16,
    client: Arc<dyn ChatClient>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = format!("0.0.0.0:{}", port).parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app = router(AppState { client });

    let listener = tokio::net::TcpListener::bind(addr).await
        .map_err(|e| format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e))?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(state)
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Response {
    if req.message.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse {
            error: "message must be a non-empty string.".to_string(),
        })).into_response();
    }

    match state.client.send_message(&req.message, &req.history).await {
        Ok(raw) => (StatusCode::OK, Json(ChatResponse {
            response: clean(&raw),
        })).into_response(),
        Err(e) => {
            error!("Chat completion failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse {
                error: "Something went wrong.".to_string(),
            })).into_response()
        }
    }
}
