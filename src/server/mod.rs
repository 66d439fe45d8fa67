pub mod api;

use crate::llm::ChatClient;
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    port: u16,
    client: Arc<dyn ChatClient>,
}

impl Server {
    pub fn new(port: u16, client: Arc<dyn ChatClient>) -> Self {
        Self { port, client }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(self.port, self.client.clone()).await
    }
}
