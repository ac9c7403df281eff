// app_state.rs

use std::sync::Arc;

use crate::services::chat_service::ChatService;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Chat and message operations, wired to the configured repositories
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    /// Creates a new instance of AppState
    ///
    /// # Arguments
    /// * `chat_service` - Service built over the repositories chosen at startup
    pub fn new(chat_service: Arc<ChatService>) -> Self {
        Self { chat_service }
    }
}
