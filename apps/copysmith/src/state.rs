use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// No per-request state survives a request; the only long-lived pieces are the
/// HTTP client and the startup configuration.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `OpenAiClient`. Tests swap in a mock.
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
}
