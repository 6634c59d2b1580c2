use std::sync::Arc;

use crate::config::Config;
use crate::parser_client::ParserClient;
use crate::resume::rewrite::HighlightRewriter;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only provider clients and config; nothing here outlives a request's needs.
#[derive(Clone)]
pub struct AppState {
    pub parser: ParserClient,
    /// Pluggable rewrite backend. Default: the completions provider client.
    pub rewriter: Arc<dyn HighlightRewriter>,
    pub config: Config,
}
