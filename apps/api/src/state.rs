use std::sync::Arc;

use crate::config::Config;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable candidate source. Default: PgCandidateStore.
    pub store: Arc<dyn CandidateStore>,
    pub config: Config,
}
