use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::matching::narrative::NarrativeGenerator;
use crate::matching::ranking::MatchSettings;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Job and resume snapshots; reloaded on every request.
    pub store: Arc<dyn RecordStore>,
    /// Used directly by resume ingestion.
    pub llm: LlmClient,
    /// Match narratives. Default: LlmNarrativeGenerator over `llm`.
    pub narrator: Arc<dyn NarrativeGenerator>,
    pub match_settings: MatchSettings,
}
