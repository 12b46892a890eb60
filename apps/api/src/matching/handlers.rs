//! Axum route handlers for candidate matching.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::ranking::{find_job_by_title, rank_candidates, score_candidate, DEFAULT_TOP_N};
use crate::models::match_result::JobMatchResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job_title: String,
    /// Missing → 5. Explicit `null` → every candidate.
    #[serde(default = "default_top_candidates")]
    pub top_candidates: Option<usize>,
}

fn default_top_candidates() -> Option<usize> {
    Some(DEFAULT_TOP_N)
}

#[derive(Debug, Deserialize)]
pub struct QuickMatchQuery {
    pub candidate_email: String,
    pub job_title: String,
}

fn required_title(raw: &str) -> Result<&str, AppError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Job title cannot be empty".to_string()));
    }
    Ok(title)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/jobs/match-candidates
///
/// Ranks every stored resume against the job the title resolves to.
/// 404 when no job matches; an empty list when the job exists but no one applied.
pub async fn handle_match_candidates(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<Vec<JobMatchResult>>, AppError> {
    let title = required_title(&request.job_title)?;

    let results = rank_candidates(
        state.store.as_ref(),
        state.narrator.as_ref(),
        &state.match_settings,
        title,
        request.top_candidates,
    )
    .await
    .ok_or_else(|| AppError::NotFound(format!("Job with title '{title}' not found")))?;

    Ok(Json(results))
}

/// POST /api/jobs/quick-match?candidate_email=..&job_title=..
///
/// Scores a single candidate, looked up by email, against one job.
pub async fn handle_quick_match(
    State(state): State<AppState>,
    Query(query): Query<QuickMatchQuery>,
) -> Result<Json<JobMatchResult>, AppError> {
    let title = required_title(&query.job_title)?;

    let resumes = state.store.load_resumes().await;
    let candidate = resumes
        .iter()
        .find(|r| r.email.as_deref() == Some(query.candidate_email.as_str()))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Candidate with email {} not found",
                query.candidate_email
            ))
        })?;

    let jobs = state.store.load_jobs().await;
    let job = find_job_by_title(&jobs, title)
        .ok_or_else(|| AppError::NotFound(format!("Job '{title}' not found")))?;

    let result = score_candidate(
        candidate,
        job,
        state.narrator.as_ref(),
        &state.match_settings,
    )
    .await;

    Ok(Json(result))
}
