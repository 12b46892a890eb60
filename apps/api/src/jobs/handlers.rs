//! Axum route handlers for browsing the job catalog.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::catalog::{self, JobSearch, JobStatistics};
use crate::models::job::Job;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

/// GET /api/jobs/jobs?status=Open
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Json<Vec<Job>> {
    let jobs = state.store.load_jobs().await;
    Json(catalog::filter_by_status(jobs, query.status.as_deref()))
}

/// GET /api/jobs/jobs/search?title=..&job_type=..&employment_type=..
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobSearch>,
) -> Json<Vec<Job>> {
    let jobs = state.store.load_jobs().await;
    Json(catalog::search(jobs, &query))
}

/// GET /api/jobs/jobs/:job_id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> Result<Json<Job>, AppError> {
    let jobs = state.store.load_jobs().await;
    catalog::find_by_id(jobs, job_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job with ID {job_id} not found")))
}

/// GET /api/jobs/statistics
pub async fn handle_job_statistics(State(state): State<AppState>) -> Json<JobStatistics> {
    let jobs = state.store.load_jobs().await;
    let total_candidates = state.store.load_resumes().await.len();
    Json(catalog::statistics(&jobs, total_candidates))
}
