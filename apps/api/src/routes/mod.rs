pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Jobs & matching
        .route(
            "/api/jobs/match-candidates",
            post(matching::handle_match_candidates),
        )
        .route("/api/jobs/quick-match", post(matching::handle_quick_match))
        .route("/api/jobs/jobs", get(jobs::handle_list_jobs))
        .route("/api/jobs/jobs/search", get(jobs::handle_search_jobs))
        .route("/api/jobs/jobs/:job_id", get(jobs::handle_get_job))
        .route("/api/jobs/statistics", get(jobs::handle_job_statistics))
        // Resumes
        .route("/api/resume/upload", post(resume::handle_upload))
        .route("/api/resume/resume-summary", get(resume::handle_resume_summary))
        .with_state(state)
}
