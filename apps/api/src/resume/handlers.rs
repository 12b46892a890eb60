//! Axum route handlers for resume ingestion and overview.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{Resume, UNKNOWN};
use crate::resume::extract::extract_pdf_text;
use crate::resume::parser::parse_resume;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub parsed_resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct ResumeOverview {
    pub filename: String,
    pub full_name: String,
    pub email: String,
    pub skills_count: usize,
    pub experience_count: usize,
    pub education_count: usize,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeSummaryResponse {
    pub total_resumes: usize,
    pub resumes: Vec<ResumeOverview>,
}

impl From<&Resume> for ResumeOverview {
    fn from(resume: &Resume) -> Self {
        let or_unknown = |v: &Option<String>| v.clone().unwrap_or_else(|| UNKNOWN.to_string());
        Self {
            filename: or_unknown(&resume.filename),
            full_name: or_unknown(&resume.full_name),
            email: or_unknown(&resume.email),
            skills_count: resume.skills.len(),
            experience_count: resume.work_experience.len(),
            education_count: resume.education.len(),
            timestamp: or_unknown(&resume.timestamp),
        }
    }
}

/// POST /api/resume/upload
///
/// Multipart PDF upload: extract text → LLM structuring → stamp → append to store.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let filename = field.file_name().map(String::from);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data));
            break;
        }
    }

    let (filename, data) = upload
        .ok_or_else(|| AppError::Validation(format!("Missing '{UPLOAD_FIELD}' field")))?;

    let text = extract_pdf_text(data).await;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text extracted from PDF".to_string(),
        ));
    }

    let mut resume = parse_resume(&text, &state.llm).await?;
    resume.timestamp = Some(chrono::Local::now().to_rfc3339());
    resume.filename = filename;

    state.store.append_resume(&resume).await?;

    info!(
        filename = resume.filename.as_deref().unwrap_or(UNKNOWN),
        candidate = resume.display_email(),
        skills = resume.skills.len(),
        "Resume parsed and stored"
    );

    Ok(Json(UploadResponse {
        parsed_resume: resume,
    }))
}

/// GET /api/resume/resume-summary
pub async fn handle_resume_summary(State(state): State<AppState>) -> Json<ResumeSummaryResponse> {
    let resumes = state.store.load_resumes().await;
    Json(ResumeSummaryResponse {
        total_resumes: resumes.len(),
        resumes: resumes.iter().map(ResumeOverview::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_counts_and_unknowns() {
        let resume: Resume = serde_json::from_str(
            r#"{
                "email": "a@b.test",
                "skills": ["Rust", "SQL"],
                "work_experience": [{}, {}, {}],
                "timestamp": "2024-06-01T10:00:00+00:00"
            }"#,
        )
        .unwrap();
        let overview = ResumeOverview::from(&resume);
        assert_eq!(overview.filename, "Unknown");
        assert_eq!(overview.full_name, "Unknown");
        assert_eq!(overview.email, "a@b.test");
        assert_eq!(overview.skills_count, 2);
        assert_eq!(overview.experience_count, 3);
        assert_eq!(overview.education_count, 0);
        assert_eq!(overview.timestamp, "2024-06-01T10:00:00+00:00");
    }
}
