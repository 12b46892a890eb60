use serde::Serialize;

use crate::models::resume::Resume;

pub const HAS_EDUCATION: &str = "Has formal education";
pub const NO_EDUCATION: &str = "No formal education listed";

/// Result of scoring one resume against one job. Built per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct JobMatchResult {
    pub candidate_name: String,
    pub candidate_email: String,
    /// 0–100, one decimal place.
    pub match_score: f64,
    /// Subset of the candidate's own skills, in their original order and casing.
    pub matching_skills: Vec<String>,
    pub relevant_experience: Vec<String>,
    pub education_match: String,
    pub summary: String,
    pub resume_data: Resume,
}
