//! Match Narrative Generator — prose explanation of a match score.
//!
//! The primary path asks the model for a short HR summary. Whenever that fails
//! (error, timeout, empty reply) the caller gets a fixed sentence chosen by
//! score band instead. `summarize` never returns an error.
//!
//! `AppState` holds an `Arc<dyn NarrativeGenerator>`; tests swap in stubs.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, HR_EXPERT_SYSTEM};
use crate::llm_client::LlmClient;
use crate::matching::prompts::MATCH_SUMMARY_PROMPT_TEMPLATE;
use crate::models::job::Job;
use crate::models::resume::Resume;

const STRONG_THRESHOLD: f64 = 0.7;
const GOOD_THRESHOLD: f64 = 0.4;

/// Everything the generator may use to explain one (candidate, job) pair.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeInputs<'a> {
    pub resume: &'a Resume,
    pub job: &'a Job,
    pub matching_skills: &'a [String],
    pub relevant_experience: &'a [String],
    /// Overall score in [0, 1].
    pub score: f64,
}

#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, inputs: NarrativeInputs<'_>) -> Result<String, AppError>;
}

pub struct LlmNarrativeGenerator(pub LlmClient);

#[async_trait]
impl NarrativeGenerator for LlmNarrativeGenerator {
    async fn generate(&self, inputs: NarrativeInputs<'_>) -> Result<String, AppError> {
        let prompt = build_prompt(&inputs);
        Ok(self.0.complete(&prompt, HR_EXPERT_SYSTEM).await?)
    }
}

/// Narrative for one match, falling back to the score-band sentence on any failure.
pub async fn summarize(
    generator: &dyn NarrativeGenerator,
    inputs: NarrativeInputs<'_>,
    timeout: Duration,
) -> String {
    let outcome = tokio::time::timeout(timeout, generator.generate(inputs)).await;
    match outcome {
        Ok(Ok(text)) if !text.trim().is_empty() => text,
        Ok(Ok(_)) => {
            warn!(
                candidate = inputs.resume.display_email(),
                "Narrative generator returned empty text, using fallback"
            );
            fallback_summary(inputs.score, inputs.matching_skills.len())
        }
        Ok(Err(e)) => {
            warn!(
                candidate = inputs.resume.display_email(),
                "Narrative generation failed, using fallback: {e}"
            );
            fallback_summary(inputs.score, inputs.matching_skills.len())
        }
        Err(_) => {
            warn!(
                candidate = inputs.resume.display_email(),
                timeout_ms = timeout.as_millis() as u64,
                "Narrative generation timed out, using fallback"
            );
            fallback_summary(inputs.score, inputs.matching_skills.len())
        }
    }
}

/// Deterministic summary keyed on the [0, 1] score; bands include their lower bound.
pub fn fallback_summary(score: f64, matching_skill_count: usize) -> String {
    let n = matching_skill_count;
    if score >= STRONG_THRESHOLD {
        format!(
            "Strong candidate with {n} matching skills and relevant experience. Highly recommended."
        )
    } else if score >= GOOD_THRESHOLD {
        format!(
            "Good candidate with some matching skills ({n}) and experience. Worth considering."
        )
    } else {
        format!("Limited match with few relevant skills ({n}). May require additional training.")
    }
}

fn join_or(items: &[String], sep: &str, empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(sep)
    }
}

fn build_prompt(inputs: &NarrativeInputs<'_>) -> String {
    let resume = inputs.resume;
    let job = inputs.job;
    let candidate_skills = join_or(&resume.skills, ", ", "None listed");
    let matching_skills = join_or(inputs.matching_skills, ", ", "None");
    let relevant_experience = join_or(inputs.relevant_experience, "; ", "None identified");
    let education_count = resume.education.len().to_string();
    let overall_score = format!("{:.1}%", inputs.score * 100.0);

    fill_template(
        MATCH_SUMMARY_PROMPT_TEMPLATE,
        &[
            ("job_title", job.title.as_str()),
            ("job_description", job.description.as_str()),
            ("job_type", job.job_type.as_str()),
            ("employment_type", job.employment_type.as_str()),
            ("candidate_name", resume.display_name()),
            ("candidate_skills", candidate_skills.as_str()),
            ("matching_skills", matching_skills.as_str()),
            ("relevant_experience", relevant_experience.as_str()),
            ("education_count", education_count.as_str()),
            ("overall_score", overall_score.as_str()),
        ],
    )
}
