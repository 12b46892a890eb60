//! Resume Parser — structures raw resume text into a `Resume` via the LLM.

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::resume::Resume;
use crate::resume::prompts::RESUME_PARSE_PROMPT_TEMPLATE;

/// A reply that is not resume JSON surfaces as `AppError::Llm` (500).
pub async fn parse_resume(resume_text: &str, llm: &LlmClient) -> Result<Resume, AppError> {
    let prompt = fill_template(RESUME_PARSE_PROMPT_TEMPLATE, &[("resume_text", resume_text)]);
    Ok(llm.call_json::<Resume>(&prompt, JSON_ONLY_SYSTEM).await?)
}
