use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::matching::skills::SkillMatchMode;

const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://127.0.0.1:3000,http://localhost:3001,http://127.0.0.1:3001";

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub llm_model: String,
    pub llm_api_url: String,
    pub jobs_file: PathBuf,
    pub resumes_file: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub cors_allowed_origins: Vec<String>,
    pub narrative_timeout: Duration,
    pub narrative_concurrency: usize,
    pub skill_match_mode: SkillMatchMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let narrative_concurrency = optional_env("NARRATIVE_CONCURRENCY", "4")
            .parse::<usize>()
            .context("NARRATIVE_CONCURRENCY must be a positive integer")?;
        if narrative_concurrency == 0 {
            bail!("NARRATIVE_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            llm_model: optional_env("LLM_MODEL", crate::llm_client::DEFAULT_MODEL),
            llm_api_url: optional_env("LLM_API_URL", crate::llm_client::DEFAULT_API_URL),
            jobs_file: PathBuf::from(optional_env("JOBS_FILE", "job_des.json")),
            resumes_file: PathBuf::from(optional_env("RESUMES_FILE", "parsed_resumes.json")),
            port: optional_env("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            cors_allowed_origins: parse_origins(&optional_env(
                "CORS_ALLOWED_ORIGINS",
                DEFAULT_CORS_ORIGINS,
            )),
            narrative_timeout: Duration::from_secs(
                optional_env("NARRATIVE_TIMEOUT_SECS", "30")
                    .parse::<u64>()
                    .context("NARRATIVE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            narrative_concurrency,
            skill_match_mode: optional_env("SKILL_MATCH_MODE", "substring")
                .parse::<SkillMatchMode>()
                .context("SKILL_MATCH_MODE must be 'substring' or 'token'")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
