//! Ranking Service — scores every resume against one job and keeps the best.
//!
//! Pipeline per resume: skills → relevant experience → aggregate → narrative.
//! Narratives run with bounded concurrency through `buffered`, which yields in
//! input order, so the stable sort below still breaks ties by load order.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use tracing::info;

use crate::matching::experience::extract_relevant;
use crate::matching::narrative::{summarize, NarrativeGenerator, NarrativeInputs};
use crate::matching::scoring::{aggregate, to_percent};
use crate::matching::skills::{score_skills, SkillMatchMode};
use crate::models::job::Job;
use crate::models::match_result::{JobMatchResult, HAS_EDUCATION, NO_EDUCATION};
use crate::models::resume::Resume;
use crate::store::RecordStore;

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    pub skill_mode: SkillMatchMode,
    pub narrative_timeout: Duration,
    pub narrative_concurrency: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            skill_mode: SkillMatchMode::Substring,
            narrative_timeout: Duration::from_secs(30),
            narrative_concurrency: 4,
        }
    }
}

/// Resolves a job title query: exact case-insensitive title first, then the
/// first job whose title contains the query or is contained in it.
pub fn find_job_by_title<'a>(jobs: &'a [Job], query: &str) -> Option<&'a Job> {
    let query = query.to_lowercase();
    jobs.iter()
        .find(|job| job.title.to_lowercase() == query)
        .or_else(|| {
            jobs.iter().find(|job| {
                let title = job.title.to_lowercase();
                title.contains(&query) || query.contains(&title)
            })
        })
}

/// Scores one resume against one job, including its narrative.
pub async fn score_candidate(
    resume: &Resume,
    job: &Job,
    narrator: &dyn NarrativeGenerator,
    settings: &MatchSettings,
) -> JobMatchResult {
    let skills = score_skills(&resume.skills, &job.match_text(), settings.skill_mode);
    let relevant_experience = extract_relevant(&resume.work_experience, &job.title, &job.description);
    let overall = aggregate(skills.score, &relevant_experience, resume.has_education());

    let summary = summarize(
        narrator,
        NarrativeInputs {
            resume,
            job,
            matching_skills: &skills.matches,
            relevant_experience: &relevant_experience,
            score: overall,
        },
        settings.narrative_timeout,
    )
    .await;

    JobMatchResult {
        candidate_name: resume.display_name().to_string(),
        candidate_email: resume.display_email().to_string(),
        match_score: to_percent(overall),
        matching_skills: skills.matches,
        relevant_experience,
        education_match: if resume.has_education() {
            HAS_EDUCATION
        } else {
            NO_EDUCATION
        }
        .to_string(),
        summary,
        resume_data: resume.clone(),
    }
}

/// Ranks `resumes` for an already resolved job, best first.
/// `top_n: None` keeps every candidate.
pub async fn rank_for_job(
    job: &Job,
    resumes: &[Resume],
    narrator: &dyn NarrativeGenerator,
    settings: &MatchSettings,
    top_n: Option<usize>,
) -> Vec<JobMatchResult> {
    let pending: Vec<_> = resumes
        .iter()
        .map(|resume| score_candidate(resume, job, narrator, settings))
        .collect();
    let mut results: Vec<JobMatchResult> = stream::iter(pending)
        .buffered(settings.narrative_concurrency.max(1))
        .collect()
        .await;

    // sort_by is stable: equal scores keep load order.
    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    if let Some(n) = top_n {
        results.truncate(n);
    }
    results
}

/// Loads a fresh snapshot, resolves `job_title`, and ranks every resume.
///
/// `None` means the title matched no job. `Some(vec![])` means the job exists
/// but there were no resumes to rank.
pub async fn rank_candidates(
    store: &dyn RecordStore,
    narrator: &dyn NarrativeGenerator,
    settings: &MatchSettings,
    job_title: &str,
    top_n: Option<usize>,
) -> Option<Vec<JobMatchResult>> {
    let jobs = store.load_jobs().await;
    let job = find_job_by_title(&jobs, job_title)?;

    let resumes = store.load_resumes().await;
    if resumes.is_empty() {
        info!(job = %job.title, "No resumes on file to rank");
        return Some(Vec::new());
    }

    let results = rank_for_job(job, &resumes, narrator, settings, top_n).await;
    info!(
        job = %job.title,
        scored = resumes.len(),
        returned = results.len(),
        "Candidates ranked"
    );
    Some(results)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::matching::narrative::tests::FailingGenerator;
    use crate::models::job::{EmploymentType, JobStatus, JobType};
    use crate::models::resume::{Education, WorkExperience};
    use crate::store::JsonFileStore;
    use tempfile::TempDir;

    fn job(id: i64, title: &str, description: &str) -> Job {
        Job {
            job_id: id,
            client_id: 1,
            title: title.to_string(),
            description: description.to_string(),
            job_type: JobType::Remote,
            employment_type: EmploymentType::FullTime,
            status: JobStatus::Open,
            created_date: "2024-01-01".to_string(),
        }
    }

    fn candidate(name: &str, skills: &[&str]) -> Resume {
        Resume {
            full_name: Some(name.to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_title_wins_over_earlier_partial() {
        let jobs = vec![
            job(1, "Senior Data Scientist", ""),
            job(2, "Data Scientist", ""),
        ];
        assert_eq!(find_job_by_title(&jobs, "data scientist").unwrap().job_id, 2);
    }

    #[test]
    fn test_partial_match_title_contains_query() {
        let jobs = vec![job(1, "Backend Engineer", ""), job(2, "Senior Data Scientist", "")];
        assert_eq!(find_job_by_title(&jobs, "data scientist").unwrap().job_id, 2);
    }

    #[test]
    fn test_partial_match_query_contains_title() {
        let jobs = vec![job(1, "Designer", "")];
        assert_eq!(
            find_job_by_title(&jobs, "Lead Product Designer (remote)").unwrap().job_id,
            1
        );
    }

    #[test]
    fn test_unknown_title_resolves_to_none() {
        let jobs = vec![job(1, "Designer", "")];
        assert!(find_job_by_title(&jobs, "Astronaut").is_none());
        assert!(find_job_by_title(&[], "Designer").is_none());
    }

    #[tokio::test]
    async fn test_score_candidate_full_pipeline() {
        let job = job(1, "Data Scientist", "needs Python and SQL");
        let mut resume = candidate("Ada", &["Python", "SQL"]);
        resume.work_experience = vec![WorkExperience {
            position: Some("Data Analyst".to_string()),
            company: Some("Acme".to_string()),
            ..Default::default()
        }];
        resume.education = vec![Education::default()];

        let result =
            score_candidate(&resume, &job, &FailingGenerator, &MatchSettings::default()).await;

        // 1.0*0.5 + 0.2*0.3 + 0.3*0.2 = 0.62
        assert_eq!(result.match_score, 62.0);
        assert_eq!(result.matching_skills, vec!["Python", "SQL"]);
        assert_eq!(result.relevant_experience, vec!["Data Analyst at Acme"]);
        assert_eq!(result.education_match, "Has formal education");
        assert!(result.summary.starts_with("Good candidate with some matching skills (2)"));
        assert_eq!(result.resume_data, resume);
    }

    #[tokio::test]
    async fn test_score_candidate_with_empty_resume() {
        let job = job(1, "Data Scientist", "Python");
        let result = score_candidate(
            &Resume::default(),
            &job,
            &FailingGenerator,
            &MatchSettings::default(),
        )
        .await;
        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.candidate_name, "Unknown");
        assert_eq!(result.candidate_email, "Unknown");
        assert_eq!(result.education_match, "No formal education listed");
        assert!(result.summary.starts_with("Limited match"));
    }

    #[tokio::test]
    async fn test_score_candidate_labels_blank_identity_unknown() {
        let job = job(1, "Rust Engineer", "Rust");
        let resume = candidate("", &["Rust"]);
        let resume = Resume {
            email: Some(String::new()),
            ..resume
        };
        let result =
            score_candidate(&resume, &job, &FailingGenerator, &MatchSettings::default()).await;
        assert_eq!(result.candidate_name, "Unknown");
        assert_eq!(result.candidate_email, "Unknown");
        assert_eq!(result.match_score, 50.0);
    }

    #[tokio::test]
    async fn test_rank_sorts_descending_and_is_stable_on_ties() {
        let job = job(1, "Rust Engineer", "Rust and Tokio");
        let resumes = vec![
            candidate("First", &["Cobol"]),
            candidate("Second", &["Rust"]),
            candidate("Third", &["Fortran"]),
            candidate("Fourth", &["Rust", "Tokio"]),
            candidate("Fifth", &["Rust"]),
        ];
        let results = rank_for_job(
            &job,
            &resumes,
            &FailingGenerator,
            &MatchSettings::default(),
            None,
        )
        .await;

        let names: Vec<_> = results.iter().map(|r| r.candidate_name.as_str()).collect();
        assert_eq!(names, vec!["Second", "Fourth", "Fifth", "First", "Third"]);
        assert!(results
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
    }

    #[tokio::test]
    async fn test_rank_truncates_to_top_n() {
        let job = job(1, "Rust Engineer", "Rust");
        let resumes: Vec<_> = (0..8).map(|i| candidate(&format!("C{i}"), &["Rust"])).collect();
        let results = rank_for_job(
            &job,
            &resumes,
            &FailingGenerator,
            &MatchSettings::default(),
            Some(DEFAULT_TOP_N),
        )
        .await;
        assert_eq!(results.len(), 5);
    }

    #[tokio::test]
    async fn test_rank_top_n_larger_than_pool_returns_all() {
        let job = job(1, "Rust Engineer", "Rust");
        let resumes = vec![candidate("A", &["Rust"]), candidate("B", &[])];
        let results = rank_for_job(
            &job,
            &resumes,
            &FailingGenerator,
            &MatchSettings::default(),
            Some(5),
        )
        .await;
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_rank_top_n_zero_is_empty() {
        let job = job(1, "Rust Engineer", "Rust");
        let resumes = vec![candidate("A", &["Rust"])];
        let results = rank_for_job(
            &job,
            &resumes,
            &FailingGenerator,
            &MatchSettings::default(),
            Some(0),
        )
        .await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_rank_order_independent_of_concurrency() {
        let job = job(1, "Rust Engineer", "Rust");
        let resumes: Vec<_> = (0..10)
            .map(|i| candidate(&format!("C{i}"), if i % 3 == 0 { &["Rust"] } else { &["Go"] }))
            .collect();

        let serial = MatchSettings {
            narrative_concurrency: 1,
            ..Default::default()
        };
        let parallel = MatchSettings {
            narrative_concurrency: 8,
            ..Default::default()
        };
        let a = rank_for_job(&job, &resumes, &FailingGenerator, &serial, None).await;
        let b = rank_for_job(&job, &resumes, &FailingGenerator, &parallel, None).await;

        let names = |rs: &[JobMatchResult]| {
            rs.iter()
                .map(|r| r.candidate_name.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&a), names(&b));
    }

    #[tokio::test]
    async fn test_rank_candidates_runs_on_a_spawned_task() {
        let resumes = r#"[{"full_name": "Ada", "skills": ["Python"]}]"#;
        let (_dir, store) = store_with(ONE_JOB, Some(resumes)).await;
        let store: Arc<dyn RecordStore> = Arc::new(store);
        let narrator: Arc<dyn NarrativeGenerator> = Arc::new(FailingGenerator);

        let handle = tokio::spawn(async move {
            rank_candidates(
                store.as_ref(),
                narrator.as_ref(),
                &MatchSettings::default(),
                "Senior Data Scientist",
                None,
            )
            .await
        });
        let results = handle.await.unwrap().unwrap();
        assert_eq!(results[0].candidate_name, "Ada");
        assert_eq!(results[0].match_score, 50.0);
    }

    async fn store_with(jobs: &str, resumes: Option<&str>) -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("jobs.json"), dir.path().join("resumes.json"));
        std::fs::write(store.jobs_path(), jobs).unwrap();
        if let Some(r) = resumes {
            std::fs::write(store.resumes_path(), r).unwrap();
        }
        (dir, store)
    }

    const ONE_JOB: &str = r#"[{
        "jobId": 1, "clientId": 1, "title": "Senior Data Scientist",
        "description": "Python and SQL", "jobType": "Remote",
        "employmentType": "Full-Time", "status": "Open", "createdDate": "2024-01-01"
    }]"#;

    #[tokio::test]
    async fn test_rank_candidates_distinguishes_not_found_from_no_candidates() {
        let (_dir, store) = store_with(ONE_JOB, None).await;
        let settings = MatchSettings::default();

        let missing =
            rank_candidates(&store, &FailingGenerator, &settings, "Astronaut", Some(5)).await;
        assert!(missing.is_none());

        let empty =
            rank_candidates(&store, &FailingGenerator, &settings, "data scientist", Some(5)).await;
        assert_eq!(empty.map(|r| r.len()), Some(0));
    }

    #[tokio::test]
    async fn test_rank_candidates_resolves_partial_title_and_ranks() {
        let resumes = r#"[
            {"full_name": "Low", "skills": ["Java"]},
            {"full_name": "High", "email": "high@example.com", "skills": ["Python", "SQL"]}
        ]"#;
        let (_dir, store) = store_with(ONE_JOB, Some(resumes)).await;

        let results = rank_candidates(
            &store,
            &FailingGenerator,
            &MatchSettings::default(),
            "data scientist",
            Some(5),
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].candidate_name, "High");
        assert_eq!(results[0].match_score, 50.0);
        assert_eq!(results[1].candidate_email, "Unknown");
    }
}
