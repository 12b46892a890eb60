//! Read-only views over the job snapshot: filtering, search, and statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::job::{EmploymentType, Job, JobStatus, JobType};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct JobSearch {
    pub title: Option<String>,
    pub job_type: Option<String>,
    pub employment_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobStatistics {
    pub total_jobs: usize,
    pub total_candidates: usize,
    pub jobs_by_status: BTreeMap<JobStatus, usize>,
    pub employment_types: Vec<EmploymentType>,
    pub job_types: Vec<JobType>,
}

fn normalized(filter: Option<&str>) -> Option<String> {
    filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase)
}

/// Jobs whose status name equals `status` case-insensitively; all jobs when absent.
pub fn filter_by_status(jobs: Vec<Job>, status: Option<&str>) -> Vec<Job> {
    match normalized(status) {
        None => jobs,
        Some(wanted) => jobs
            .into_iter()
            .filter(|job| job.status.as_str().to_lowercase() == wanted)
            .collect(),
    }
}

/// Applies every present filter: title as a case-insensitive substring, types as
/// case-insensitive exact wire names.
pub fn search(jobs: Vec<Job>, query: &JobSearch) -> Vec<Job> {
    let title = normalized(query.title.as_deref());
    let job_type = normalized(query.job_type.as_deref());
    let employment_type = normalized(query.employment_type.as_deref());

    jobs.into_iter()
        .filter(|job| {
            title
                .as_deref()
                .map_or(true, |t| job.title.to_lowercase().contains(t))
        })
        .filter(|job| {
            job_type
                .as_deref()
                .map_or(true, |t| job.job_type.as_str().to_lowercase() == t)
        })
        .filter(|job| {
            employment_type
                .as_deref()
                .map_or(true, |t| job.employment_type.as_str().to_lowercase() == t)
        })
        .collect()
}

pub fn find_by_id(jobs: Vec<Job>, job_id: i64) -> Option<Job> {
    jobs.into_iter().find(|job| job.job_id == job_id)
}

pub fn statistics(jobs: &[Job], total_candidates: usize) -> JobStatistics {
    let mut jobs_by_status = BTreeMap::new();
    for job in jobs {
        *jobs_by_status.entry(job.status).or_insert(0) += 1;
    }

    JobStatistics {
        total_jobs: jobs.len(),
        total_candidates,
        jobs_by_status,
        employment_types: jobs.iter().map(|j| j.employment_type).collect(),
        job_types: jobs.iter().map(|j| j.job_type).collect(),
    }
}
