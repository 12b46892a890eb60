use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    OnSite,
    Remote,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    Closed,
    Paused,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::OnSite => "OnSite",
            JobType::Remote => "Remote",
            JobType::Hybrid => "Hybrid",
        }
    }
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-Time",
            EmploymentType::PartTime => "Part-Time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::Closed => "Closed",
            JobStatus::Paused => "Paused",
        }
    }
}

/// A job posting as stored in the jobs file. Read-only to this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: i64,
    pub client_id: i64,
    pub title: String,
    pub description: String,
    pub job_type: JobType,
    pub employment_type: EmploymentType,
    pub status: JobStatus,
    pub created_date: String,
}

impl Job {
    /// Title and description joined by a single space; the text skills are matched against.
    pub fn match_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}
