//! Record Store — flat JSON files holding the job and resume collections.
//!
//! Loads are snapshots taken per request and never fail: a missing or corrupt
//! file reads as an empty collection and the problem is logged. Only appends can
//! surface an error to the caller.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::resume::Resume;

/// Storage boundary for job and resume records.
///
/// Carried in `AppState` as `Arc<dyn RecordStore>`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load_jobs(&self) -> Vec<Job>;
    async fn load_resumes(&self) -> Vec<Resume>;
    async fn append_resume(&self, resume: &Resume) -> Result<(), AppError>;
}

pub struct JsonFileStore {
    jobs_path: PathBuf,
    resumes_path: PathBuf,
    // Serializes read-modify-write cycles on the resume file.
    append_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(jobs_path: impl Into<PathBuf>, resumes_path: impl Into<PathBuf>) -> Self {
        Self {
            jobs_path: jobs_path.into(),
            resumes_path: resumes_path.into(),
            append_lock: Mutex::new(()),
        }
    }

    pub fn jobs_path(&self) -> &Path {
        &self.jobs_path
    }

    pub fn resumes_path(&self) -> &Path {
        &self.resumes_path
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load_jobs(&self) -> Vec<Job> {
        load_collection(&self.jobs_path).await
    }

    async fn load_resumes(&self) -> Vec<Resume> {
        load_collection(&self.resumes_path).await
    }

    async fn append_resume(&self, resume: &Resume) -> Result<(), AppError> {
        let _guard = self.append_lock.lock().await;

        let mut records = existing_records(&self.resumes_path).await;
        let record = serde_json::to_value(resume)
            .map_err(|e| AppError::Storage(format!("Failed to serialize resume: {e}")))?;
        records.push(record);

        let contents = serde_json::to_vec_pretty(&Value::Array(records))
            .map_err(|e| AppError::Storage(format!("Failed to serialize resumes: {e}")))?;

        let path = self.resumes_path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &contents))
            .await
            .map_err(|e| AppError::Storage(format!("Resume write task failed: {e}")))?
            .map_err(|e| {
                AppError::Storage(format!(
                    "Failed to write {}: {e}",
                    self.resumes_path.display()
                ))
            })?;

        debug!(path = %self.resumes_path.display(), "Resume appended");
        Ok(())
    }
}

/// Reads a JSON array of `T`. Any failure yields an empty collection.
async fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let contents = match tokio::fs::read(path).await {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Record file does not exist yet");
            return Vec::new();
        }
        Err(e) => {
            warn!(path = %path.display(), "Failed to read record file: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Vec<T>>(&contents) {
        Ok(records) => records,
        Err(e) => {
            warn!(path = %path.display(), "Malformed record file, treating as empty: {e}");
            Vec::new()
        }
    }
}

/// Current contents of the resume file as raw JSON records.
/// A lone object is wrapped into a one-element list; anything unreadable starts fresh.
async fn existing_records(path: &Path) -> Vec<Value> {
    let contents = match tokio::fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), "Failed to read resume file before append: {e}");
            }
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Value>(&contents) {
        Ok(Value::Array(records)) => records,
        Ok(single @ Value::Object(_)) => vec![single],
        Ok(_) | Err(_) => {
            warn!(
                path = %path.display(),
                "Resume file is not a JSON list, starting a new one"
            );
            Vec::new()
        }
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
