//! Experience Relevance Extractor.

use crate::models::resume::WorkExperience;

/// Keywords shorter than this many characters (plus one) are ignored.
const MIN_KEYWORD_LEN: usize = 3;

/// Labels (`<position> at <company>`) of work entries that share a keyword of
/// more than three characters with the job title or description.
///
/// Keywords are the whitespace-split, lowercased title and description. A
/// keyword only has to appear as a substring of the entry's combined text.
/// Each entry contributes at most once, in input order.
pub fn extract_relevant(
    work_experience: &[WorkExperience],
    job_title: &str,
    job_description: &str,
) -> Vec<String> {
    let title = job_title.to_lowercase();
    let description = job_description.to_lowercase();
    let keywords: Vec<&str> = title
        .split_whitespace()
        .chain(description.split_whitespace())
        .filter(|k| k.chars().count() > MIN_KEYWORD_LEN)
        .collect();

    if keywords.is_empty() {
        return Vec::new();
    }

    work_experience
        .iter()
        .filter(|exp| {
            let text = exp.search_text();
            keywords.iter().any(|k| text.contains(k))
        })
        .map(WorkExperience::label)
        .collect()
}
