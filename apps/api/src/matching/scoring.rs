//! Score Aggregator — combines skill, experience, and education signals.
//!
//! Weights are fixed. Changing them reorders every ranking, so they are not
//! exposed through configuration or per-request parameters.

const SKILL_WEIGHT: f64 = 0.5;
const EXPERIENCE_WEIGHT: f64 = 0.3;
const EDUCATION_WEIGHT: f64 = 0.2;

/// Each relevant experience entry is worth this much, saturating at five entries.
const EXPERIENCE_STEP: f64 = 0.2;
/// Flat education credit for listing any education at all.
const EDUCATION_CREDIT: f64 = 0.3;

pub fn experience_score(relevant_count: usize) -> f64 {
    (relevant_count as f64 * EXPERIENCE_STEP).min(1.0)
}

pub fn education_score(has_education: bool) -> f64 {
    if has_education {
        EDUCATION_CREDIT
    } else {
        0.0
    }
}

/// Weighted overall score in [0, 1].
pub fn aggregate(skill_score: f64, relevant_experience: &[String], has_education: bool) -> f64 {
    let overall = skill_score * SKILL_WEIGHT
        + experience_score(relevant_experience.len()) * EXPERIENCE_WEIGHT
        + education_score(has_education) * EDUCATION_WEIGHT;
    overall.clamp(0.0, 1.0)
}

/// Presentation form: percent with one decimal place, halves rounded to even.
pub fn to_percent(overall: f64) -> f64 {
    let percent = overall * 100.0;
    (percent * 10.0).round_ties_even() / 10.0
}
