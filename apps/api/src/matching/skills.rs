//! Skill Matcher — which of a candidate's skills appear in a job's text.
//!
//! The score is the fraction of the *candidate's* skills found in the job text,
//! not the fraction of the job's requirements covered. Candidates with short,
//! targeted skill lists score higher than ones listing everything they know.
//!
//! Default matching is plain case-insensitive substring containment, so "Java"
//! matches a posting that only mentions "JavaScript", and "R" matches almost
//! anything. `SkillMatchMode::TokenBoundary` tightens this for deployments that
//! want it; the default keeps existing scores stable.

use std::str::FromStr;

use anyhow::bail;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillMatchMode {
    #[default]
    Substring,
    /// The occurrence must not be flanked by alphanumeric characters.
    TokenBoundary,
}

impl FromStr for SkillMatchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(SkillMatchMode::Substring),
            "token" | "token_boundary" => Ok(SkillMatchMode::TokenBoundary),
            other => bail!("unknown skill match mode '{other}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// matches / candidate skills, in [0, 1].
    pub score: f64,
    pub matches: Vec<String>,
}

impl SkillMatch {
    fn none() -> Self {
        Self {
            score: 0.0,
            matches: Vec::new(),
        }
    }
}

pub fn score_skills(candidate_skills: &[String], job_text: &str, mode: SkillMatchMode) -> SkillMatch {
    if candidate_skills.is_empty() || job_text.is_empty() {
        return SkillMatch::none();
    }

    let job_text = job_text.to_lowercase();
    let matches: Vec<String> = candidate_skills
        .iter()
        .filter(|skill| contains_skill(&job_text, &skill.to_lowercase(), mode))
        .cloned()
        .collect();

    SkillMatch {
        score: matches.len() as f64 / candidate_skills.len() as f64,
        matches,
    }
}

fn contains_skill(haystack: &str, skill: &str, mode: SkillMatchMode) -> bool {
    match mode {
        SkillMatchMode::Substring => haystack.contains(skill),
        SkillMatchMode::TokenBoundary => {
            if skill.is_empty() {
                return true;
            }
            haystack.match_indices(skill).any(|(start, _)| {
                let before = haystack[..start].chars().next_back();
                let after = haystack[start + skill.len()..].chars().next();
                !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_skills_found_scores_one() {
        let result = score_skills(
            &skills(&["Python", "SQL"]),
            "Data Scientist needs Python and SQL",
            SkillMatchMode::Substring,
        );
        assert_eq!(result.score, 1.0);
        assert_eq!(result.matches, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_empty_skill_list_scores_zero() {
        let result = score_skills(&[], "anything at all", SkillMatchMode::Substring);
        assert_eq!(result.score, 0.0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_empty_job_text_scores_zero() {
        let result = score_skills(&skills(&["Python"]), "", SkillMatchMode::Substring);
        assert_eq!(result.score, 0.0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_denominator_is_candidate_skill_count() {
        let result = score_skills(
            &skills(&["Rust", "Go", "Haskell", "COBOL"]),
            "Backend engineer: Rust required",
            SkillMatchMode::Substring,
        );
        assert_eq!(result.score, 0.25);
        assert_eq!(result.matches, vec!["Rust"]);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_keeps_original_casing() {
        let result = score_skills(
            &skills(&["pYtHoN"]),
            "PYTHON developer",
            SkillMatchMode::Substring,
        );
        assert_eq!(result.matches, vec!["pYtHoN"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let result = score_skills(
            &skills(&["SQL", "Excel", "SQL"]),
            "SQL analyst",
            SkillMatchMode::Substring,
        );
        assert_eq!(result.matches, vec!["SQL", "SQL"]);
        assert!((result.score - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_substring_mode_matches_java_inside_javascript() {
        let result = score_skills(
            &skills(&["Java"]),
            "Frontend role using JavaScript",
            SkillMatchMode::Substring,
        );
        assert_eq!(result.matches, vec!["Java"]);
    }

    #[test]
    fn test_token_mode_rejects_java_inside_javascript() {
        let result = score_skills(
            &skills(&["Java", "C++"]),
            "Frontend role using JavaScript and C++.",
            SkillMatchMode::TokenBoundary,
        );
        assert_eq!(result.matches, vec!["C++"]);
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_token_mode_finds_later_bounded_occurrence() {
        let result = score_skills(
            &skills(&["Go"]),
            "Good Go experience",
            SkillMatchMode::TokenBoundary,
        );
        assert_eq!(result.matches, vec!["Go"]);
    }

    #[test]
    fn test_matches_are_subset_of_candidate_skills() {
        let candidate = skills(&["Docker", "Kubernetes", "Terraform"]);
        let result = score_skills(&candidate, "docker and terraform", SkillMatchMode::Substring);
        assert!(result.matches.iter().all(|m| candidate.contains(m)));
    }

    #[test]
    fn test_mode_parses_from_config_strings() {
        assert_eq!("substring".parse::<SkillMatchMode>().unwrap(), SkillMatchMode::Substring);
        assert_eq!(" Token ".parse::<SkillMatchMode>().unwrap(), SkillMatchMode::TokenBoundary);
        assert!("fuzzy".parse::<SkillMatchMode>().is_err());
    }
}
