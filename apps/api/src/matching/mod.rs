// Candidate–job matching: skill overlap, experience relevance, weighted score,
// narrative, and ranking. Everything except the narrative call is deterministic.

pub mod experience;
pub mod handlers;
pub mod narrative;
pub mod prompts;
pub mod ranking;
pub mod scoring;
pub mod skills;
