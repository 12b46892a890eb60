pub const MATCH_SUMMARY_PROMPT_TEMPLATE: &str = r#"As an HR expert, provide a concise summary of why this candidate is or isn't a good fit for the job.

JOB: {job_title}
JOB DESCRIPTION: {job_description}
JOB TYPE: {job_type} | {employment_type}

CANDIDATE: {candidate_name}
CANDIDATE SKILLS: {candidate_skills}
MATCHING SKILLS: {matching_skills}
RELEVANT EXPERIENCE: {relevant_experience}
EDUCATION: {education_count} qualification(s)
OVERALL MATCH SCORE: {overall_score}

Provide a 2-3 sentence summary highlighting:
1. Key strengths that make them suitable
2. Any potential gaps or concerns
3. Overall recommendation (Strong fit/Good fit/Weak fit)

Keep it professional and concise."#;
