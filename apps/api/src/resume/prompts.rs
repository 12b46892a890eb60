pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You are a resume parsing assistant. Extract the following fields from the resume and return them as a single JSON object:

- full_name (string)
- email (string)
- phone_number (string)
- skills (list of strings)
- work_experience (list of objects with position, company, duration, description)
- education (list of objects with degree, institution, year, field)
- certifications (list of objects with title, issuer, date)

Use null for any field the resume does not contain. Only return valid JSON.

Resume:
{resume_text}"#;
