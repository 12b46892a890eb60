// Resume ingestion: PDF text extraction, LLM structuring, and the stored-resume overview.
// All model calls go through llm_client.

pub mod extract;
pub mod handlers;
pub mod parser;
pub mod prompts;
