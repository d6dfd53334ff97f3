// Resume analysis: prompt, model reply parsing, identity normalization, HTTP handler.
// All LLM calls go through llm_client; this module never talks to Gemini directly.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod upload;
