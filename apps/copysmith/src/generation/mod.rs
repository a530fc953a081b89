// Copy generation pipeline: tone resolution, prompt building, completion
// parsing, rendering. All model calls go through llm_client — no direct
// OpenAI calls here.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod render;
pub mod tone;
