// Interview question generation: prompt building, the model call (or its canned
// fallback), and parsing model output into typed questions.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
