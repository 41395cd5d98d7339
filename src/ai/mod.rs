pub mod client;
pub mod generator;

// Public API exports
pub use client::{GenAiClient, GenerateError, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use generator::{
    answer_question, build_prompt, evaluate_exam, generate_questions, split_questions,
};
