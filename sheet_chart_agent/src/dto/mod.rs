pub mod llm;
pub mod sheets;
