pub mod llm_repository;
pub mod sheets_repository;
