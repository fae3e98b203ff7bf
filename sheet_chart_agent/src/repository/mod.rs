pub mod openai_repository_impl;
pub mod sheets_repository_impl;
