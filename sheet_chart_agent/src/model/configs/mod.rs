pub mod chart_style_config;
pub mod classifier_config;
pub mod llm_config;
pub mod sheets_config;
pub mod system_config;
pub mod total_config;
