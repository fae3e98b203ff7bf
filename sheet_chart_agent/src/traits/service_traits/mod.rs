pub mod chart_detect_service;
pub mod chart_service;
pub mod recommend_service;
pub mod table_service;
