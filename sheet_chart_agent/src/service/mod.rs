pub mod chart_detect_service_impl;
pub mod chart_service_impl;
pub mod recommend_service_impl;
pub mod table_service_impl;
