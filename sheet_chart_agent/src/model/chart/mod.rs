pub mod chart_recommendation;
pub mod chart_spec;
