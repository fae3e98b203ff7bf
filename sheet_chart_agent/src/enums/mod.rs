pub mod chart_kind;
pub mod visualize_mode;
