use crate::common::*;

use crate::enums::visualize_mode::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct SystemConfig {
    pub mode: VisualizeMode,
    pub chart_title: Option<String>,
    pub preview_rows: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mode: VisualizeMode::Auto,
            chart_title: None,
            preview_rows: 5,
        }
    }
}
