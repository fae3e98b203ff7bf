use crate::common::*;

use crate::model::configs::{
    chart_style_config::*, classifier_config::*, llm_config::*, sheets_config::*,
    system_config::*,
};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub chart_style: ChartStyleConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[doc = "system 설정 정보"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

#[doc = "Google Sheets 연결 정보"]
pub fn get_sheets_config_info() -> &'static SheetsConfig {
    &TOTAL_CONFIG.sheets
}

#[doc = "LLM(OpenAI 호환) 연결 정보"]
pub fn get_llm_config_info() -> &'static LlmConfig {
    &TOTAL_CONFIG.llm
}

#[doc = "차트 스타일 정보"]
pub fn get_chart_style_config_info() -> &'static ChartStyleConfig {
    &TOTAL_CONFIG.chart_style
}

#[doc = "차트 종류 판별 정책 정보"]
pub fn get_classifier_config_info() -> &'static ClassifierConfig {
    &TOTAL_CONFIG.classifier
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::visualize_mode::*;

    #[test]
    fn parses_full_server_config() {
        let raw: &str = r#"
            [system]
            mode = "ai"
            chart_title = "Q3 Sales Analysis"

            [sheets]
            sheet_id = "1AbC"
            worksheet_name = "Sales"

            [llm]
            model = "gpt-4o"

            [chart_style]
            width = 800
            height = 600
            output_dir = "out"

            [classifier]
            dual_axis_ratio_threshold = 20.0
        "#;

        let config: TotalConfig = toml::from_str(raw).unwrap();

        assert_eq!(*config.system().mode(), VisualizeMode::Ai);
        assert_eq!(config.system().chart_title().as_deref(), Some("Q3 Sales Analysis"));
        assert_eq!(config.sheets().worksheet_name(), "Sales");
        assert_eq!(config.llm().model(), "gpt-4o");
        assert_eq!(*config.chart_style().width(), 800);
        assert_eq!(config.chart_style().font_family(), "sans-serif");
        assert_eq!(*config.classifier().dual_axis_ratio_threshold(), 20.0);
        assert_eq!(config.classifier().count_keywords().len(), 5);
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config: TotalConfig = toml::from_str("").unwrap();
        assert_eq!(*config.system().mode(), VisualizeMode::Auto);
        assert_eq!(config.chart_style().image_format(), "png");
    }
}
