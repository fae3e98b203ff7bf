use crate::common::*;

use crate::env_configuration::env_config::*;

use crate::errors::visualization_error::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct SheetsConfig {
    pub api_base: String,
    pub sheet_id: Option<String>,
    pub worksheet_name: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            api_base: "https://sheets.googleapis.com/v4".to_string(),
            sheet_id: None,
            worksheet_name: "Sheet1".to_string(),
            api_key: None,
            access_token: None,
            timeout_secs: 10,
        }
    }
}

impl SheetsConfig {
    #[doc = "설정파일의 sheet_id 가 없으면 GOOGLE_SHEET_ID 환경변수를 사용"]
    pub fn resolve_sheet_id(&self) -> Result<String, VisualizationError> {
        non_empty_or_env(self.sheet_id.as_deref(), ENV_GOOGLE_SHEET_ID).ok_or_else(|| {
            VisualizationError::MissingCredential {
                name: ENV_GOOGLE_SHEET_ID.to_string(),
            }
        })
    }

    #[doc = "API key (없으면 GOOGLE_API_KEY 환경변수)"]
    pub fn resolve_api_key(&self) -> Option<String> {
        non_empty_or_env(self.api_key.as_deref(), ENV_GOOGLE_API_KEY)
    }

    #[doc = "OAuth access token (없으면 GOOGLE_ACCESS_TOKEN 환경변수)"]
    pub fn resolve_access_token(&self) -> Option<String> {
        non_empty_or_env(self.access_token.as_deref(), ENV_GOOGLE_ACCESS_TOKEN)
    }
}
