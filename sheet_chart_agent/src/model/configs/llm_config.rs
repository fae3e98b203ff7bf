use crate::common::*;

use crate::env_configuration::env_config::*;

use crate::errors::visualization_error::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct LlmConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl LlmConfig {
    #[doc = "설정파일의 api_key 가 없으면 OPENAI_API_KEY 환경변수를 사용"]
    pub fn resolve_api_key(&self) -> Result<String, VisualizationError> {
        non_empty_or_env(self.api_key.as_deref(), ENV_OPENAI_API_KEY).ok_or_else(|| {
            VisualizationError::MissingCredential {
                name: ENV_OPENAI_API_KEY.to_string(),
            }
        })
    }
}
