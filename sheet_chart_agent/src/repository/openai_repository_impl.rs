use crate::common::*;

use crate::model::{chart::chart_recommendation::*, configs::llm_config::*};

use crate::dto::llm::chat_completion::*;

use crate::errors::visualization_error::*;

use crate::env_configuration::env_config::*;

use crate::traits::repository_traits::llm_repository::*;

const SYSTEM_MESSAGE: &str =
    "You are a data visualization expert. Always respond with valid JSON.";

#[derive(Debug, Clone)]
pub struct OpenAiRepositoryImpl {
    client: Client,
    api_base: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiRepositoryImpl {
    pub fn new(llm_config: &LlmConfig) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(*llm_config.timeout_secs()))
            .build()
            .context("[OpenAiRepositoryImpl->new] Failed to build http client")?;

        /* auto 모드에서는 키가 필요 없으므로 실제 호출 시점에 검사한다 */
        let api_key: Option<String> = llm_config.resolve_api_key().ok();

        Ok(OpenAiRepositoryImpl {
            client,
            api_base: llm_config.api_base().trim_end_matches('/').to_string(),
            model: llm_config.model().to_string(),
            api_key,
        })
    }

    #[doc = "POST /chat/completions 를 호출하고 첫 번째 응답 메시지를 반환하는 함수"]
    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        json_mode: bool,
    ) -> Result<String, anyhow::Error> {
        let api_key: &str = self.api_key.as_deref().ok_or_else(|| {
            VisualizationError::MissingCredential {
                name: ENV_OPENAI_API_KEY.to_string(),
            }
        })?;

        let request: ChatCompletionRequest = ChatCompletionRequest::new(
            self.model.clone(),
            messages,
            json_mode.then(|| ResponseFormat::new("json_object".to_string())),
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .context("[OpenAiRepositoryImpl->chat] request failed")?;

        let status: StatusCode = response.status();

        if !status.is_success() {
            let error_body: String = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "[OpenAI Error][OpenAiRepositoryImpl->chat] response status is failed: {} {}",
                status,
                error_body
            ));
        }

        let completion: ChatCompletionResponse = response
            .json::<ChatCompletionResponse>()
            .await
            .context("[OpenAiRepositoryImpl->chat] Failed to parse completion response")?;

        completion
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("[OpenAiRepositoryImpl->chat] completion has no message content"))
    }
}

#[doc = "차트 추천 요청 프롬프트"]
pub fn build_recommendation_prompt(data_summary: &str, column_names: &[String]) -> String {
    let columns: String =
        serde_json::to_string(column_names).unwrap_or_else(|_| column_names.join(", "));

    format!(
        r#"You are a data visualization expert. Analyze this data and recommend the best chart type.

Data Summary:
{data_summary}

Columns: {columns}

Based on this data, provide:
1. The best chart type (bar, line, or dual_axis)
2. Which columns should be on which axis
3. Brief reasoning for your choice

Respond in JSON format:
{{
    "chart_type": "bar|line|dual_axis",
    "x_column": "column_name",
    "y1_column": "column_name",
    "y2_column": "column_name or null",
    "reasoning": "brief explanation"
}}"#
    )
}

#[doc = r#"
    LLM 응답 본문을 ChartRecommendation 으로 파싱하는 함수.
    json_object 모드가 아닌 호환 서버가 ```json 코드블록으로 감싸서 주는 경우도 허용한다.
"#]
pub fn parse_recommendation(content: &str) -> Result<ChartRecommendation, anyhow::Error> {
    let trimmed: &str = content.trim();

    let body: &str = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str::<ChartRecommendation>(body).with_context(|| {
        format!(
            "[parse_recommendation] LLM response is not a valid chart recommendation: {}",
            content
        )
    })
}

#[async_trait]
impl LlmRepository for OpenAiRepositoryImpl {
    async fn recommend_chart(
        &self,
        data_summary: &str,
        column_names: &[String],
    ) -> Result<ChartRecommendation, anyhow::Error> {
        let messages: Vec<ChatMessage> = vec![
            ChatMessage::new("system".to_string(), SYSTEM_MESSAGE.to_string()),
            ChatMessage::new(
                "user".to_string(),
                build_recommendation_prompt(data_summary, column_names),
            ),
        ];

        let content: String = self.chat(messages, true).await?;

        parse_recommendation(&content)
    }
}
