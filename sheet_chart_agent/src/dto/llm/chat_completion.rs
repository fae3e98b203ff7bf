use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, new)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

#[doc = "OpenAI 호환 POST /chat/completions 요청 본문"]
#[derive(Debug, Clone, Serialize, new)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    #[doc = "첫 번째 choice 의 메시지 본문"]
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_json_object_format() {
        let req: ChatCompletionRequest = ChatCompletionRequest::new(
            "gpt-4o-mini".to_string(),
            vec![ChatMessage::new("user".to_string(), "hi".to_string())],
            Some(ResponseFormat::new("json_object".to_string())),
        );

        let value: Value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "user");

        let plain: ChatCompletionRequest =
            ChatCompletionRequest::new("m".to_string(), vec![], None);
        assert!(serde_json::to_value(&plain).unwrap().get("response_format").is_none());
    }

    #[test]
    fn reads_first_choice_content() {
        let res: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "{\"a\": 1}"}}]}"#,
        )
        .unwrap();
        assert_eq!(res.first_content(), Some("{\"a\": 1}"));

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(empty.first_content(), None);
    }
}
