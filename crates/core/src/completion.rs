use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_MAX_TOKENS: u32 = 50_000;

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for an OpenAI-compatible `chat/completions` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Sampling settings for a completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("completion response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("completion response has no choices")]
    NoChoices,

    #[error("first completion choice has no message content")]
    MissingContent,
}

/// Assemble the system and user messages into a request body.
pub fn build_request(prompt: &str, system: &str, options: &RequestOptions) -> CompletionRequest {
    CompletionRequest {
        model: options.model.clone(),
        messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
        temperature: options.temperature,
        max_tokens: options.max_tokens,
    }
}

/// Pull `choices[0].message.content` out of a raw response body.
pub fn extract_content(body: &str) -> Result<String, ResponseError> {
    let response: CompletionResponse = serde_json::from_str(body)?;

    response
        .choices
        .into_iter()
        .next()
        .ok_or(ResponseError::NoChoices)?
        .message
        .content
        .ok_or(ResponseError::MissingContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_request_with_defaults() {
        let request = build_request("split me", "be brief", &RequestOptions::default());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "deepseek-r1-distill-llama-70b",
                "messages": [
                    { "role": "system", "content": "be brief" },
                    { "role": "user", "content": "split me" }
                ],
                "temperature": 0.1f32,
                "max_tokens": 50000
            })
        );
    }

    #[test]
    fn test_build_request_with_overrides() {
        let options = RequestOptions {
            model: "qwen-qwq-32b".to_string(),
            temperature: 0.5,
            max_tokens: 1024,
        };
        let request = build_request("p", "s", &options);

        assert_eq!(request.model, "qwen-qwq-32b");
        assert_eq!(request.temperature, 0.5);
        assert_eq!(request.max_tokens, 1024);
        assert_eq!(request.messages[0], ChatMessage::system("s"));
        assert_eq!(request.messages[1], ChatMessage::user("p"));
    }

    #[test]
    fn test_extract_content_first_choice() {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "first" }, "finish_reason": "stop" },
                { "index": 1, "message": { "role": "assistant", "content": "second" }, "finish_reason": "stop" }
            ],
            "usage": { "total_tokens": 12 }
        })
        .to_string();

        assert_eq!(extract_content(&body).unwrap(), "first");
    }

    #[test]
    fn test_extract_content_no_choices() {
        let body = json!({ "choices": [] }).to_string();
        assert!(matches!(
            extract_content(&body),
            Err(ResponseError::NoChoices)
        ));

        let body = json!({ "error": { "message": "nope" } }).to_string();
        assert!(matches!(
            extract_content(&body),
            Err(ResponseError::NoChoices)
        ));
    }

    #[test]
    fn test_extract_content_missing_content() {
        let body = json!({ "choices": [{ "message": { "role": "assistant" } }] }).to_string();
        assert!(matches!(
            extract_content(&body),
            Err(ResponseError::MissingContent)
        ));
    }

    #[test]
    fn test_extract_content_invalid_json() {
        assert!(matches!(
            extract_content("<html>bad gateway</html>"),
            Err(ResponseError::Json(_))
        ));
    }
}
