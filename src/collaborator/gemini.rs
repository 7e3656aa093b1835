//! Gemini `generateContent` REST client.
//!
//! One POST per call, authorised with the `x-goog-api-key` header. The
//! credential is held in memory only and never written to logs.

use super::Collaborator;
use crate::config::AppSettings;
use crate::error::RequestError;
use futures::future::{BoxFuture, FutureExt};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP client for the Gemini API
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    search_grounding: bool,
}

impl GeminiClient {
    /// Create a client for `model` at `base_url`.
    ///
    /// A missing key is accepted here and reported on the first call.
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RequestError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(GeminiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            search_grounding: false,
        })
    }

    pub fn from_settings(settings: &AppSettings, api_key: Option<String>) -> Result<Self, RequestError> {
        let client = Self::new(
            &settings.api_base_url,
            &settings.model,
            api_key,
            Duration::from_secs(settings.request_timeout_secs),
        )?;
        Ok(client.with_search_grounding(settings.search_grounding))
    }

    /// Attach the search tool to free-text requests
    pub fn with_search_grounding(mut self, enabled: bool) -> Self {
        self.search_grounding = enabled;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(&self, prompt: &str, response_schema: Option<&Value>) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });

        match response_schema {
            Some(schema) => {
                body["generationConfig"] = json!({
                    "responseMimeType": "application/json",
                    "responseSchema": schema,
                });
            }
            // Search tools cannot be combined with a response schema
            None if self.search_grounding => {
                body["tools"] = json!([{ "google_search": {} }]);
            }
            None => {}
        }
        body
    }

    async fn generate_content(
        &self,
        prompt: String,
        response_schema: Option<Value>,
    ) -> Result<String, RequestError> {
        let api_key = self.api_key.as_deref().ok_or(RequestError::MissingCredential)?;
        let body = self.request_body(&prompt, response_schema.as_ref());

        log::debug!(
            "[GEMINI] POST models/{}:generateContent (structured={}, grounding={}, prompt={} chars)",
            self.model,
            response_schema.is_some(),
            self.search_grounding && response_schema.is_none(),
            prompt.len()
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| {
                    if text.trim().is_empty() {
                        status.canonical_reason().unwrap_or("Unknown error").to_string()
                    } else {
                        text.clone()
                    }
                });
            log::warn!("[GEMINI] API error ({}): {}", status.as_u16(), message);
            return Err(RequestError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| RequestError::Transport(format!("Unexpected response envelope: {}", e)))?;
        let reply = extract_text(parsed)?;
        log::debug!("[GEMINI] Received {} chars", reply.len());
        Ok(reply)
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: GenerateContentResponse) -> Result<String, RequestError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(RequestError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(RequestError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_default();
        return match reason.as_str() {
            "SAFETY" | "RECITATION" | "PROHIBITED_CONTENT" => Err(RequestError::Blocked(reason.clone())),
            _ => Err(RequestError::EmptyResponse),
        };
    }
    Ok(text)
}

impl Collaborator for GeminiClient {
    fn generate(
        &self,
        prompt: String,
        response_schema: Option<Value>,
    ) -> BoxFuture<'static, Result<String, RequestError>> {
        let client = self.clone();
        async move { client.generate_content(prompt, response_schema).await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const PATH: &str = "/v1beta/models/gemini-test:generateContent";

    fn client(url: &str, key: Option<&str>) -> GeminiClient {
        GeminiClient::new(url, "gemini-test", key.map(String::from), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_structured_request_returns_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{
                        "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] },
                        "finishReason": "STOP"
                    }]
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let reply = client(&server.url(), Some("test-key"))
            .generate("compare".into(), Some(json!({ "type": "OBJECT" })))
            .await
            .unwrap();
        assert_eq!(reply, "{\"a\":1}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_surfaces_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(429)
            .with_body(json!({ "error": { "code": 429, "message": "Quota exceeded" } }).to_string())
            .create_async()
            .await;

        let err = client(&server.url(), Some("k"))
            .generate("compare".into(), None)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RequestError::Api {
                status: 429,
                message: "Quota exceeded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_blocked_prompt() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string())
            .create_async()
            .await;

        let err = client(&server.url(), Some("k"))
            .generate("compare".into(), None)
            .await
            .unwrap_err();
        assert_eq!(err, RequestError::Blocked("SAFETY".to_string()));
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        let err = client(&server.url(), None)
            .generate("compare".into(), None)
            .await
            .unwrap_err();
        assert_eq!(err, RequestError::MissingCredential);
        mock.assert_async().await;
    }

    #[test]
    fn test_free_text_body_with_grounding() {
        let c = client("http://localhost", Some("k")).with_search_grounding(true);
        let body = c.request_body("hello", None);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["tools"], json!([{ "google_search": {} }]));
        assert!(body.get("generationConfig").is_none());

        let structured = c.request_body("hello", Some(&json!({ "type": "OBJECT" })));
        assert!(structured.get("tools").is_none());
    }

    #[test]
    fn test_blank_key_is_no_credential() {
        assert!(!client("http://localhost", Some("  ")).has_credential());
        assert_eq!(
            client("http://localhost/", Some("k")).endpoint(),
            "http://localhost/v1beta/models/gemini-test:generateContent"
        );
    }
}
