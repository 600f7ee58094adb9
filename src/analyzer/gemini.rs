//! Gemini API連携
//!
//! `generateContent` を1回だけ呼び出す。リトライはしない。
//! タイムアウトはHTTPクライアントの既定値に任せる。

use super::{InlineImage, VisionModel};
use crate::config::Config;
use async_trait::async_trait;
use character_profiler_common::{Error, Result, SafetyPolicy, SafetySetting};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const ERROR_BODY_LIMIT: usize = 500;

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Gemini クライアント
///
/// 認証情報は構築時に渡す（環境変数を都度読まない）。
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// 設定から構築（APIキー未設定でもエラーにはしない）
    pub fn from_config(config: &Config) -> Self {
        let api_key = config.api_key();
        if api_key.is_empty() {
            warn!(
                "{} が設定されていません。API呼び出しは失敗します",
                crate::config::API_KEY_ENV
            );
        }
        Self::new(api_key, config.model.clone())
    }

    /// 接続先を差し替える（テスト・プロキシ用）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// リクエスト本文を構築
    pub fn build_request(prompt: &str, image: InlineImage<'_>, safety: &SafetyPolicy) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime.as_str().to_string(),
                            data: image.data.to_string(),
                        },
                    },
                ],
            }],
            safety_settings: safety.settings().to_vec(),
        }
    }

    /// エラーメッセージからAPIキーを伏せる
    fn redact(&self, text: &str) -> String {
        let key = self.api_key.trim();
        if key.is_empty() {
            return text.to_string();
        }
        text.replace(key, "[redacted]")
    }
}

#[async_trait]
impl VisionModel for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        image: InlineImage<'_>,
        safety: &SafetyPolicy,
    ) -> Result<String> {
        let request = Self::build_request(prompt, image, safety);
        debug!(model = %self.model, "Gemini API呼び出し");

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Transport(self.redact(&e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transport(format!(
                "API error {}: {}",
                status,
                truncate(&self.redact(&body), ERROR_BODY_LIMIT)
            )));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("invalid response body: {}", self.redact(&e.to_string()))))?;

        response_text(payload)
    }
}

/// 応答から本文テキストを取り出す（全パートを連結）
fn response_text(response: GeminiResponse) -> Result<String> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(Error::Transport(format!("prompt blocked: {}", reason)));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::Transport("empty response".into()))?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(Error::Transport("response blocked by safety settings".into()));
    }

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(Error::Transport(format!(
            "no text in response (finishReason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }

    Ok(text)
}

fn truncate(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}
