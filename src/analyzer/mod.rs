//! ペルソナ解析
//!
//! 画像1枚につき外部モデルを1回だけ呼び出し、応答をPersonaResultへ変換する。
//! 失敗はすべてこの境界で一律の失敗結果に変換され、詳細はログにのみ残る。

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use character_profiler_common::{
    parse_persona_response, AnalysisOutcome, EncodedImage, Error, ImageMime, PersonaResult,
    Result, SafetyPolicy, PERSONA_PROMPT, PERSONA_SAFETY_POLICY,
};
use tracing::{debug, error, info};

/// リクエストに埋め込む画像（プレフィックス除去済み）
#[derive(Debug, Clone, Copy)]
pub struct InlineImage<'a> {
    pub mime: ImageMime,
    pub data: &'a str,
}

/// 画像付きプロンプトからテキストを生成するモデル
#[async_trait]
pub trait VisionModel: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        image: InlineImage<'_>,
        safety: &SafetyPolicy,
    ) -> Result<String>;
}

/// ペルソナ解析クライアント
pub struct PersonaAnalyzer<M> {
    model: M,
}

impl<M: VisionModel> PersonaAnalyzer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Data URL文字列を受け取って解析
    pub async fn analyze_character_image(&self, data_url: &str) -> AnalysisOutcome {
        match EncodedImage::from_data_url(data_url) {
            Ok(image) => self.analyze(&image).await,
            Err(e) => Self::fail(e),
        }
    }

    /// 解析を実行（パニックせず必ずタグ付き結果を返す）
    pub async fn analyze(&self, image: &EncodedImage) -> AnalysisOutcome {
        match self.try_analyze(image).await {
            Ok(persona) => {
                info!("ペルソナ解析完了");
                AnalysisOutcome::Success(persona)
            }
            Err(e) => Self::fail(e),
        }
    }

    /// 区別可能なエラーのまま解析を実行
    pub async fn try_analyze(&self, image: &EncodedImage) -> Result<PersonaResult> {
        let inline = InlineImage {
            mime: image.mime(),
            data: image.payload()?,
        };

        debug!(mime = %inline.mime, payload_len = inline.data.len(), "モデル呼び出し");
        let reply = self
            .model
            .generate(PERSONA_PROMPT, inline, &PERSONA_SAFETY_POLICY)
            .await?;
        debug!(reply_len = reply.len(), "モデル応答受信");

        parse_persona_response(&reply)
    }

    fn fail(e: Error) -> AnalysisOutcome {
        error!(kind = e.kind(), error = %e, "Error analyzing image");
        AnalysisOutcome::failure()
    }
}
