//! 解析結果の型定義
//!
//! CLIとライブラリ利用側で共有される型:
//! - PersonaResult: キャラクターのペルソナ（声・歩き方・服装・性格）
//! - AnalysisOutcome: 呼び出し元へ返す成功/失敗のタグ付き結果

use serde::{Deserialize, Serialize};

pub const DEFAULT_VOICE: &str = "No voice analysis available";
pub const DEFAULT_WALK: &str = "No walking style analysis available";
pub const DEFAULT_STYLE: &str = "No fashion style analysis available";
pub const DEFAULT_PERSONALITY: &str = "No personality analysis available";

/// 失敗時にユーザーへ見せる唯一のメッセージ
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze the image. Please try again.";

/// ペルソナ解析結果
///
/// 4フィールドは常に埋まっている（欠損はデフォルト文言で補完済み）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaResult {
    pub voice: String,        // 声・話し方
    pub walk: String,         // 歩き方
    pub style: String,        // 服装
    pub personality: String,  // 性格
}

impl Default for PersonaResult {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE.to_string(),
            walk: DEFAULT_WALK.to_string(),
            style: DEFAULT_STYLE.to_string(),
            personality: DEFAULT_PERSONALITY.to_string(),
        }
    }
}

impl PersonaResult {
    /// 表示用の (見出し, 本文) 一覧
    pub fn sections(&self) -> [(&'static str, &str); 4] {
        [
            ("Voice Style", self.voice.as_str()),
            ("Walking Style", self.walk.as_str()),
            ("Fashion Style", self.style.as_str()),
            ("Personality Traits", self.personality.as_str()),
        ]
    }
}

/// 解析の結果
///
/// JSONでは `{"success": true, "data": {...}}` または
/// `{"success": false, "error": "..."}` として表現される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "OutcomeWire", try_from = "OutcomeWire")]
pub enum AnalysisOutcome {
    Success(PersonaResult),
    Failure(String),
}

impl AnalysisOutcome {
    /// 一律の失敗メッセージを持つ失敗結果
    pub fn failure() -> Self {
        AnalysisOutcome::Failure(GENERIC_FAILURE_MESSAGE.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }

    pub fn persona(&self) -> Option<&PersonaResult> {
        match self {
            AnalysisOutcome::Success(persona) => Some(persona),
            AnalysisOutcome::Failure(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Success(_) => None,
            AnalysisOutcome::Failure(message) => Some(message),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct OutcomeWire {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<PersonaResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<AnalysisOutcome> for OutcomeWire {
    fn from(outcome: AnalysisOutcome) -> Self {
        match outcome {
            AnalysisOutcome::Success(persona) => OutcomeWire {
                success: true,
                data: Some(persona),
                error: None,
            },
            AnalysisOutcome::Failure(message) => OutcomeWire {
                success: false,
                data: None,
                error: Some(message),
            },
        }
    }
}

impl TryFrom<OutcomeWire> for AnalysisOutcome {
    type Error = String;

    fn try_from(wire: OutcomeWire) -> Result<Self, Self::Error> {
        match (wire.success, wire.data, wire.error) {
            (true, Some(persona), _) => Ok(AnalysisOutcome::Success(persona)),
            (true, None, _) => Err("success outcome without data".to_string()),
            (false, _, error) => Ok(AnalysisOutcome::Failure(
                error.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            )),
        }
    }
}
