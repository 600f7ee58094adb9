//! セーフティ設定
//!
//! 全リクエストに付与する固定のブロック閾値。ユーザー設定不可。

use serde::{Deserialize, Serialize};

/// 有害カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

/// ブロック閾値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

/// カテゴリと閾値の組
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// セーフティポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyPolicy {
    settings: [SafetySetting; 4],
}

/// ペルソナ解析で使う唯一のポリシー（4カテゴリすべて中以上をブロック）
pub const PERSONA_SAFETY_POLICY: SafetyPolicy = SafetyPolicy {
    settings: [
        SafetySetting {
            category: HarmCategory::Harassment,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        },
        SafetySetting {
            category: HarmCategory::HateSpeech,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        },
        SafetySetting {
            category: HarmCategory::SexuallyExplicit,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        },
        SafetySetting {
            category: HarmCategory::DangerousContent,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        },
    ],
};

impl SafetyPolicy {
    pub fn settings(&self) -> &[SafetySetting] {
        &self.settings
    }

    pub fn threshold_for(&self, category: HarmCategory) -> Option<HarmBlockThreshold> {
        self.settings
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.threshold)
    }
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        PERSONA_SAFETY_POLICY
    }
}
