//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 解析境界の内側でのみ区別され、呼び出し元には
/// 一律の失敗メッセージとして返される。
#[derive(Error, Debug)]
pub enum Error {
    /// JPEG/PNG以外のファイルが選択された
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Data URLからBase64ペイロードを取り出せない
    #[error("image has no extractable payload")]
    MissingPayload,

    /// モデル呼び出しの失敗（通信・認証・クォータ・セーフティブロック）
    #[error("model call failed: {0}")]
    Transport(String),

    /// 応答に `{...}` が含まれていない
    #[error("no JSON object found in model reply")]
    NoJsonObject,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// ログ用の分類名
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnsupportedType(_) | Error::MissingPayload => "validation",
            Error::Transport(_) => "transport",
            Error::NoJsonObject | Error::Json(_) => "malformed_reply",
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
