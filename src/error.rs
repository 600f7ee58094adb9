use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("Please upload a JPG or PNG image ({0})")]
    UnsupportedImage(String),

    #[error("Please select an image first")]
    NoImageSelected,

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] character_profiler_common::Error),
}

pub type Result<T> = std::result::Result<T, ProfilerError>;
