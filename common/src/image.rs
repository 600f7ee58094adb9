//! 画像エンコード（Data URL）
//!
//! アップロードされた画像を `data:<mime>;base64,<payload>` 形式に変換する。
//! プレビュー表示とリクエスト本文の両方にそのまま使える。

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

/// 受け付けるMIMEタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }

    /// 宣言されたMIMEタイプを検証
    pub fn from_mime(mime: &str) -> Result<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(ImageMime::Jpeg),
            "image/png" => Ok(ImageMime::Png),
            other => Err(Error::UnsupportedType(other.to_string())),
        }
    }

    /// 拡張子からMIMEタイプを決定（ファイル選択ダイアログと同じ扱い）
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageMime::Jpeg),
            "png" => Ok(ImageMime::Png),
            other => Err(Error::UnsupportedType(format!(".{}", other))),
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// エンコード済み画像
///
/// 生成後は不変。MIMEタイプは必ずJPEG/PNGのいずれか。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    mime: ImageMime,
    data_url: String,
}

impl EncodedImage {
    /// バイト列からData URLを生成
    pub fn encode(mime: ImageMime, bytes: &[u8]) -> Self {
        let data_url = format!("data:{};base64,{}", mime.as_str(), STANDARD.encode(bytes));
        Self { mime, data_url }
    }

    /// 既存のData URL文字列を検証して取り込む
    ///
    /// MIMEタイプがJPEG/PNG以外なら `UnsupportedType`、
    /// ペイロードが空なら `MissingPayload`。
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        let mime = extract_mime_type_from_data_url(data_url).ok_or(Error::MissingPayload)?;
        let mime = ImageMime::from_mime(mime)?;

        match extract_base64_from_data_url(data_url) {
            Some(payload) if !payload.is_empty() => Ok(Self {
                mime,
                data_url: data_url.to_string(),
            }),
            _ => Err(Error::MissingPayload),
        }
    }

    pub fn mime(&self) -> ImageMime {
        self.mime
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// プレフィックスを除いたBase64ペイロード
    pub fn payload(&self) -> Result<&str> {
        extract_base64_from_data_url(&self.data_url)
            .filter(|p| !p.is_empty())
            .ok_or(Error::MissingPayload)
    }
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
pub fn extract_mime_type_from_data_url(data_url: &str) -> Option<&str> {
    data_url
        .strip_prefix("data:")
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
}
