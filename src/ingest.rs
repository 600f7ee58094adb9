//! 画像の取り込み
//!
//! 選択されたファイルの種類を検証し、Data URLへ変換する。
//! ファイル読み込みがこのモジュール唯一の待機ポイント。

use crate::error::{ProfilerError, Result};
use character_profiler_common::{EncodedImage, Error, ImageMime};
use image::ImageFormat;
use std::path::Path;
use tracing::{debug, warn};

/// 選択中の画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub byte_len: usize,
    pub image: EncodedImage,
}

impl SelectedImage {
    /// プレビュー用の1行サマリ
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {} bytes, data URL {} chars)",
            self.file_name,
            self.image.mime(),
            self.byte_len,
            self.image.data_url().len()
        )
    }
}

/// 拡張子から宣言MIMEタイプを決定
pub fn declared_mime(path: &Path) -> Result<ImageMime> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();

    if ext.is_empty() {
        return Err(ProfilerError::UnsupportedImage("拡張子なし".into()));
    }

    ImageMime::from_extension(&ext).map_err(|_| ProfilerError::UnsupportedImage(format!(".{}", ext)))
}

/// 画像ファイルを選択して取り込む
///
/// JPEG/PNG以外は読み込み前に拒否する。
pub async fn select_image(path: &Path) -> Result<SelectedImage> {
    let mime = declared_mime(path)?;

    if !path.is_file() {
        return Err(ProfilerError::FileNotFound(path.display().to_string()));
    }

    let bytes = tokio::fs::read(path).await?;
    if bytes.is_empty() {
        return Err(Error::MissingPayload.into());
    }

    check_content(path, mime, &bytes);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    debug!(file = %file_name, mime = %mime, bytes = bytes.len(), "画像を取り込みました");

    Ok(SelectedImage {
        file_name,
        byte_len: bytes.len(),
        image: EncodedImage::encode(mime, &bytes),
    })
}

/// 中身の形式と宣言MIMEタイプの食い違いを警告（宣言側を優先）
fn check_content(path: &Path, declared: ImageMime, bytes: &[u8]) {
    let sniffed = match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg) => Some(ImageMime::Jpeg),
        Ok(ImageFormat::Png) => Some(ImageMime::Png),
        _ => None,
    };

    match sniffed {
        Some(actual) if actual == declared => {}
        Some(actual) => warn!(
            path = %path.display(),
            declared = %declared,
            actual = %actual,
            "拡張子と画像形式が一致しません"
        ),
        None => warn!(path = %path.display(), declared = %declared, "画像形式を判定できません"),
    }
}
