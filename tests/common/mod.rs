//! テスト共通ヘルパー

#![allow(dead_code)]

use async_trait::async_trait;
use character_profiler::{InlineImage, VisionModel};
use character_profiler_common::{Error, Result, SafetyPolicy};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
pub const JPEG_SIGNATURE: &[u8] = b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00";

/// 固定の応答（または失敗）を返す偽モデル
pub struct CannedModel {
    reply: std::result::Result<String, String>,
    calls: AtomicUsize,
}

impl CannedModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionModel for CannedModel {
    async fn generate(
        &self,
        _prompt: &str,
        _image: InlineImage<'_>,
        _safety: &SafetyPolicy,
    ) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(Error::Transport)
    }
}

/// 一時ディレクトリにファイルを書き出す
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("テストファイル作成失敗");
    path
}
