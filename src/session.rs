//! 解析セッション
//!
//! 選択画像・結果・エラーをそれぞれ1枠だけ保持する。
//! 状態遷移: Idle → Submitted → (Succeeded | Failed) → Idle（reset）

use crate::analyzer::{PersonaAnalyzer, VisionModel};
use crate::error::{ProfilerError, Result};
use crate::ingest::{self, SelectedImage};
use character_profiler_common::{AnalysisOutcome, PersonaResult};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    Submitted,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    selected: Option<SelectedImage>,
    result: Option<PersonaResult>,
    error: Option<String>,
    status: SessionStatus,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画像を選択（前の選択・結果は置き換え）
    ///
    /// 失敗時はエラーメッセージだけを記録し、選択中の画像と結果はそのまま残す。
    pub async fn select_image(&mut self, path: &Path) -> Result<&SelectedImage> {
        match ingest::select_image(path).await {
            Ok(selected) => {
                info!(file = %selected.file_name, "画像を選択");
                self.result = None;
                self.error = None;
                self.status = SessionStatus::Idle;
                Ok(self.selected.insert(selected))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// 選択中の画像を解析
    ///
    /// `&mut self` を取るため、解析中に2件目を投入することはできない。
    pub async fn analyze<M: VisionModel>(
        &mut self,
        analyzer: &PersonaAnalyzer<M>,
    ) -> Result<AnalysisOutcome> {
        let Some(selected) = self.selected.as_ref() else {
            self.error = Some(ProfilerError::NoImageSelected.to_string());
            return Err(ProfilerError::NoImageSelected);
        };

        self.status = SessionStatus::Submitted;
        self.error = None;

        let outcome = analyzer.analyze(&selected.image).await;
        match &outcome {
            AnalysisOutcome::Success(persona) => {
                self.result = Some(persona.clone());
                self.status = SessionStatus::Succeeded;
            }
            AnalysisOutcome::Failure(message) => {
                self.error = Some(message.clone());
                self.status = SessionStatus::Failed;
            }
        }

        Ok(outcome)
    }

    /// すべてを初期状態に戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&PersonaResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == SessionStatus::Submitted
    }
}
