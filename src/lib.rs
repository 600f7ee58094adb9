//! Character Profiler
//!
//! キャラクター画像を取り込み、マルチモーダルモデルでペルソナを推定する。

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod interactive;
pub mod logging;
pub mod report;
pub mod session;

pub use analyzer::{GeminiClient, InlineImage, PersonaAnalyzer, VisionModel};
pub use session::{Session, SessionStatus};
