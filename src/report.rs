//! 端末表示

use character_profiler_common::{AnalysisOutcome, PersonaResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SECTION_ICONS: [&str; 4] = ["🗣", "🚶", "👗", "🧠"];

/// ペルソナを見出し付きで整形
pub fn render_persona(persona: &PersonaResult) -> String {
    persona
        .sections()
        .iter()
        .zip(SECTION_ICONS)
        .map(|((title, body), icon)| format!("{} {}\n   {}", icon, title, body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_outcome(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Success(persona) => render_persona(persona),
        AnalysisOutcome::Failure(message) => format!("✘ {}", message),
    }
}

/// モデル応答待ちのスピナー
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
