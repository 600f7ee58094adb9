//! 対話モード
//!
//! 画像選択 → 解析 → 「別の画像を試す」でリセット、を繰り返す。

use crate::analyzer::{PersonaAnalyzer, VisionModel};
use crate::error::Result;
use crate::report;
use crate::session::Session;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

/// 対話アクション
enum NextStep {
    /// 別の画像を試す
    Another,
    /// 終了
    Quit,
}

/// 対話式でキャラクターを解析
pub async fn run_interactive<M: VisionModel>(analyzer: &PersonaAnalyzer<M>) -> Result<()> {
    let mut session = Session::new();

    println!("🎭 キャラクター画像を解析します（JPG/PNG のみ）");
    println!("---");

    loop {
        let input: String = Input::new()
            .with_prompt("画像ファイルのパス（空で終了）")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        match session.select_image(&PathBuf::from(input)).await {
            Ok(selected) => println!("✔ {}", selected.summary()),
            Err(_) => {
                // 選択中の画像はそのまま残る
                if let Some(message) = session.error() {
                    println!("✘ {}", message);
                }
                continue;
            }
        }

        let confirmed = Confirm::new()
            .with_prompt("Analyze Character?")
            .default(true)
            .interact()?;
        if !confirmed {
            continue;
        }

        let spinner = report::spinner("Analyzing character traits...");
        let outcome = session.analyze(analyzer).await?;
        spinner.finish_and_clear();

        println!("\n{}\n", report::render_outcome(&outcome));

        match ask_next_step()? {
            NextStep::Another => session.reset(),
            NextStep::Quit => break,
        }
    }

    println!("👋 終了します");
    Ok(())
}

fn ask_next_step() -> Result<NextStep> {
    let another = Confirm::new()
        .with_prompt("Try Another Image?")
        .default(true)
        .interact()?;

    Ok(if another { NextStep::Another } else { NextStep::Quit })
}
