use anyhow::Context;
use character_profiler::{cli, config, interactive, logging, report, GeminiClient, PersonaAnalyzer, Session};
use character_profiler_common::{PERSONA_PROMPT, PERSONA_SAFETY_POLICY};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Analyze { image, json, show_data_url } => {
            // --json のときは stdout をJSONだけにする
            let progress = |line: String| {
                if !json {
                    println!("{}", line);
                }
            };
            progress("🎭 character-profiler - ペルソナ解析\n".into());

            // 1. 画像取り込み
            progress("[1/2] 画像を読み込み中...".into());
            let mut session = Session::new();
            let selected = session.select_image(&image).await?;
            progress(format!("✔ {}\n", selected.summary()));
            if show_data_url {
                progress(format!("{}\n", selected.image.data_url()));
            }

            // 2. AI解析
            let analyzer = PersonaAnalyzer::new(GeminiClient::from_config(&config));
            progress(format!("[2/2] AI解析中... (model: {})", analyzer.model().model()));
            let spinner = report::spinner("Analyzing character traits...");
            let outcome = session.analyze(&analyzer).await?;
            spinner.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", report::render_outcome(&outcome));
            }

            if !outcome.is_success() {
                return Ok(ExitCode::FAILURE);
            }
            progress("\n✅ 解析完了".into());
        }

        Commands::Interactive => {
            let analyzer = PersonaAnalyzer::new(GeminiClient::from_config(&config));
            interactive::run_interactive(&analyzer).await?;
        }

        Commands::Prompt => {
            println!("プロンプト:\n{}\n", PERSONA_PROMPT);
            println!("セーフティ設定:");
            println!("{}", serde_json::to_string_pretty(PERSONA_SAFETY_POLICY.settings())?);
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  APIキー: {}", if config.api_key().is_empty() { "未設定" } else { "設定済み" });
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
