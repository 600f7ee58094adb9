use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "character-profiler")]
#[command(about = "キャラクター画像からペルソナ（声・歩き方・服装・性格）を推定", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像1枚を解析してペルソナを表示
    Analyze {
        /// 画像ファイル（JPG/PNG）
        #[arg(required = true)]
        image: PathBuf,

        /// 結果を {success, data | error} 形式のJSONで出力
        #[arg(long)]
        json: bool,

        /// 取り込んだ画像のData URLを表示
        #[arg(long)]
        show_data_url: bool,
    },

    /// 対話的に画像を選んで解析
    Interactive,

    /// 送信されるプロンプトとセーフティ設定を表示
    Prompt,

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
