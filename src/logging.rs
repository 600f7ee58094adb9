//! 運用者向けログ（stderr）
//!
//! ユーザー向けの進捗表示は stdout の println! で行い、
//! エラー詳細などはこちらの tracing 出力にのみ流す。

use tracing_subscriber::EnvFilter;

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{level},hyper=warn,hyper_util=warn,reqwest=warn")
}

/// サブスクライバを初期化（RUST_LOG があればそちらを優先）
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
