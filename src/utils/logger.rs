use std::io::Stderr;
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StderrLayer<S> = fmt::Layer<S, DefaultFields, Format<Full>, fn() -> Stderr>;

/// 沒有設定 RUST_LOG 時使用的過濾指令，設定檔的 `logging.filter` 優先
pub fn default_directive(verbose: bool, configured: Option<&str>) -> String {
    match configured {
        Some(directive) => directive.to_string(),
        None if verbose => "daily_kit=debug,info".to_string(),
        None => "daily_kit=info".to_string(),
    }
}

fn build_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, configured)))
}

// stdout 留給命令輸出，日誌一律寫到 stderr
fn stderr_layer<S>() -> StderrLayer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr as fn() -> Stderr)
}

pub fn init_cli_logger(verbose: bool, configured: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, configured))
        .with(stderr_layer().compact())
        .init();
}

/// 機器可讀輸出時使用 JSON 格式
pub fn init_json_logger(verbose: bool, configured: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, configured))
        .with(stderr_layer().json())
        .init();
}
