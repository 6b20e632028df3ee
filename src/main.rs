use clap::Parser;
use daily_kit::utils::{logger, validation::Validate};
use daily_kit::{CliConfig, Settings};

fn main() {
    let config = CliConfig::parse();

    // 載入設定檔
    let settings = match &config.config {
        Some(path) => match Settings::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    // 驗證設定 (日誌尚未初始化，直接輸出到 stderr)
    if let Err(e) = settings.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    // 初始化日誌
    let verbose = config.verbose || settings.logging.verbose;
    let filter = settings.logging.filter.as_deref();
    if config.log_json || settings.logging.json {
        logger::init_json_logger(verbose, filter);
    } else {
        logger::init_cli_logger(verbose, filter);
    }

    tracing::debug!("CLI config: {:?}", config);

    match daily_kit::app::commands::run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ Command failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}
