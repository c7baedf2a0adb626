use aster::config::Settings;
use aster::utils::error::AsterError;
use aster::utils::{logger, validation::Validate};
use aster::{CliConfig, InputProcessor, ProcessOutcome, Processor};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 設定錯誤時尚未初始化日誌，直接輸出到 stderr
    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    init_logging(&settings);
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    let processor = InputProcessor::new();
    let result = match processor.process(config.input.as_deref()) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(
                "❌ Processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    };

    let outcome = ProcessOutcome {
        input: config.input.unwrap_or_default(),
        result,
    };
    let rendered = match settings.format.render(&outcome) {
        Ok(rendered) => rendered,
        Err(e) => exit_with(&e),
    };

    tracing::info!("✅ Processed {} bytes as {}", outcome.input.len(), settings.format);
    println!("{}", rendered);
}

fn init_logging(settings: &Settings) {
    let level = settings.log_level.as_deref();
    if settings.json_logs {
        logger::init_json_logger(settings.verbose, level);
    } else {
        logger::init_cli_logger(settings.verbose, level);
    }
}

fn exit_with(e: &AsterError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}
