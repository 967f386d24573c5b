use clap::Parser;
use duck_dock::utils::logger;
use duck_dock::{CliConfig, FleetEngine, StdoutReporter};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting duck-dock working checks");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let reporter = StdoutReporter::new();
    let mut engine = FleetEngine::new(reporter);

    match engine.run() {
        Ok(()) => {
            tracing::info!("✅ Working checks completed");
        }
        Err(e) => {
            tracing::error!("❌ Working checks failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
