use car_price_api::utils::{logger, validation::Validate};
use car_price_api::{CliConfig, InferenceService, OnnxModel, PredictorError, Server};
use clap::Parser;
use std::sync::Arc;

async fn start(cli: &CliConfig) -> Result<(), PredictorError> {
    let config = cli.resolve()?;

    if config.logging.json {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }

    tracing::info!("🚀 Starting car-price-api");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    config.validate()?;

    // 模型只在啟動時載入一次, 之後唯讀共用
    let model = OnnxModel::load(&config.model.path)?;
    let service = Arc::new(InferenceService::new(model));

    let server = Server::bind(&config.bind_address(), service).await?;
    server.run().await
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = start(&cli).await {
        tracing::error!("❌ Startup failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}
