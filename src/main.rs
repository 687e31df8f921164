use anyhow::Context;
use clap::Parser;
use number_classifier::core::ConfigProvider;
use number_classifier::utils::{logger, validation::Validate};
use number_classifier::{server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting number-classifier v{}", env!("CARGO_PKG_VERSION"));

    // 合併設定檔並驗證
    let config = config.resolve().context("failed to load configuration file")?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e).context("invalid configuration");
    }

    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }
    tracing::info!(
        bind = %config.bind_address(),
        fact_api = %config.fact_api_base(),
        fact_timeout = ?config.fact_timeout(),
        "Configuration loaded"
    );

    if let Err(e) = server::serve(&config).await {
        tracing::error!("❌ Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
