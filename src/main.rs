use clap::Parser;
use roman_api::config::LogFormat;
use roman_api::utils::{logger, monitor::SystemMonitor, validation::Validate};
use roman_api::{ApiServer, AppState, CliConfig, PrometheusMetrics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            // logger 尚未初始化
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    match settings.logging.format {
        LogFormat::Compact => logger::init_cli_logger(settings.logging.verbose),
        LogFormat::Json => logger::init_json_logger(settings.logging.verbose),
    }

    tracing::info!("Starting roman-api");
    tracing::debug!("Resolved settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor = SystemMonitor::new(settings.monitoring.enabled);
    if monitor.is_enabled() {
        tracing::info!("🔍 Process monitoring enabled");
        monitor.log_stats("Startup");
    }

    let metrics = PrometheusMetrics::new()?.into_shared();
    let state = AppState::new(metrics, monitor);
    let server = ApiServer::new(&settings, state)?;

    if let Err(e) = server.run().await {
        tracing::error!("❌ Server failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}
