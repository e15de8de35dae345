pub mod toml_config;

pub use toml_config::{
    CorsSettings, LogFormat, LoggingSettings, MonitoringSettings, ServerSettings, Settings,
};

use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "roman-api")]
#[command(about = "HTTP service converting whole numbers (1-3999) to Roman numerals")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8080")]
    pub port: u16,

    #[arg(long, help = "TOML config file; replaces the other flags except --verbose/--monitor")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long = "no-cors", help = "Disable CORS headers")]
    pub no_cors: bool,

    #[arg(long = "allowed-origin", help = "Allowed CORS origin (repeatable)")]
    pub allowed_origins: Vec<String>,

    #[arg(long, default_value = "100")]
    pub slow_request_ms: u64,

    #[arg(long, help = "Report process CPU/memory on /health")]
    pub monitor: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn into_settings(self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                Settings::from_file(path)?
            }
            None => Settings {
                server: ServerSettings {
                    host: self.host,
                    port: self.port,
                    slow_request_ms: self.slow_request_ms,
                },
                logging: LoggingSettings {
                    format: self.log_format,
                    verbose: false,
                },
                cors: CorsSettings {
                    enabled: !self.no_cors,
                    allowed_origins: self.allowed_origins,
                },
                monitoring: MonitoringSettings::default(),
            },
        };

        settings.logging.verbose |= self.verbose;
        settings.monitoring.enabled |= self.monitor;
        Ok(settings)
    }
}
