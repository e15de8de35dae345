pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::client::{ClientError, RomanClient};
pub use adapters::http::{ApiServer, AppState};
pub use adapters::metrics::PrometheusMetrics;
pub use config::{CliConfig, Settings};
pub use crate::core::{converter::convert, service::ConversionService, validator::validate};
pub use utils::error::{AppError, Result};
