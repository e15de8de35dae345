use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// 伺服器最終使用的設定 (TOML 檔或 CLI 參數解析後)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub cors: CorsSettings,
    pub monitoring: MonitoringSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub slow_request_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            slow_request_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: LogFormat,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    pub enabled: bool,
    /// 空陣列代表允許所有來源
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringSettings {
    pub enabled: bool,
}

impl Settings {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ROMAN_API_PORT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.server.slow_request_ms)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_listen_host("server.host", &self.server.host)?;
        validation::validate_listen_port("server.port", self.server.port)?;
        validation::validate_millis("server.slow_request_ms", self.server.slow_request_ms, 60_000)?;

        for origin in &self.cors.allowed_origins {
            validation::validate_origin("cors.allowed_origins", origin)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 9090
slow_request_ms = 250

[logging]
format = "json"
verbose = true

[cors]
enabled = true
allowed_origins = ["http://localhost:3000"]

[monitoring]
enabled = true
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();

        assert_eq!(settings.bind_address(), "127.0.0.1:9090");
        assert_eq!(settings.slow_request_threshold(), Duration::from_millis(250));
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert!(settings.logging.verbose);
        assert_eq!(settings.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert!(settings.monitoring.enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings = Settings::from_toml_str("[server]\nport = 3001\n").unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3001);
        assert!(settings.cors.enabled);
        assert!(settings.cors.allowed_origins.is_empty());
        assert_eq!(settings.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_API_TEST_HOST", "10.0.0.5");

        let toml_content = r#"
[server]
host = "${ROMAN_API_TEST_HOST}"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.server.host, "10.0.0.5");

        std::env::remove_var("ROMAN_API_TEST_HOST");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[server]
port = 0

[cors]
allowed_origins = ["not-a-url"]
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert!(settings.validate().is_err());

        let bad_origin = Settings::from_toml_str("[cors]\nallowed_origins = [\"ftp://x\"]\n").unwrap();
        assert!(bad_origin.validate().is_err());

        let trailing_slash =
            Settings::from_toml_str("[cors]\nallowed_origins = [\"http://localhost:3000/\"]\n").unwrap();
        assert!(trailing_slash.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Settings::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, AppError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"localhost\"\nport = 8181\n")
            .unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.bind_address(), "localhost:8181");
    }
}
