use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Url;
use tracing::info;

/// 面板配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 商店 API
    pub api: ApiConfig,
    /// 状态通知
    pub notification: NotificationConfig,
    /// 日志
    pub logging: LoggingConfig,
    /// 开发时使用的模拟后端
    pub mock_server: MockServerConfig,
}

/// 商店 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// 所有端点拼接的基础 URL
    pub base_url: String,
    /// 单个请求超时，未设置时不限
    pub timeout_seconds: Option<u64>,
}

/// 通知配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// 状态消息显示后自动隐藏的延迟
    pub hide_after_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 模拟后端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { hide_after_ms: 5000 }
    }
}

impl NotificationConfig {
    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(self.hide_after_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for MockServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ClientConfig {
    /// 从 TOML 文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: ClientConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 应用 `LOJA_API_URL`、`LOJA_LOG_LEVEL` 和 `LOJA_MOCK_PORT` 环境变量
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = env::var("LOJA_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(level) = env::var("LOJA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(port) = env::var("LOJA_MOCK_PORT") {
            self.mock_server.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("invalid LOJA_MOCK_PORT: {}", port)))?;
        }
        Ok(())
    }

    /// 验证配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url)
            .map_err(|e| ConfigError::Validation(format!("invalid api.base_url {}: {}", self.api.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::Validation(format!(
                "api.base_url cannot be used as a base: {}",
                self.api.base_url
            )));
        }
        if self.api.timeout_seconds == Some(0) {
            return Err(ConfigError::Validation("api.timeout_seconds must be greater than 0".to_string()));
        }

        if self.notification.hide_after_ms == 0 {
            return Err(ConfigError::Validation(
                "notification.hide_after_ms must be greater than 0".to_string(),
            ));
        }

        if self.mock_server.bind_address.is_empty() {
            return Err(ConfigError::Validation("mock_server.bind_address must not be empty".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "invalid log level: {}, expected one of {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Validation(String),
}

/// 从 `$LOJA_CONFIG` 或默认路径加载配置，找不到时使用默认值，
/// 然后应用环境变量覆盖并验证
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    let mut config = match env::var("LOJA_CONFIG") {
        Ok(path) => {
            info!("loading config from {}", path);
            ClientConfig::load_from_file(&path)?
        }
        Err(_) => load_from_default_paths()?,
    };

    config.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}

fn load_from_default_paths() -> Result<ClientConfig, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            info!("loading config from {}", path);
            return ClientConfig::load_from_file(path);
        }
    }

    Ok(ClientConfig::default())
}
