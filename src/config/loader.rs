//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `OLLAMA_BASE_URL`（仅覆盖 `llm.base_url`）
//! 2. 环境变量（前缀 `NOVELIST_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 模型服务地址的专用环境变量
pub const OLLAMA_BASE_URL_ENV: &str = "OLLAMA_BASE_URL";

/// 加载应用配置
///
/// # 环境变量示例
/// - `NOVELIST_SERVER__PORT=8080`
/// - `NOVELIST_EXPORT__DIR=/data/exports`
/// - `NOVELIST_EXPORT__LANGUAGE=en`
/// - `OLLAMA_BASE_URL=http://gpu-box:11434`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None, std::env::var(OLLAMA_BASE_URL_ENV).ok())
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `ollama_base_url` - 覆盖 `llm.base_url`，空串视为未设置
pub fn load_config_from_path(
    config_path: Option<&Path>,
    ollama_base_url: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值
    builder = builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "static")?
        .set_default("llm.base_url", "http://localhost:11434")?
        .set_default("llm.timeout_secs", 300)?
        .set_default("export.dir", "exports")?
        .set_default("export.language", "zh")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量，例如 NOVELIST_LLM__TIMEOUT_SECS=60
    builder = builder.add_source(
        Environment::with_prefix("NOVELIST")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. OLLAMA_BASE_URL
    builder = builder.set_override_option(
        "llm.base_url",
        ollama_base_url.filter(|url| !url.trim().is_empty()),
    )?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.llm.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Model service base URL cannot be empty".to_string(),
        ));
    }

    if config.llm.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Model service timeout cannot be 0".to_string(),
        ));
    }

    if config.export.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Export directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    match config.server.static_files.enabled_dir() {
        Some(dir) => tracing::info!("Static Files: {:?}", dir),
        None => tracing::info!("Static Files: disabled"),
    }
    tracing::info!("Model Service: {}", config.llm.base_url);
    tracing::info!("Model Timeout: {}s", config.llm.timeout_secs);
    tracing::info!("Export Directory: {:?}", config.export.dir);
    tracing::info!("Export Language: {:?}", config.export.language);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
