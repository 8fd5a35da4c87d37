//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

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

/// 环境变量前缀
const ENV_PREFIX: &str = "TUNESCOUT";

/// 加载应用配置
///
/// # 环境变量示例
/// - `TUNESCOUT_SERVER__HOST=0.0.0.0`
/// - `TUNESCOUT_SERVER__PORT=8080`
/// - `TUNESCOUT_RESOLVER__BINARY=/usr/local/bin/yt-dlp`
/// - `TUNESCOUT_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000)?
        .set_default("server.index_page", "web/index.html")?
        .set_default("server.static_files.enabled", true)?
        .set_default("server.static_files.dir", "web/static")?
        .set_default("server.static_files.path", "/static")?
        .set_default("resolver.binary", "yt-dlp")?
        .set_default("resolver.format", "bestaudio/best")?
        .set_default("resolver.default_search", "ytsearch1")?
        .set_default("resolver.no_playlist", true)?
        .set_default("resolver.quiet", true)?
        .set_default("resolver.health_timeout_secs", 5)?
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

    // 3. 环境变量（最高优先级），层级分隔符为 "__"
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

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

    if config.server.index_page.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Index page path cannot be empty".to_string(),
        ));
    }

    let static_files = &config.server.static_files;
    if static_files.enabled && (!static_files.path.starts_with('/') || static_files.path == "/") {
        return Err(ConfigError::ValidationError(format!(
            "Static files path must start with '/' and cannot be the root: {}",
            static_files.path
        )));
    }

    if config.resolver.binary.is_empty() {
        return Err(ConfigError::ValidationError(
            "Resolver binary cannot be empty".to_string(),
        ));
    }

    if config.resolver.format.is_empty() {
        return Err(ConfigError::ValidationError(
            "Resolver format cannot be empty".to_string(),
        ));
    }

    if config.resolver.health_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Resolver health timeout cannot be 0".to_string(),
        ));
    }

    if config.resolver.default_search.is_empty() {
        return Err(ConfigError::ValidationError(
            "Resolver default search cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Index Page: {:?}", config.server.index_page);
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {:?} -> {}",
            config.server.static_files.dir,
            config.server.static_files.path
        );
    }
    tracing::info!("Resolver Binary: {}", config.resolver.binary);
    tracing::info!("Resolver Format: {}", config.resolver.format);
    tracing::info!("Resolver Search: {}", config.resolver.default_search);
    tracing::info!(
        "Resolver Health Timeout: {}s",
        config.resolver.health_timeout_secs
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
