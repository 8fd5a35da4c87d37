//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 媒体解析器配置
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 首页 HTML 文件路径（启动时读取，缺失则启动失败）
    #[serde(default = "default_index_page")]
    pub index_page: PathBuf,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀
    #[serde(default = "default_static_path")]
    pub path: String,
}

fn default_static_enabled() -> bool {
    true
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web/static")
}

fn default_static_path() -> String {
    "/static".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
            path: default_static_path(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_index_page() -> PathBuf {
    PathBuf::from("web/index.html")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            index_page: default_index_page(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 媒体解析器（yt-dlp）配置
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// yt-dlp 可执行文件
    #[serde(default = "default_binary")]
    pub binary: String,

    /// 格式偏好
    #[serde(default = "default_format")]
    pub format: String,

    /// 搜索前缀，ytsearch1 表示只取第一个结果
    #[serde(default = "default_search")]
    pub default_search: String,

    /// 禁止展开播放列表
    #[serde(default = "default_true")]
    pub no_playlist: bool,

    /// 静默模式
    #[serde(default = "default_true")]
    pub quiet: bool,

    /// 可用性探测超时（秒）
    #[serde(default = "default_health_timeout")]
    pub health_timeout_secs: u64,
}

fn default_binary() -> String {
    "yt-dlp".to_string()
}

fn default_format() -> String {
    "bestaudio/best".to_string()
}

fn default_search() -> String {
    "ytsearch1".to_string()
}

fn default_true() -> bool {
    true
}

fn default_health_timeout() -> u64 {
    5
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            format: default_format(),
            default_search: default_search(),
            no_playlist: true,
            quiet: true,
            health_timeout_secs: default_health_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.index_page, PathBuf::from("web/index.html"));
        assert_eq!(config.resolver.binary, "yt-dlp");
        assert_eq!(config.resolver.format, "bestaudio/best");
        assert_eq!(config.resolver.default_search, "ytsearch1");
        assert!(config.resolver.no_playlist);
        assert!(config.resolver.quiet);
        assert_eq!(config.resolver.health_timeout_secs, 5);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_static_files_default() {
        let config = StaticFilesConfig::default();
        assert!(config.enabled);
        assert_eq!(config.path, "/static");
    }
}
