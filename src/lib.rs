//! tunescout - 搜索词 -> 音频直链 服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Search Context: 搜索词校验、解析结果选择
//! - Mood Context: 心情歌单与随机选曲
//!
//! 应用层 (application/):
//! - Ports: MediaResolverPort
//! - Queries: ResolveAudioUrl / 心情歌单 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 首页 + JSON API
//! - Adapters: yt-dlp 解析器、测试用解析器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

pub use config::{load_config, AppConfig};
