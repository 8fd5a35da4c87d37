//! Media Resolver Port - 媒体解析器抽象
//!
//! 定义"搜索词 -> 可播放流地址"的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ResolvedMedia, SearchQuery};

/// 解析错误
///
/// Display 文本会原样作为错误信息返回给客户端。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    /// 解析器自身报告的失败（网络、提取、站点变更等）
    #[error("{0}")]
    Extraction(String),

    #[error("Failed to launch resolver: {0}")]
    Launch(String),

    #[error("Malformed resolver output: {0}")]
    MalformedOutput(String),
}

impl ResolverError {
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }
}

/// Media Resolver Port
///
/// 外部媒体解析能力的抽象接口
#[async_trait]
pub trait MediaResolverPort: Send + Sync {
    /// 根据搜索词解析媒体
    ///
    /// 每次调用只做一次外部查询，不重试。
    async fn resolve(&self, query: &SearchQuery) -> Result<ResolvedMedia, ResolverError>;

    /// 检查解析器是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
