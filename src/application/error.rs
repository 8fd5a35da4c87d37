//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use crate::application::ports::ResolverError;
use crate::domain::{MoodError, PlaybackError, SearchQueryError};

/// 应用层错误
///
/// 各变体的 Display 文本即返回给客户端的 message。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// 搜索词无效
    #[error(transparent)]
    InvalidQuery(#[from] SearchQueryError),

    /// 解析结果中没有可播放的音频
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// 外部解析器错误
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// 歌单错误
    #[error(transparent)]
    Mood(#[from] MoodError),
}

impl ApplicationError {
    /// 是否为客户端输入导致的错误
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidQuery(_))
    }
}
