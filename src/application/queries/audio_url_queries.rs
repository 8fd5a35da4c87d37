//! Audio URL Queries - 音频地址查询

use crate::domain::{AudioSource, SearchQuery};

/// 根据搜索词解析音频地址
#[derive(Debug, Clone)]
pub struct ResolveAudioUrlQuery {
    pub query: SearchQuery,
}

/// 解析成功的响应
pub type ResolveAudioUrlResponse = AudioSource;
