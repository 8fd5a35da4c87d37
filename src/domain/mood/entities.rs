//! Mood Context - Entities

use serde::Serialize;

/// 歌单中的一首歌
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    /// 展示名称
    pub name: String,
    /// 交给解析器的搜索词
    pub query: String,
}

impl Song {
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
        }
    }
}
