//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Search Context: 搜索词与解析结果
//! - Mood Context: 心情歌单

pub mod mood;
pub mod search;

pub use mood::{Mood, MoodCatalogue, MoodError, Song};
pub use search::{
    AudioSource, MediaEntry, PlaybackError, ResolvedMedia, SearchQuery, SearchQueryError,
};
