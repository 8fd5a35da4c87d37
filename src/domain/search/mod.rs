//! Search Context - 音频搜索上下文
//!
//! 职责:
//! - 搜索词校验
//! - 解析结果（条目 / 条目集合）
//! - 从解析结果中选出可播放的音频源

mod entities;
mod errors;
mod value_objects;

pub use entities::{AudioSource, MediaEntry, ResolvedMedia, DEFAULT_TITLE};
pub use errors::{PlaybackError, SearchQueryError};
pub use value_objects::SearchQuery;
