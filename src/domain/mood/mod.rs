//! Mood Context - 心情歌单上下文
//!
//! 职责:
//! - 心情标签解析（fear / disgust 复用其他心情的歌单）
//! - 内置歌单
//! - 按心情随机选曲

mod catalogue;
mod entities;
mod errors;
mod value_objects;

pub use catalogue::MoodCatalogue;
pub use entities::Song;
pub use errors::MoodError;
pub use value_objects::Mood;
