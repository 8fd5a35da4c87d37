//! Mood Queries - 心情歌单查询

use serde::Serialize;

use crate::domain::{Mood, Song};

/// 按心情随机选曲
#[derive(Debug, Clone, Copy)]
pub struct PickSongQuery {
    pub mood: Mood,
}

/// 某个心情的歌单
#[derive(Debug, Clone, Serialize)]
pub struct MoodPlaylist {
    pub mood: Mood,
    /// 别名心情实际使用的歌单
    pub plays_as: Mood,
    pub songs: Vec<Song>,
}

/// 选曲结果
#[derive(Debug, Clone, Serialize)]
pub struct PickedSong {
    pub mood: Mood,
    pub plays_as: Mood,
    #[serde(flatten)]
    pub song: Song,
}
