//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（MediaResolver）
//! - queries: 查询及处理器（音频地址、心情歌单）
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

pub use error::ApplicationError;

pub use ports::{MediaResolverPort, ResolverError};

pub use queries::{
    handlers::{ListMoodsHandler, PickSongHandler, ResolveAudioUrlHandler},
    MoodPlaylist, PickSongQuery, PickedSong, ResolveAudioUrlQuery, ResolveAudioUrlResponse,
};
