//! 应用层 - 查询（读操作）

mod audio_url_queries;
mod mood_queries;

pub mod handlers;

pub use audio_url_queries::*;
pub use mood_queries::*;
