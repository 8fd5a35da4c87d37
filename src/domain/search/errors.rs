//! Search Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchQueryError {
    #[error("No search query provided")]
    Missing,
}

/// 解析结果无法转换为可播放音频源
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("YouTube search returned no results.")]
    NoResults,

    #[error("Could not find a playable URL in the video metadata.")]
    MissingPlayableUrl,
}
