//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::AudioSource;

/// POST /get_audio_url 请求体
#[derive(Debug, Deserialize)]
pub struct AudioUrlRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// POST /get_audio_url 响应体
///
/// 以 `status` 字段区分成功与失败
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AudioUrlResponse {
    Success { audio_url: String, title: String },
    Error { message: String },
}

impl AudioUrlResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

impl From<AudioSource> for AudioUrlResponse {
    fn from(source: AudioSource) -> Self {
        Self::Success {
            audio_url: source.audio_url,
            title: source.title,
        }
    }
}
