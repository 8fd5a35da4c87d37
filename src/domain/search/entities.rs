//! Search Context - Entities

use serde::{Deserialize, Serialize};

use super::errors::PlaybackError;

/// 条目没有标题时使用的默认标题
pub const DEFAULT_TITLE: &str = "Audio";

/// 解析器返回的单个候选条目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    /// 可直接播放的流地址
    pub url: Option<String>,
    /// 展示标题
    pub title: Option<String>,
}

impl MediaEntry {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            title: Some(title.into()),
        }
    }

    pub fn untitled(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            title: None,
        }
    }
}

/// 解析结果：单个条目或搜索模式下的条目集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedMedia {
    Entry(MediaEntry),
    Entries(Vec<MediaEntry>),
}

/// 可播放的音频源
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioSource {
    pub title: String,
    pub audio_url: String,
}

impl ResolvedMedia {
    /// 取集合中的第一个条目作为音频源
    ///
    /// 非集合结果视为无搜索结果。
    pub fn into_first_playable(self) -> Result<AudioSource, PlaybackError> {
        let first = match self {
            ResolvedMedia::Entries(entries) => entries.into_iter().next(),
            ResolvedMedia::Entry(_) => None,
        }
        .ok_or(PlaybackError::NoResults)?;

        let audio_url = first
            .url
            .filter(|url| !url.is_empty())
            .ok_or(PlaybackError::MissingPlayableUrl)?;

        Ok(AudioSource {
            title: first.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            audio_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_selected() {
        let media = ResolvedMedia::Entries(vec![
            MediaEntry::new("https://cdn.example/a", "Song A"),
            MediaEntry::new("https://cdn.example/b", "Song B"),
        ]);

        let source = media.into_first_playable().unwrap();
        assert_eq!(source.audio_url, "https://cdn.example/a");
        assert_eq!(source.title, "Song A");
    }

    #[test]
    fn test_missing_title_defaults() {
        let media = ResolvedMedia::Entries(vec![MediaEntry::untitled("https://cdn.example/a")]);

        let source = media.into_first_playable().unwrap();
        assert_eq!(source.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_first_entry_without_url() {
        let media = ResolvedMedia::Entries(vec![
            MediaEntry {
                url: None,
                title: Some("Song A".to_string()),
            },
            MediaEntry::new("https://cdn.example/b", "Song B"),
        ]);

        assert_eq!(
            media.into_first_playable(),
            Err(PlaybackError::MissingPlayableUrl)
        );
    }

    #[test]
    fn test_empty_url_is_not_playable() {
        let media = ResolvedMedia::Entries(vec![MediaEntry::untitled("")]);
        assert_eq!(
            media.into_first_playable(),
            Err(PlaybackError::MissingPlayableUrl)
        );
    }

    #[test]
    fn test_empty_collection() {
        let media = ResolvedMedia::Entries(vec![]);
        assert_eq!(media.into_first_playable(), Err(PlaybackError::NoResults));
    }

    #[test]
    fn test_single_entry_is_not_a_search_result() {
        let media = ResolvedMedia::Entry(MediaEntry::new("https://cdn.example/a", "Song A"));
        assert_eq!(media.into_first_playable(), Err(PlaybackError::NoResults));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlaybackError::NoResults.to_string(),
            "YouTube search returned no results."
        );
        assert_eq!(
            PlaybackError::MissingPlayableUrl.to_string(),
            "Could not find a playable URL in the video metadata."
        );
    }
}
