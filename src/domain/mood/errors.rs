//! Mood Context - Errors

use thiserror::Error;

use super::Mood;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodError {
    #[error("No songs available for mood: {0}")]
    EmptyPlaylist(Mood),
}
