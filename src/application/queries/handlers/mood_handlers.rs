//! Mood Query Handlers

use rand::Rng;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::mood_queries::{MoodPlaylist, PickSongQuery, PickedSong};
use crate::domain::{Mood, MoodCatalogue};

/// ListMoods Handler - 列出所有心情及其歌单
pub struct ListMoodsHandler {
    catalogue: Arc<MoodCatalogue>,
}

impl ListMoodsHandler {
    pub fn new(catalogue: Arc<MoodCatalogue>) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self) -> Vec<MoodPlaylist> {
        Mood::ALL
            .iter()
            .map(|&mood| MoodPlaylist {
                mood,
                plays_as: mood.playlist_mood(),
                songs: self.catalogue.songs_for(mood).to_vec(),
            })
            .collect()
    }
}

/// PickSong Handler - 按心情随机选一首
pub struct PickSongHandler {
    catalogue: Arc<MoodCatalogue>,
}

impl PickSongHandler {
    pub fn new(catalogue: Arc<MoodCatalogue>) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self, query: PickSongQuery) -> Result<PickedSong, ApplicationError> {
        self.handle_with_rng(query, &mut rand::thread_rng())
    }

    pub fn handle_with_rng<R: Rng + ?Sized>(
        &self,
        query: PickSongQuery,
        rng: &mut R,
    ) -> Result<PickedSong, ApplicationError> {
        let song = self.catalogue.pick(query.mood, rng)?.clone();

        tracing::debug!(mood = %query.mood, song = %song.name, "Picked song for mood");

        Ok(PickedSong {
            mood: query.mood,
            plays_as: query.mood.playlist_mood(),
            song,
        })
    }
}
