//! Mood Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::application::{MoodPlaylist, PickSongQuery, PickedSong};
use crate::domain::Mood;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Serialize)]
pub struct MoodsResponse {
    pub moods: Vec<MoodPlaylist>,
}

/// GET /api/moods
pub async fn list_moods(State(state): State<Arc<AppState>>) -> Json<MoodsResponse> {
    Json(MoodsResponse {
        moods: state.list_moods_handler.handle(),
    })
}

/// GET /api/moods/:mood/song
///
/// 未知心情按 neutral 选曲
pub async fn pick_song(
    State(state): State<Arc<AppState>>,
    Path(mood): Path<String>,
) -> Result<Json<PickedSong>, ApiError> {
    let query = PickSongQuery {
        mood: Mood::from_label(&mood),
    };
    Ok(Json(state.pick_song_handler.handle(query)?))
}
