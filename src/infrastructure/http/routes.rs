//! HTTP Routes
//!
//! API Endpoints:
//! - /                GET   首页
//! - /get_audio_url   POST  搜索并返回音频直链
//! - /api/ping        GET   健康检查
//! - /api/moods       GET   心情歌单
//! - /api/moods/:mood/song  GET  按心情随机选曲

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/get_audio_url", post(handlers::get_audio_url))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/moods", get(handlers::list_moods))
        .route("/moods/:mood/song", get(handlers::pick_song))
}
