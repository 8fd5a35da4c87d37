//! Audio URL Handler

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::{ApplicationError, ResolveAudioUrlQuery};
use crate::domain::SearchQuery;
use crate::infrastructure::http::dto::{AudioUrlRequest, AudioUrlResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 从请求体中取出 `query`，不检查 Content-Type
///
/// 读取失败或不是合法 JSON 时视为缺少搜索词
fn extract_query(body: Result<Bytes, BytesRejection>) -> Option<String> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable audio URL request body");
            return None;
        }
    };

    match serde_json::from_slice::<AudioUrlRequest>(&body) {
        Ok(req) => req.query,
        Err(e) => {
            tracing::debug!(error = %e, "Malformed audio URL request body");
            None
        }
    }
}

/// POST /get_audio_url
pub async fn get_audio_url(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AudioUrlResponse>, ApiError> {
    let query = SearchQuery::parse(extract_query(body)).map_err(ApplicationError::from)?;

    let source = state
        .resolve_audio_url_handler
        .handle(ResolveAudioUrlQuery { query })
        .await?;

    Ok(Json(source.into()))
}
