//! Index Handler

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// 首页
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_html.clone())
}
