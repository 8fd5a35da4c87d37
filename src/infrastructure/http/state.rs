//! Application State

use std::sync::Arc;

use crate::application::{
    ListMoodsHandler, MediaResolverPort, PickSongHandler, ResolveAudioUrlHandler,
};
use crate::domain::MoodCatalogue;

/// 应用状态
///
/// 启动时构造一次，请求之间只读共享
pub struct AppState {
    pub resolver: Arc<dyn MediaResolverPort>,

    /// 首页 HTML
    pub index_html: String,

    pub resolve_audio_url_handler: ResolveAudioUrlHandler,
    pub list_moods_handler: ListMoodsHandler,
    pub pick_song_handler: PickSongHandler,
}

impl AppState {
    /// 使用内置歌单创建应用状态
    pub fn new(resolver: Arc<dyn MediaResolverPort>, index_html: impl Into<String>) -> Self {
        Self::with_catalogue(resolver, index_html, MoodCatalogue::builtin())
    }

    pub fn with_catalogue(
        resolver: Arc<dyn MediaResolverPort>,
        index_html: impl Into<String>,
        catalogue: MoodCatalogue,
    ) -> Self {
        let catalogue = Arc::new(catalogue);
        Self {
            resolver: resolver.clone(),
            index_html: index_html.into(),
            resolve_audio_url_handler: ResolveAudioUrlHandler::new(resolver),
            list_moods_handler: ListMoodsHandler::new(catalogue.clone()),
            pick_song_handler: PickSongHandler::new(catalogue),
        }
    }
}
