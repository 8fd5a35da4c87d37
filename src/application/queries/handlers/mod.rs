//! Query Handlers

mod audio_url_handlers;
mod mood_handlers;

pub use audio_url_handlers::ResolveAudioUrlHandler;
pub use mood_handlers::{ListMoodsHandler, PickSongHandler};
