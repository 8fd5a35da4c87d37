//! HTTP Handlers

mod audio_url;
mod index;
mod mood;
mod ping;

pub use audio_url::*;
pub use index::*;
pub use mood::*;
pub use ping::*;
