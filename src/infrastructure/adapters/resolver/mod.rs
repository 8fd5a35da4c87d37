//! Resolver Adapter - 媒体解析器实现

mod fake_resolver;
mod ytdlp_resolver;

pub use fake_resolver::FakeMediaResolver;
pub use ytdlp_resolver::*;
