//! Fake Media Resolver - 用于测试的解析器
//!
//! 始终返回预设的结果，不实际调用外部服务

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{MediaResolverPort, ResolverError};
use crate::domain::{MediaEntry, ResolvedMedia, SearchQuery};

/// Fake Media Resolver
///
/// 记录调用次数和最后一次搜索词
pub struct FakeMediaResolver {
    outcome: Result<ResolvedMedia, ResolverError>,
    calls: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

impl FakeMediaResolver {
    pub fn new(outcome: Result<ResolvedMedia, ResolverError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// 搜索模式结果
    pub fn with_entries(entries: Vec<MediaEntry>) -> Self {
        Self::new(Ok(ResolvedMedia::Entries(entries)))
    }

    /// 总是失败
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(Err(ResolverError::extraction(message)))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().ok().and_then(|q| q.clone())
    }
}

#[async_trait]
impl MediaResolverPort for FakeMediaResolver {
    async fn resolve(&self, query: &SearchQuery) -> Result<ResolvedMedia, ResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_query.lock() {
            *last = Some(query.as_str().to_string());
        }

        tracing::debug!(query = %query, "FakeMediaResolver: returning fixed outcome");

        self.outcome.clone()
    }
}
