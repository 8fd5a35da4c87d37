//! Audio URL Query Handlers

use std::sync::Arc;

use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::MediaResolverPort;
use crate::application::queries::audio_url_queries::{
    ResolveAudioUrlQuery, ResolveAudioUrlResponse,
};

/// ResolveAudioUrl Handler - 搜索并解析第一个结果的音频地址
pub struct ResolveAudioUrlHandler {
    resolver: Arc<dyn MediaResolverPort>,
}

impl ResolveAudioUrlHandler {
    pub fn new(resolver: Arc<dyn MediaResolverPort>) -> Self {
        Self { resolver }
    }

    pub async fn handle(
        &self,
        query: ResolveAudioUrlQuery,
    ) -> Result<ResolveAudioUrlResponse, ApplicationError> {
        let request_id = Uuid::new_v4();
        let search = query.query;

        tracing::info!(%request_id, query = %search, "Received search query");

        let result = match self.resolver.resolve(&search).await {
            Ok(media) => media.into_first_playable().map_err(ApplicationError::from),
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(source) => {
                tracing::info!(
                    %request_id,
                    title = %source.title,
                    "Successfully found audio URL"
                );
            }
            Err(e) => {
                tracing::error!(
                    %request_id,
                    query = %search,
                    error = %e,
                    "Error extracting audio for query"
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ResolverError;
    use crate::domain::{MediaEntry, PlaybackError, ResolvedMedia, SearchQuery};
    use crate::infrastructure::adapters::FakeMediaResolver;
    use crate::test_support::capture_logs;

    fn query(text: &str) -> ResolveAudioUrlQuery {
        ResolveAudioUrlQuery {
            query: SearchQuery::new(text).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_resolves_first_entry() {
        let resolver = Arc::new(FakeMediaResolver::with_entries(vec![MediaEntry::new(
            "https://cdn.example/a.webm",
            "Song A",
        )]));
        let handler = ResolveAudioUrlHandler::new(resolver.clone());

        let source = handler.handle(query("song a")).await.unwrap();
        assert_eq!(source.audio_url, "https://cdn.example/a.webm");
        assert_eq!(source.title, "Song A");
        assert_eq!(resolver.call_count(), 1);
        assert_eq!(resolver.last_query().as_deref(), Some("song a"));
    }

    #[tokio::test]
    async fn test_no_results() {
        let handler =
            ResolveAudioUrlHandler::new(Arc::new(FakeMediaResolver::with_entries(vec![])));

        let err = handler.handle(query("nothing")).await.unwrap_err();
        assert_eq!(err, ApplicationError::Playback(PlaybackError::NoResults));
    }

    #[tokio::test]
    async fn test_single_entry_result() {
        let handler = ResolveAudioUrlHandler::new(Arc::new(FakeMediaResolver::new(Ok(
            ResolvedMedia::Entry(MediaEntry::new("https://cdn.example/a.webm", "Song A")),
        ))));

        let err = handler.handle(query("song a")).await.unwrap_err();
        assert_eq!(err, ApplicationError::Playback(PlaybackError::NoResults));
    }

    #[tokio::test]
    async fn test_resolver_error_is_not_retried() {
        let resolver = Arc::new(FakeMediaResolver::failing("network timeout"));
        let handler = ResolveAudioUrlHandler::new(resolver.clone());

        let err = handler.handle(query("song a")).await.unwrap_err();
        assert_eq!(
            err,
            ApplicationError::Resolver(ResolverError::extraction("network timeout"))
        );
        assert_eq!(err.to_string(), "network timeout");
        assert_eq!(resolver.call_count(), 1);
    }

    #[tokio::test]
    async fn test_logs_receipt_and_success() {
        let (logs, _guard) = capture_logs();
        let handler = ResolveAudioUrlHandler::new(Arc::new(FakeMediaResolver::with_entries(
            vec![MediaEntry::new("https://cdn.example/a.webm", "Song A")],
        )));

        handler.handle(query("song a")).await.unwrap();

        let received = logs.find("INFO", "Received search query").unwrap();
        assert_eq!(received["fields"]["query"], "song a");

        let found = logs.find("INFO", "Successfully found audio URL").unwrap();
        assert_eq!(found["fields"]["title"], "Song A");
        assert_eq!(
            found["fields"]["request_id"],
            received["fields"]["request_id"]
        );
        assert_eq!(logs.count_level("ERROR"), 0);
    }

    #[tokio::test]
    async fn test_logs_error_with_query() {
        let (logs, _guard) = capture_logs();
        let handler =
            ResolveAudioUrlHandler::new(Arc::new(FakeMediaResolver::failing("network timeout")));

        handler.handle(query("song a")).await.unwrap_err();

        let error = logs.find("ERROR", "Error extracting audio for query").unwrap();
        assert_eq!(error["fields"]["query"], "song a");
        assert_eq!(error["fields"]["error"], "network timeout");
        assert!(logs.find("INFO", "Successfully found audio URL").is_none());
    }

    #[tokio::test]
    async fn test_logs_error_for_no_results() {
        let (logs, _guard) = capture_logs();
        let handler =
            ResolveAudioUrlHandler::new(Arc::new(FakeMediaResolver::with_entries(vec![])));

        handler.handle(query("zzzz")).await.unwrap_err();

        let error = logs.find("ERROR", "Error extracting audio for query").unwrap();
        assert_eq!(error["fields"]["query"], "zzzz");
        assert_eq!(
            error["fields"]["error"],
            "YouTube search returned no results."
        );
    }
}
