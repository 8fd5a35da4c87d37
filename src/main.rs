//! tunescout - 搜索歌曲并返回可播放的音频直链
//!
//! 组合根：加载配置、初始化日志、构造解析器与 HTTP 服务器

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tunescout::application::MediaResolverPort;
use tunescout::config::{load_config, print_config, AppConfig};
use tunescout::infrastructure::adapters::{YtDlpResolver, YtDlpResolverConfig};
use tunescout::infrastructure::http::{AppState, HttpServer, ServerConfig};

/// 初始化日志（RUST_LOG 优先于配置文件）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},tunescout={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load config")?;

    init_tracing(&config);

    tracing::info!("tunescout v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 首页缺失属于配置错误，直接退出
    let index_html = tokio::fs::read_to_string(&config.server.index_page)
        .await
        .with_context(|| format!("Failed to read index page {:?}", config.server.index_page))?;

    let resolver_config = YtDlpResolverConfig {
        binary: config.resolver.binary.clone(),
        format: config.resolver.format.clone(),
        default_search: config.resolver.default_search.clone(),
        no_playlist: config.resolver.no_playlist,
        quiet: config.resolver.quiet,
        health_timeout: Duration::from_secs(config.resolver.health_timeout_secs),
    };
    let resolver = Arc::new(YtDlpResolver::new(resolver_config));

    if !resolver.health_check().await {
        tracing::warn!(
            binary = %config.resolver.binary,
            "yt-dlp is not available, audio lookups will fail until it is installed"
        );
    }

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    let static_files = &config.server.static_files;
    if static_files.enabled {
        server_config =
            server_config.with_static_mount(static_files.path.clone(), static_files.dir.clone());
    }

    let state = AppState::new(resolver, index_html);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
