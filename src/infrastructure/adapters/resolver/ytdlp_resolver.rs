//! yt-dlp Resolver - 调用 yt-dlp 命令行解析音频地址
//!
//! 实现 MediaResolverPort trait，以子进程方式运行 yt-dlp
//!
//! 调用方式:
//! yt-dlp --dump-single-json --format bestaudio/best --no-playlist \
//!        --default-search ytsearch1 --quiet --no-warnings -- <query>
//! 输出: stdout 上的单个 JSON 文档（搜索模式下为带 entries 的 playlist）

use async_trait::async_trait;
use serde::Deserialize;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::Command;

use crate::application::ports::{MediaResolverPort, ResolverError};
use crate::domain::{MediaEntry, ResolvedMedia, SearchQuery};

/// yt-dlp 输出的 info dict（只取用到的字段）
#[derive(Debug, Deserialize)]
struct InfoDict {
    entries: Option<Vec<Option<MediaEntry>>>,
    url: Option<String>,
    title: Option<String>,
}

impl From<InfoDict> for ResolvedMedia {
    fn from(info: InfoDict) -> Self {
        match info.entries {
            // 不可用的条目在 entries 中为 null
            Some(entries) => ResolvedMedia::Entries(entries.into_iter().flatten().collect()),
            None => ResolvedMedia::Entry(MediaEntry {
                url: info.url,
                title: info.title,
            }),
        }
    }
}

/// yt-dlp 解析器配置
#[derive(Debug, Clone)]
pub struct YtDlpResolverConfig {
    /// yt-dlp 可执行文件路径
    pub binary: String,
    /// 格式选择
    pub format: String,
    /// 默认搜索前缀（ytsearch1 = 取第一个搜索结果）
    pub default_search: String,
    /// 禁止展开播放列表
    pub no_playlist: bool,
    /// 静默模式
    pub quiet: bool,
    /// 可用性探测（`--version`）的超时时间
    pub health_timeout: Duration,
}

impl Default for YtDlpResolverConfig {
    fn default() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            format: "bestaudio/best".to_string(),
            default_search: "ytsearch1".to_string(),
            no_playlist: true,
            quiet: true,
            health_timeout: Duration::from_secs(5),
        }
    }
}

/// yt-dlp 解析器
pub struct YtDlpResolver {
    config: YtDlpResolverConfig,
}

impl YtDlpResolver {
    pub fn new(config: YtDlpResolverConfig) -> Self {
        Self { config }
    }

    /// 构造命令行参数
    fn build_args(&self, query: &SearchQuery) -> Vec<String> {
        let mut args = vec![
            "--dump-single-json".to_string(),
            "--format".to_string(),
            self.config.format.clone(),
            "--default-search".to_string(),
            self.config.default_search.clone(),
        ];
        if self.config.no_playlist {
            args.push("--no-playlist".to_string());
        }
        if self.config.quiet {
            args.push("--quiet".to_string());
            args.push("--no-warnings".to_string());
        }
        // 以 "-" 开头的搜索词不能被当作选项解析
        args.push("--".to_string());
        args.push(query.as_str().to_string());
        args
    }
}

/// 解析 yt-dlp 的 JSON 输出
fn parse_output(stdout: &[u8]) -> Result<ResolvedMedia, ResolverError> {
    let info: InfoDict = serde_json::from_slice(stdout)
        .map_err(|e| ResolverError::MalformedOutput(e.to_string()))?;
    Ok(info.into())
}

/// 从 stderr 提取错误信息
///
/// 优先取最后一行 `ERROR:`，否则取整个 stderr。
fn failure_message(status: ExitStatus, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let stderr = stderr.trim();

    if let Some(line) = stderr.lines().rev().find(|l| l.starts_with("ERROR:")) {
        return line.trim().to_string();
    }
    if stderr.is_empty() {
        return format!("yt-dlp exited with {}", status);
    }
    stderr.to_string()
}

#[async_trait]
impl MediaResolverPort for YtDlpResolver {
    async fn resolve(&self, query: &SearchQuery) -> Result<ResolvedMedia, ResolverError> {
        let args = self.build_args(query);

        tracing::debug!(
            binary = %self.config.binary,
            format = %self.config.format,
            default_search = %self.config.default_search,
            "Running yt-dlp"
        );

        let output = Command::new(&self.config.binary)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ResolverError::Launch(format!("{}: {}", self.config.binary, e)))?;

        if !output.status.success() {
            return Err(ResolverError::Extraction(failure_message(
                output.status,
                &output.stderr,
            )));
        }

        let media = parse_output(&output.stdout)?;
        let entry_count = match &media {
            ResolvedMedia::Entries(entries) => entries.len(),
            ResolvedMedia::Entry(_) => 1,
        };

        tracing::debug!(entries = entry_count, "yt-dlp resolution completed");

        Ok(media)
    }

    async fn health_check(&self) -> bool {
        let version_check = Command::new(&self.config.binary)
            .arg("--version")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(self.config.health_timeout, version_check).await {
            Ok(Ok(output)) => output.status.success(),
            Ok(Err(_)) => false,
            Err(_) => {
                tracing::warn!(
                    binary = %self.config.binary,
                    timeout_ms = self.config.health_timeout.as_millis() as u64,
                    "yt-dlp health check timed out"
                );
                false
            }
        }
    }
}
