//! 测试辅助：捕获 tracing 事件

use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::subscriber::DefaultGuard;

/// 把 JSON 格式的日志行收集到内存
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    /// 已捕获的事件，每个事件形如 `{"level": "INFO", "fields": {...}, ...}`
    pub fn events(&self) -> Vec<Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// 指定级别、且 message 相同的事件
    pub fn find(&self, level: &str, message: &str) -> Option<Value> {
        self.events()
            .into_iter()
            .find(|e| e["level"] == level && e["fields"]["message"] == message)
    }

    pub fn count_level(&self, level: &str) -> usize {
        self.events().iter().filter(|e| e["level"] == level).count()
    }
}

/// 在当前线程上安装捕获订阅者，guard 释放后恢复
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
