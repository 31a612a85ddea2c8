//! 剪贴板桥接模块
//!
//! # 设计思路
//!
//! 复制是本核心中唯一的异步操作：一次有界的平台调用，成功或失败，
//! 不重试、不排队。并发的第二次复制只是又一次独立调用，
//! 彼此之间没有顺序保证。
//!
//! 用户可见的成功/失败提示由调用方负责，桥接层只汇报结果。
//!
//! # 实现思路
//!
//! - 以 trait 作为平台缝隙，测试中用内存替身模拟失败。
//! - `arboard` 是阻塞 API，真实实现放到 `spawn_blocking` 上执行。

use crate::error::AppError;

/// 文本剪贴板协作方（平台实现 / 测试替身）
pub trait TextClipboard {
    /// 异步把 `content` 写入剪贴板。
    ///
    /// # 返回
    /// - `Ok(())` — 写入成功
    /// - `Err(AppError::Clipboard)` — 平台失败（权限、服务不可用等）
    fn write_text(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// 系统剪贴板实现（arboard）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    /// 在阻塞线程中执行实际写入。
    fn write_text_sync(content: String) -> Result<(), AppError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| AppError::Clipboard(format!("打开剪贴板失败: {e}")))?;
        clipboard
            .set_text(content)
            .map_err(|e| AppError::Clipboard(format!("写入文本失败: {e}")))?;
        Ok(())
    }
}

impl TextClipboard for SystemClipboard {
    async fn write_text(&self, content: &str) -> Result<(), AppError> {
        log::debug!("📋 复制 {} 字符到系统剪贴板", content.len());
        let owned = content.to_string();
        tokio::task::spawn_blocking(move || Self::write_text_sync(owned))
            .await
            .map_err(|e| AppError::Clipboard(format!("线程执行失败: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// 记录写入内容的内存替身
    #[derive(Default)]
    struct MemoryClipboard {
        written: Mutex<Vec<String>>,
    }

    impl TextClipboard for MemoryClipboard {
        async fn write_text(&self, content: &str) -> Result<(), AppError> {
            self.written
                .lock()
                .expect("lock clipboard log")
                .push(content.to_string());
            Ok(())
        }
    }

    /// 模拟平台失败的替身
    struct FailingClipboard;

    impl TextClipboard for FailingClipboard {
        async fn write_text(&self, _content: &str) -> Result<(), AppError> {
            Err(AppError::Clipboard("权限被拒绝".to_string()))
        }
    }

    #[tokio::test]
    async fn successful_copy_reports_ok() {
        let clipboard = MemoryClipboard::default();

        clipboard.write_text("abc").await.expect("copy abc");

        let written = clipboard.written.lock().expect("lock clipboard log");
        assert_eq!(written.as_slice(), ["abc"]);
    }

    #[tokio::test]
    async fn platform_failure_surfaces_clipboard_error() {
        let clipboard = FailingClipboard;

        let err = clipboard
            .write_text("abc")
            .await
            .expect_err("simulated failure");

        assert!(matches!(err, AppError::Clipboard(_)));
    }
}
