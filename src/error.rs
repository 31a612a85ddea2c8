//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，替代各模块中分散的
//! `.map_err(|e| e.to_string())`、`format!(...)`、`expect()` 等不一致模式。
//!
//! 核心中不存在致命错误：校验失败、剪贴板写入失败、编码失败
//! 均为可恢复错误，由调用方以非阻塞提示的方式呈现给用户。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 实现 `Serialize` 将错误序列化为字符串，方便上层界面直接展示。

use serde::Serialize;

/// 应用级统一错误类型
///
/// 所有可失败操作均返回此类型，确保调用方收到一致的错误格式。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 生成前校验失败（内容为空或仅含空白字符）
    #[error("内容校验失败: {0}")]
    Validation(String),

    /// 剪贴板写入失败（权限拒绝、服务不可用等平台原因）
    #[error("剪贴板操作失败: {0}")]
    Clipboard(String),

    /// QR 编码失败（内容超出任何版本的容量等）
    #[error("QR 编码失败: {0}")]
    Encode(String),

    /// 文件系统 I/O 错误（保存 PNG 时）
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 将错误序列化为人类可读的字符串，供界面层直接展示。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
