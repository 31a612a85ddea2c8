//! # QR Studio — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       界面层（外部）                      │
//! │                                                          │
//! │   生成屏：输入 → 类型选择 → 生成/清空 → 展示 QR 图        │
//! │   历史屏：标签过滤 → 列表/空态 → 复制 / 确认后删除        │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ 函数调用（Result<T, AppError>）
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕               核心 (Rust)                         │
//! │                                                          │
//! │  ┌─ error ────── AppError（统一错误类型）                 │
//! │  │                                                       │
//! │  ├─ draft ────── 内容草稿 + 类型 → 提示/键盘形态          │
//! │  ├─ generator ── Idle/Ready 渲染闸门                      │
//! │  ├─ render ───── 内容字符串 → QR 位图（qrcode + image）   │
//! │  │                                                       │
//! │  ├─ history ──── 保序仓库：filter / remove / append       │
//! │  ├─ dialog ───── 确认协作方 + 先确认后删除流程            │
//! │  └─ clipboard ── 剪贴板桥接（arboard, 唯一异步点）        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，所有可失败操作的返回类型 |
//! | [`draft`] | 用户输入草稿与内容类型，提示文案/键盘形态的纯映射 |
//! | [`generator`] | 渲染闸门：显式生成才打开，清空即复位 |
//! | [`render`] | QR 编码协作方边界：内容 + 参数 → RGBA 位图 / PNG |
//! | [`history`] | 历史记录仓库：按标签过滤、按 id 删除、追加 |
//! | [`dialog`] | 确认对话协作方接口与两步删除流程 |
//! | [`clipboard`] | 平台剪贴板桥接，成功/失败异步汇报 |

pub mod clipboard;
pub mod dialog;
pub mod draft;
pub mod error;
pub mod generator;
pub mod history;
pub mod render;
