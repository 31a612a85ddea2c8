//! # QR Studio — 演示入口
//!
//! 本文件仅负责初始化日志、注入初始历史快照并串起一次完整流程：
//! 草稿 → 生成 → 渲染 PNG → 复制 → 历史过滤/删除。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;

use qr_studio::clipboard::{SystemClipboard, TextClipboard};
use qr_studio::dialog::{remove_confirmed, ConfirmDialog, Confirmation};
use qr_studio::draft::ContentKind;
use qr_studio::error::AppError;
use qr_studio::generator::QrGenerator;
use qr_studio::history::{HistoryRecord, HistoryStore, HistoryTab, Origin};
use qr_studio::render::{render_image, save_png, RenderOptions};

/// 演示用确认对话：无界面环境下直接视为用户确认。
struct AutoConfirm;

impl ConfirmDialog for AutoConfirm {
    async fn confirm(&self, title: &str, message: &str) -> Result<Confirmation, AppError> {
        log::info!("[对话框] {title}: {message} → Delete");
        Ok(Confirmation::Confirmed)
    }
}

/// 初始历史快照。
///
/// 仓库不内嵌任何数据，演示数据在此构造后注入。
fn seed_records() -> Vec<HistoryRecord> {
    let record = |id: &str, origin, content: &str, timestamp: &str| HistoryRecord {
        id: id.to_string(),
        origin,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
    };
    vec![
        record("1", Origin::Generated, "https://example.com", "2023-10-15 14:30"),
        record("2", Origin::Scanned, "Product: ABC123", "2023-10-14 09:45"),
        record(
            "3",
            Origin::Generated,
            "Contact: John Doe, john@example.com",
            "2023-10-13 16:20",
        ),
        record("4", Origin::Scanned, "https://another-example.com", "2023-10-12 11:10"),
    ]
}

async fn run() -> Result<(), AppError> {
    // ── 生成屏 ──────────────────────────────────
    let mut generator = QrGenerator::new();
    generator.set_kind(ContentKind::Url);
    log::info!("输入提示：{}", generator.draft().kind.placeholder());

    let content = std::env::args().nth(1).unwrap_or_else(|| "https://example.com".to_string());
    generator.set_text(content);

    let value = generator.generate()?.to_string();
    let image = render_image(&value, &RenderOptions::default())?;
    let output = PathBuf::from("qr.png");
    save_png(&image, &output)?;

    // 复制失败不致命，提示后继续（演示环境常无剪贴板服务）
    let clipboard = SystemClipboard::new();
    match clipboard.write_text(&value).await {
        Ok(()) => log::info!("内容已复制到剪贴板"),
        Err(err) => log::warn!("复制失败：{err}"),
    }

    // ── 历史屏 ──────────────────────────────────
    let mut store = HistoryStore::from_records(seed_records());
    store.append(HistoryRecord {
        id: "5".to_string(),
        origin: Origin::Generated,
        content: value,
        timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
    });

    for tab in [HistoryTab::All, HistoryTab::Generated, HistoryTab::Scanned] {
        let view = store.view(tab);
        let json = serde_json::to_string_pretty(&view)
            .map_err(|e| AppError::Encode(format!("序列化历史快照失败: {e}")))?;
        log::info!("标签 {tab:?} 的列表快照：\n{json}");
    }

    let removed = remove_confirmed(&mut store, &AutoConfirm, "2").await?;
    log::info!("删除记录 2：{removed}，剩余 {} 条", store.len());

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("演示流程失败：{err}");
        std::process::exit(1);
    }
}
