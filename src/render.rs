//! QR 位图渲染模块
//!
//! # 设计思路
//!
//! 核心只负责把一段内容字符串和渲染参数（尺寸、前景/背景色）交给
//! 编码协作方，拿回一张可展示的位图；编码算法本身委托 `qrcode` crate。
//!
//! # 实现思路
//!
//! - `qrcode` 负责模块矩阵（含纠错），光栅化由本模块完成：
//!   逐像素映射到模块坐标，输出恰好 `size × size` 的 RGBA 图。
//! - 四周保留 4 个模块宽的静区，与 QR 规范一致。
//! - PNG 落盘复用 `image` crate，与位图构建同一套类型。

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, QrCode};

use crate::error::AppError;

/// 静区宽度（模块数），QR 规范要求的最小值。
const QUIET_ZONE_MODULES: u32 = 4;

/// QR 渲染参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// 输出图像边长（像素）
    pub size: u32,
    /// 前景色（深色模块），RGBA
    pub dark: [u8; 4],
    /// 背景色（浅色模块与静区），RGBA
    pub light: [u8; 4],
}

impl Default for RenderOptions {
    /// 200px、黑底白字的经典样式。
    fn default() -> Self {
        Self {
            size: 200,
            dark: [0, 0, 0, 255],
            light: [255, 255, 255, 255],
        }
    }
}

/// 将内容字符串编码为 QR 位图。
///
/// # 返回
/// - `Ok(RgbaImage)` — 边长为 `opts.size` 的位图
/// - `Err(AppError::Encode)` — 内容超出容量或参数非法
pub fn render_image(content: &str, opts: &RenderOptions) -> Result<RgbaImage, AppError> {
    if opts.size == 0 {
        return Err(AppError::Encode("输出尺寸不能为 0".to_string()));
    }

    let code = QrCode::new(content.as_bytes())
        .map_err(|e| AppError::Encode(format!("内容无法编码: {e}")))?;

    let modules = code.to_colors();
    let width = code.width() as u32;
    let total = width + 2 * QUIET_ZONE_MODULES;
    let size = opts.size;

    // 逐像素映射到模块坐标，静区之外查矩阵，之内一律背景色。
    let image = RgbaImage::from_fn(size, size, |x, y| {
        let mx = (x * total / size).saturating_sub(QUIET_ZONE_MODULES);
        let my = (y * total / size).saturating_sub(QUIET_ZONE_MODULES);
        let in_quiet_zone = x * total / size < QUIET_ZONE_MODULES
            || y * total / size < QUIET_ZONE_MODULES
            || mx >= width
            || my >= width;

        let dark = !in_quiet_zone
            && modules[(my * width + mx) as usize] == Color::Dark;
        if dark {
            Rgba(opts.dark)
        } else {
            Rgba(opts.light)
        }
    });

    log::debug!(
        "已渲染 QR：{} 模块，输出 {}x{} 像素",
        width,
        size,
        size
    );
    Ok(image)
}

/// 将位图保存为 PNG 文件。
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), AppError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| AppError::Encode(format!("保存 PNG 失败: {e}")))?;
    log::info!("QR 图已保存到 {}", path.display());
    Ok(())
}
