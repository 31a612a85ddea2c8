//! QR 生成闸门模块
//!
//! # 设计思路
//!
//! 渲染被推迟到用户显式点击"生成"之后：闸门只有 Idle / Ready 两个状态。
//! 生成前做唯一一次校验（内容去空白后非空），失败则拒绝状态迁移并
//! 向上返回 [`AppError::Validation`]，由调用方提示用户。
//!
//! 闸门只暴露待编码的内容字符串，对 QR 位图格式一无所知 ——
//! 实际编码委托给 [`crate::render`]。
//!
//! # 实现思路
//!
//! - `generate()` 失败时不改动任何状态，重复调用幂等地停在 Ready。
//! - `clear()` 同时清空草稿并回到 Idle，对任何状态有效。

use crate::draft::{ContentDraft, ContentKind};
use crate::error::AppError;

/// 渲染闸门状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderGate {
    /// 尚未生成，不渲染 QR 图
    #[default]
    Idle,
    /// 已生成，当前草稿文本即待编码内容
    Ready,
}

/// 生成界面的状态机：草稿 + 闸门
#[derive(Debug, Clone, Default)]
pub struct QrGenerator {
    draft: ContentDraft,
    gate: RenderGate,
}

impl QrGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContentDraft {
        &self.draft
    }

    pub fn gate(&self) -> RenderGate {
        self.gate
    }

    /// 更新草稿文本（用户击键）。
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.set_text(text);
    }

    /// 更新内容类型（用户点选类型按钮）。
    pub fn set_kind(&mut self, kind: ContentKind) {
        self.draft.set_kind(kind);
    }

    /// 用户点击"生成"：校验通过则打开闸门。
    ///
    /// # 返回
    /// - `Ok(&str)` — 待交给 QR 编码侧的内容
    /// - `Err(AppError::Validation)` — 内容为空，状态不变
    pub fn generate(&mut self) -> Result<&str, AppError> {
        if !self.draft.is_submittable() {
            log::debug!("生成被拒绝：草稿内容为空");
            return Err(AppError::Validation(
                "请输入要编码的内容".to_string(),
            ));
        }
        self.gate = RenderGate::Ready;
        log::info!("闸门打开，待编码内容 {} 字符", self.draft.text.len());
        Ok(&self.draft.text)
    }

    /// 用户点击"清空"：清空草稿并回到 Idle。
    pub fn clear(&mut self) {
        self.draft.set_text("");
        self.gate = RenderGate::Idle;
    }

    /// 仅在 Ready 状态下返回待编码内容。
    pub fn rendered_value(&self) -> Option<&str> {
        match self.gate {
            RenderGate::Ready => Some(&self.draft.text),
            RenderGate::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_is_rejected_and_gate_stays_idle() {
        let mut generator = QrGenerator::new();

        let err = generator.generate().expect_err("empty draft must fail");
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(generator.gate(), RenderGate::Idle);
        assert!(generator.rendered_value().is_none());
    }

    #[test]
    fn whitespace_only_draft_is_rejected() {
        let mut generator = QrGenerator::new();
        generator.set_text("   \n\t");

        assert!(generator.generate().is_err());
        assert_eq!(generator.gate(), RenderGate::Idle);
    }

    #[test]
    fn url_draft_opens_gate_and_exposes_value() {
        let mut generator = QrGenerator::new();
        generator.set_kind(ContentKind::Url);
        generator.set_text("https://example.com");

        let value = generator.generate().expect("generate url draft");
        assert_eq!(value, "https://example.com");
        assert_eq!(generator.gate(), RenderGate::Ready);
        assert_eq!(generator.rendered_value(), Some("https://example.com"));
    }

    #[test]
    fn clear_resets_draft_and_gate() {
        let mut generator = QrGenerator::new();
        generator.set_text("hello");
        generator.generate().expect("generate");

        generator.clear();

        assert_eq!(generator.gate(), RenderGate::Idle);
        assert!(generator.draft().text.is_empty());
        assert!(generator.rendered_value().is_none());
    }

    #[test]
    fn failed_generate_does_not_close_open_gate() {
        let mut generator = QrGenerator::new();
        generator.set_text("hello");
        generator.generate().expect("generate");

        // 用户把输入删空后再次点击生成：报错，但不回退已生成的状态
        generator.set_text("");
        assert!(generator.generate().is_err());
        assert_eq!(generator.gate(), RenderGate::Ready);
    }
}
