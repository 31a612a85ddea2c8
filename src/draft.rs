//! 内容草稿模块
//!
//! # 设计思路
//!
//! 持有用户当前输入的文本与内容类型（文本/网址/邮箱/电话/短信）。
//! 类型只影响输入提示与键盘形态，不做任何格式校验 ——
//! 用户输的是什么，QR 码里就编码什么。
//!
//! # 实现思路
//!
//! - 类型为封闭枚举，提示文案与键盘形态是枚举上的纯全函数，
//!   避免到处重复的字符串 switch。
//! - `is_submittable()` 只看去除首尾空白后是否非空，无副作用。

use serde::{Deserialize, Serialize};

/// QR 内容类型
///
/// 仅用于选择输入提示与键盘形态，任意取值均被接受。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Text,
    Url,
    Email,
    Phone,
    Sms,
}

/// 输入键盘形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKind {
    /// 通用键盘
    Default,
    /// 数字电话键盘（电话 / 短信类型）
    PhonePad,
}

impl ContentKind {
    /// 返回该类型对应的输入提示文案。
    ///
    /// 对封闭枚举是全函数；文本类型的提示同时充当默认分支。
    pub fn placeholder(self) -> &'static str {
        match self {
            ContentKind::Url => "Enter URL (e.g., https://example.com)",
            ContentKind::Email => "Enter email address",
            ContentKind::Phone => "Enter phone number",
            ContentKind::Sms => "Enter phone number for SMS",
            _ => "Enter text for QR code",
        }
    }

    /// 返回该类型对应的键盘形态。
    pub fn keyboard(self) -> KeyboardKind {
        match self {
            ContentKind::Phone | ContentKind::Sms => KeyboardKind::PhonePad,
            _ => KeyboardKind::Default,
        }
    }

    /// 输入框是否允许多行（仅自由文本类型）。
    pub fn multiline(self) -> bool {
        matches!(self, ContentKind::Text)
    }
}

/// 进行中、尚未提交的 QR 内容草稿
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentDraft {
    pub text: String,
    pub kind: ContentKind,
}

impl ContentDraft {
    /// 创建空草稿（文本类型）。
    pub fn new() -> Self {
        Self::default()
    }

    /// 存储原始输入，不做任何修剪或规范化。
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// 切换内容类型。不校验，五个取值均接受。
    pub fn set_kind(&mut self, kind: ContentKind) {
        self.kind = kind;
    }

    /// 去除首尾空白后内容非空才允许生成。
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_covers_all_kinds() {
        assert_eq!(ContentKind::Text.placeholder(), "Enter text for QR code");
        assert_eq!(
            ContentKind::Url.placeholder(),
            "Enter URL (e.g., https://example.com)"
        );
        assert_eq!(ContentKind::Email.placeholder(), "Enter email address");
        assert_eq!(ContentKind::Phone.placeholder(), "Enter phone number");
        assert_eq!(ContentKind::Sms.placeholder(), "Enter phone number for SMS");
    }

    #[test]
    fn keyboard_is_phone_pad_only_for_phone_and_sms() {
        assert_eq!(ContentKind::Phone.keyboard(), KeyboardKind::PhonePad);
        assert_eq!(ContentKind::Sms.keyboard(), KeyboardKind::PhonePad);
        assert_eq!(ContentKind::Text.keyboard(), KeyboardKind::Default);
        assert_eq!(ContentKind::Url.keyboard(), KeyboardKind::Default);
        assert_eq!(ContentKind::Email.keyboard(), KeyboardKind::Default);
    }

    #[test]
    fn only_text_kind_is_multiline() {
        assert!(ContentKind::Text.multiline());
        assert!(!ContentKind::Url.multiline());
        assert!(!ContentKind::Sms.multiline());
    }

    #[test]
    fn set_text_keeps_raw_input() {
        let mut draft = ContentDraft::new();
        draft.set_text("  hello \n");
        assert_eq!(draft.text, "  hello \n");
    }

    #[test]
    fn submittable_requires_non_whitespace_content() {
        let mut draft = ContentDraft::new();
        assert!(!draft.is_submittable());

        draft.set_text("   \t\n");
        assert!(!draft.is_submittable());

        draft.set_text(" x ");
        assert!(draft.is_submittable());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ContentKind::Sms).expect("serialize kind");
        assert_eq!(json, "\"sms\"");
    }
}
