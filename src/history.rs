//! 历史记录模块
//!
//! # 设计思路
//!
//! 历史记录是一个保持插入顺序的内存集合：记录由外部注入（初始快照）
//! 或追加产生，删除由用户显式发起，记录本身从不原地修改。
//! 仓库自身不做任何 I/O，持久化是未来的外部协作方。
//!
//! # 实现思路
//!
//! - `filter` 为纯函数：稳定保序地取来源匹配的子序列，`All` 即恒等。
//! - `remove` 按 id 删除，id 不存在时为幂等空操作（不报错）。
//! - `append` 守护 id 唯一性不变量：重复 id 按空操作处理。
//! - `view` 把"过滤结果为空"显式建模为 Empty，界面层不必区分
//!   "无元素"与"元素未定义"。

use serde::{Deserialize, Serialize};

/// 记录来源：生成 or 扫描
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Generated,
    Scanned,
}

/// 历史界面的过滤标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryTab {
    #[default]
    All,
    Generated,
    Scanned,
}

impl HistoryTab {
    /// 记录是否落在该标签下。`All` 接受一切。
    fn matches(self, origin: Origin) -> bool {
        match self {
            HistoryTab::All => true,
            HistoryTab::Generated => origin == Origin::Generated,
            HistoryTab::Scanned => origin == Origin::Scanned,
        }
    }
}

/// 一条历史记录
///
/// 不变量：id 在集合内唯一；记录创建后不再原地修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub origin: Origin,
    pub content: String,
    pub timestamp: String,
}

/// 面向界面的列表快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "lowercase")]
pub enum HistoryView {
    /// 过滤后无任何记录，界面应展示空态
    Empty,
    /// 过滤后的记录，保持原始顺序
    Items(Vec<HistoryRecord>),
}

/// 历史记录仓库
///
/// 由外部快照构造，生命周期内只通过 `remove` / `append` 变化。
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// 从外部注入的初始快照构造仓库。
    pub fn from_records(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// 返回来源匹配标签的有序子序列；`All` 返回全部。纯函数，不修改仓库。
    pub fn filter(&self, tab: HistoryTab) -> Vec<&HistoryRecord> {
        self.records
            .iter()
            .filter(|record| tab.matches(record.origin))
            .collect()
    }

    /// 面向界面的快照：空结果显式表达为 [`HistoryView::Empty`]。
    pub fn view(&self, tab: HistoryTab) -> HistoryView {
        let items: Vec<HistoryRecord> = self.filter(tab).into_iter().cloned().collect();
        if items.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Items(items)
        }
    }

    /// 按 id 删除记录。
    ///
    /// id 不存在时为幂等空操作，返回 `false`，不报错。
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() < before;
        if removed {
            log::info!("已删除历史记录 {id}");
        } else {
            log::debug!("删除目标 {id} 不存在，忽略");
        }
        removed
    }

    /// 追加一条记录。
    ///
    /// id 已存在时按空操作处理并返回 `false`，保持唯一性不变量。
    pub fn append(&mut self, record: HistoryRecord) -> bool {
        if self.records.iter().any(|existing| existing.id == record.id) {
            log::debug!("追加被忽略：id {} 已存在", record.id);
            return false;
        }
        self.records.push(record);
        true
    }
}
