//! 确认对话协作方
//!
//! # 设计思路
//!
//! 删除历史记录前需要一次显式的用户确认（取消 / 删除）。
//! 对话框属于平台服务，这里只定义协作方接口与"先确认、后删除"的
//! 两步流程；仓库自身从不阻塞在用户确认上。

use crate::error::AppError;
use crate::history::HistoryStore;

/// 用户对确认对话框的选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// 确认对话协作方（平台实现 / 测试替身）
pub trait ConfirmDialog {
    /// 展示带取消/确认两个动作的消息，返回用户的选择。
    fn confirm(
        &self,
        title: &str,
        message: &str,
    ) -> impl Future<Output = Result<Confirmation, AppError>> + Send;
}

/// 先确认、后删除的两步流程。
///
/// # 返回
/// - `Ok(true)` — 用户确认且记录被删除
/// - `Ok(false)` — 用户取消，或记录不存在（删除本身幂等）
pub async fn remove_confirmed<D: ConfirmDialog>(
    store: &mut HistoryStore,
    dialog: &D,
    id: &str,
) -> Result<bool, AppError> {
    let choice = dialog
        .confirm(
            "Delete Item",
            "Are you sure you want to delete this item from history?",
        )
        .await?;

    match choice {
        Confirmation::Confirmed => Ok(store.remove(id)),
        Confirmation::Cancelled => {
            log::debug!("用户取消删除 {id}");
            Ok(false)
        }
    }
}
