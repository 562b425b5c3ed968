use crate::models::Recipe;
use serde::{Deserialize, Serialize};

/// 购物清单条目，按 (name, unit) 聚合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub qty: f64,
    pub unit: String,
}

/// 规划结果 (菜单 + 购物清单)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPlan {
    pub days: usize,
    pub menu: Vec<Recipe>,
    pub shopping_list: Vec<ShoppingItem>,
}

/// 选择结果的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// 第 `attempt` 次抽样满足全部约束 (从 1 开始)
    Accepted { attempt: usize },
    /// 重试预算耗尽，按池顺序填充，忽略约束
    Fallback,
    /// 过滤后池为空
    EmptyPool,
}

/// 选择统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionStats {
    pub requested_days: usize,
    pub pool_size: usize,
    pub menu_len: usize,
    pub attempts: usize,
    pub outcome: SelectionOutcome,
}

impl SelectionStats {
    pub fn is_fallback(&self) -> bool {
        self.outcome == SelectionOutcome::Fallback
    }
}
