use std::io;

use thiserror::Error;

/// 规划过程中的错误
///
/// 约束无法满足不是错误：选择器会退化为兜底菜单。
/// 这里只包含结构上无效的输入以及 IO 失败。
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("days must be between 1 and {max_days}, got {days}")]
    InvalidDays { days: usize, max_days: usize },
    #[error("recipe at index {index} has no id, required when no_duplicates is set")]
    MissingRecipeId { index: usize },
    #[error("recipe '{recipe}' is invalid: {reason}")]
    InvalidRecipe { recipe: String, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
