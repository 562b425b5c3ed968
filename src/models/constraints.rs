use serde::{Deserialize, Serialize};

pub const TAG_VEGE: &str = "vege";
pub const TAG_FISH: &str = "poisson";
pub const TAG_MEAT: &str = "viande";

pub const DEFAULT_DAYS: usize = 7;
/// 单次规划允许的最大天数
pub const DEFAULT_MAX_DAYS: usize = 366;
pub const DEFAULT_MIN_VEGE: usize = 2;
pub const DEFAULT_TOLERANCE: f64 = 0.2;
pub const DEFAULT_SEED: u64 = 42;

/// 选菜约束
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConstraints {
    pub min_vege: usize,
    pub min_fish: usize,
    pub max_meat: Option<usize>,
    pub max_time: Option<u32>,
    pub excluded_ingredients: Option<Vec<String>>,
    pub no_duplicates: bool,
    pub max_weekly_budget: Option<f64>,
    pub avg_budget: Option<f64>,
    pub tolerance: f64,
    /// None 表示使用系统熵 (结果不可复现)
    pub seed: Option<u64>,
}

impl Default for MenuConstraints {
    fn default() -> Self {
        Self {
            min_vege: DEFAULT_MIN_VEGE,
            min_fish: 0,
            max_meat: None,
            max_time: None,
            excluded_ingredients: None,
            no_duplicates: false,
            max_weekly_budget: None,
            avg_budget: None,
            tolerance: DEFAULT_TOLERANCE,
            seed: Some(DEFAULT_SEED),
        }
    }
}

impl MenuConstraints {
    /// 不带任何标签/预算限制的约束，只保留种子
    pub fn unconstrained(seed: u64) -> Self {
        Self {
            min_vege: 0,
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// 排除食材 (小写、去空白、去空项)
    pub fn excluded_lowercase(&self) -> Vec<String> {
        self.excluded_ingredients
            .iter()
            .flatten()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// 平均预算区间 [avg×(1-tol), avg×(1+tol)]
    pub fn avg_budget_bounds(&self) -> Option<(f64, f64)> {
        self.avg_budget
            .map(|avg| (avg * (1.0 - self.tolerance), avg * (1.0 + self.tolerance)))
    }
}

/// 规划请求：天数 + 约束
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default = "default_days")]
    pub days: usize,
    #[serde(flatten)]
    pub constraints: MenuConstraints,
}

fn default_days() -> usize {
    DEFAULT_DAYS
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            constraints: MenuConstraints::default(),
        }
    }
}
