use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 未填写准备时间时的默认值，足以让菜谱被任何时间上限排除
pub const DEFAULT_TIME_MIN: u32 = 9999;

/// 菜谱 (输入 JSON 数组中的一个对象)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_time_min")]
    pub time_min: u32,
    #[serde(default)]
    pub budget_eur: f64,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// 其余字段原样保留，写回输出时不丢失
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// 食材
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub qty: f64,
    #[serde(default)]
    pub unit: String,
}

fn default_time_min() -> u32 {
    DEFAULT_TIME_MIN
}

impl Recipe {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: String::new(),
            tags: Vec::new(),
            time_min: DEFAULT_TIME_MIN,
            budget_eur: 0.0,
            ingredients: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_time(mut self, time_min: u32) -> Self {
        self.time_min = time_min;
        self
    }

    pub fn with_budget(mut self, budget_eur: f64) -> Self {
        self.budget_eur = budget_eur;
        self
    }

    pub fn with_ingredient(mut self, name: &str, qty: f64, unit: &str) -> Self {
        self.ingredients.push(Ingredient {
            name: name.to_string(),
            qty,
            unit: unit.to_string(),
        });
        self
    }

    /// 有效 id；空白 id 视为缺失
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    /// 标签比较不区分大小写
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag.to_lowercase())
    }

    pub fn fits_time(&self, max_time: Option<u32>) -> bool {
        max_time.map_or(true, |limit| self.time_min <= limit)
    }

    /// `excluded` 需已去空白并转为小写；食材名按同样规则归一后比较
    pub fn contains_any_ingredient(&self, excluded: &[String]) -> bool {
        self.ingredients
            .iter()
            .any(|ing| excluded.contains(&ing.name.trim().to_lowercase()))
    }

    /// 显示用标签：优先 id，其次名称
    pub fn label(&self) -> &str {
        self.key().unwrap_or(&self.name)
    }
}
