use crate::models::{Recipe, ShoppingItem};
use std::collections::BTreeMap;

/// 汇总购物清单
///
/// 按 (食材名, 单位) 聚合数量，两者均去空白并转小写。不做单位换算：
/// 同名食材的不同单位各占一行。结果按 (name, unit) 字典序排列，数量保留两位小数。
pub fn consolidate(menu: &[&Recipe]) -> Vec<ShoppingItem> {
    let mut totals: BTreeMap<(String, String), f64> = BTreeMap::new();

    for recipe in menu {
        for ing in &recipe.ingredients {
            let key = (ing.name.trim().to_lowercase(), ing.unit.trim().to_lowercase());
            *totals.entry(key).or_insert(0.0) += ing.qty;
        }
    }

    totals
        .into_iter()
        .map(|((name, unit), qty)| ShoppingItem {
            name,
            qty: round2(qty),
            unit,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
