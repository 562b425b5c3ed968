use crate::errors::PlanError;
use crate::models::Recipe;
use std::fs;
use std::path::Path;

/// 从 JSON 文件加载菜谱库 (顶层必须是数组)，并做一次性校验
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>, PlanError> {
    let raw = fs::read_to_string(path)?;
    let recipes = parse_recipes(&raw)?;
    tracing::info!("加载菜谱 {} 个: {}", recipes.len(), path.display());
    Ok(recipes)
}

pub fn parse_recipes(raw: &str) -> Result<Vec<Recipe>, PlanError> {
    let recipes: Vec<Recipe> = serde_json::from_str(raw)?;
    validate_recipes(&recipes)?;
    Ok(recipes)
}

/// 数量与预算必须是非负有限数
pub fn validate_recipes(recipes: &[Recipe]) -> Result<(), PlanError> {
    for (idx, recipe) in recipes.iter().enumerate() {
        let label = || {
            let label = recipe.label();
            if label.is_empty() {
                format!("#{idx}")
            } else {
                label.to_string()
            }
        };

        if !recipe.budget_eur.is_finite() || recipe.budget_eur < 0.0 {
            return Err(PlanError::InvalidRecipe {
                recipe: label(),
                reason: format!("budget_eur must be non-negative, got {}", recipe.budget_eur),
            });
        }

        for ing in &recipe.ingredients {
            if !ing.qty.is_finite() || ing.qty < 0.0 {
                return Err(PlanError::InvalidRecipe {
                    recipe: label(),
                    reason: format!("ingredient '{}' has negative qty {}", ing.name, ing.qty),
                });
            }
        }
    }
    Ok(())
}
