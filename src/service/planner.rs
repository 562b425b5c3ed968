use crate::errors::PlanError;
use crate::models::{
    MenuConstraints, MenuPlan, PlanRequest, Recipe, SelectionStats, DEFAULT_MAX_DAYS,
};
use crate::service::aggregator::consolidate;
use crate::service::selector::select_menu;
use rayon::prelude::*;
use std::sync::Arc;

/// 规划入口：选菜 + 汇总购物清单
pub fn plan(
    recipes: &[Recipe],
    days: usize,
    constraints: &MenuConstraints,
) -> Result<MenuPlan, PlanError> {
    plan_with_stats(recipes, days, constraints).map(|(plan, _)| plan)
}

/// 同 [`plan`]，额外返回选择统计 (天数上限 [`DEFAULT_MAX_DAYS`])
pub fn plan_with_stats(
    recipes: &[Recipe],
    days: usize,
    constraints: &MenuConstraints,
) -> Result<(MenuPlan, SelectionStats), PlanError> {
    plan_within(recipes, days, DEFAULT_MAX_DAYS, constraints)
}

/// 天数必须在 [1, max_days] 内
pub fn plan_within(
    recipes: &[Recipe],
    days: usize,
    max_days: usize,
    constraints: &MenuConstraints,
) -> Result<(MenuPlan, SelectionStats), PlanError> {
    if days == 0 || days > max_days {
        return Err(PlanError::InvalidDays { days, max_days });
    }

    let selection = select_menu(recipes, days, constraints)?;
    let shopping_list = consolidate(&selection.menu);

    if selection.menu.len() < days {
        tracing::warn!(
            "菜单不足: 请求 {} 天, 实际 {} 天",
            days,
            selection.menu.len()
        );
    }
    tracing::info!(
        "规划完成: {} 天, 菜单 {} 项, 购物清单 {} 项, 结果 {:?}",
        days,
        selection.menu.len(),
        shopping_list.len(),
        selection.stats.outcome
    );

    let plan = MenuPlan {
        days,
        menu: selection.menu.into_iter().cloned().collect(),
        shopping_list,
    };
    Ok((plan, selection.stats))
}

/// 规划服务：持有已校验的菜谱库
#[derive(Debug, Clone)]
pub struct MenuPlanner {
    recipes: Arc<Vec<Recipe>>,
    max_days: usize,
}

impl MenuPlanner {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Arc::new(recipes),
            max_days: DEFAULT_MAX_DAYS,
        }
    }

    /// 请求天数上限 (来自配置)
    pub fn with_max_days(mut self, max_days: usize) -> Self {
        self.max_days = max_days;
        self
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn max_days(&self) -> usize {
        self.max_days
    }

    pub fn plan(&self, request: &PlanRequest) -> Result<(MenuPlan, SelectionStats), PlanError> {
        plan_within(&self.recipes, request.days, self.max_days, &request.constraints)
    }

    /// 批量规划 (并行)
    ///
    /// 每个请求各自创建生成器，结果与逐个规划一致，顺序与输入一致。
    pub fn plan_batch(
        &self,
        requests: &[PlanRequest],
    ) -> Vec<Result<(MenuPlan, SelectionStats), PlanError>> {
        tracing::info!("批量规划: {} 个请求, 菜谱库 {} 个", requests.len(), self.recipes.len());
        requests.par_iter().map(|req| self.plan(req)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_days_is_rejected() {
        let recipes = vec![Recipe::new("a").with_time(10)];
        let err = plan(&recipes, 0, &MenuConstraints::default()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidDays { days: 0, .. }));
    }

    #[test]
    fn days_above_configured_cap_are_rejected() {
        let planner = MenuPlanner::new(vec![Recipe::new("a").with_time(10)]).with_max_days(14);
        let request = PlanRequest {
            days: 1_000_000_000,
            ..PlanRequest::default()
        };
        let err = planner.plan(&request).unwrap_err();
        assert!(matches!(
            err,
            PlanError::InvalidDays { days: 1_000_000_000, max_days: 14 }
        ));

        let at_cap = PlanRequest {
            days: 14,
            ..PlanRequest::default()
        };
        assert_eq!(planner.plan(&at_cap).unwrap().0.menu.len(), 14);
    }

    #[test]
    fn free_plan_uses_default_cap() {
        let recipes = vec![Recipe::new("a").with_time(10)];
        let constraints = MenuConstraints::unconstrained(1);
        assert!(plan(&recipes, DEFAULT_MAX_DAYS, &constraints).is_ok());
        assert!(plan(&recipes, DEFAULT_MAX_DAYS + 1, &constraints).is_err());
    }

    #[test]
    fn plan_reports_requested_days() {
        let recipes = vec![Recipe::new("a")
            .with_tag("vege")
            .with_time(10)
            .with_ingredient("riz", 100.0, "g")];
        let plan = plan(&recipes, 3, &MenuConstraints::default()).unwrap();
        assert_eq!(plan.days, 3);
        assert_eq!(plan.menu.len(), 3);
        assert_eq!(plan.shopping_list[0].qty, 300.0);
    }

    #[test]
    fn batch_matches_sequential_planning() {
        let recipes: Vec<Recipe> = (0..8)
            .map(|i| {
                Recipe::new(format!("r{i}"))
                    .with_tag(if i % 2 == 0 { "vege" } else { "poisson" })
                    .with_time(20)
                    .with_budget(1.0 + i as f64)
            })
            .collect();
        let planner = MenuPlanner::new(recipes);
        let requests: Vec<PlanRequest> = (0..6)
            .map(|seed| PlanRequest {
                days: 4,
                constraints: MenuConstraints {
                    seed: Some(seed),
                    min_fish: 1,
                    ..MenuConstraints::default()
                },
            })
            .collect();

        let batch = planner.plan_batch(&requests);
        assert_eq!(batch.len(), requests.len());
        for (req, result) in requests.iter().zip(batch) {
            let (batch_plan, _) = result.unwrap();
            let (single_plan, _) = planner.plan(req).unwrap();
            assert_eq!(batch_plan, single_plan);
        }
    }
}
