pub mod handlers;

pub use handlers::{health_check, list_recipes, plan_menu, plan_menu_batch};

use crate::service::MenuPlanner;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 构建路由
pub fn router(planner: Arc<MenuPlanner>) -> Router {
    let plan_routes = Router::new()
        .route("/api/plan", post(plan_menu))
        .route("/api/plan/batch", post(plan_menu_batch))
        .route("/api/recipes", get(list_recipes))
        .with_state(planner);

    Router::new()
        .route("/health", get(health_check))
        .merge(plan_routes)
}
