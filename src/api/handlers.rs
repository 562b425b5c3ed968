use crate::errors::PlanError;
use crate::models::{MenuPlan, PlanRequest, SelectionStats};
use crate::service::MenuPlanner;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 批量请求体
#[derive(Debug, Deserialize)]
pub struct BatchPlanRequest {
    pub requests: Vec<PlanRequest>,
}

/// 单次规划响应
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub success: bool,
    pub message: String,
    pub plan: Option<MenuPlan>,
    pub stats: Option<SelectionStats>,
    pub generated_at: DateTime<Utc>,
}

/// 批量规划响应
#[derive(Debug, Serialize)]
pub struct BatchPlanResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<PlanResponse>,
}

/// 菜谱库概览
#[derive(Debug, Serialize)]
pub struct RecipeCatalogResponse {
    pub count: usize,
    pub ids: Vec<String>,
}

impl PlanResponse {
    fn from_result(result: Result<(MenuPlan, SelectionStats), PlanError>) -> Self {
        match result {
            Ok((plan, stats)) => Self {
                success: true,
                message: format!(
                    "Planned {} of {} days ({} shopping items)",
                    plan.menu.len(),
                    plan.days,
                    plan.shopping_list.len()
                ),
                plan: Some(plan),
                stats: Some(stats),
                generated_at: Utc::now(),
            },
            Err(e) => Self {
                success: false,
                message: format!("Error: {}", e),
                plan: None,
                stats: None,
                generated_at: Utc::now(),
            },
        }
    }
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 菜谱库概览
pub async fn list_recipes(State(planner): State<Arc<MenuPlanner>>) -> Json<RecipeCatalogResponse> {
    let ids = planner
        .recipes()
        .iter()
        .map(|r| r.label().to_string())
        .collect();
    Json(RecipeCatalogResponse {
        count: planner.recipes().len(),
        ids,
    })
}

/// 单次规划接口
pub async fn plan_menu(
    State(planner): State<Arc<MenuPlanner>>,
    Json(req): Json<PlanRequest>,
) -> Response {
    let result = match tokio::task::spawn_blocking(move || planner.plan(&req)).await {
        Ok(result) => result,
        Err(e) => return internal_error(e),
    };

    let status = if result.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(PlanResponse::from_result(result))).into_response()
}

/// 批量规划接口：逐条返回结果，单条失败不影响其它请求
pub async fn plan_menu_batch(
    State(planner): State<Arc<MenuPlanner>>,
    Json(req): Json<BatchPlanRequest>,
) -> Response {
    let total = req.requests.len();
    let results = match tokio::task::spawn_blocking(move || planner.plan_batch(&req.requests)).await
    {
        Ok(results) => results,
        Err(e) => return internal_error(e),
    };

    let results: Vec<PlanResponse> = results.into_iter().map(PlanResponse::from_result).collect();
    let failed = results.iter().filter(|r| !r.success).count();
    let response = BatchPlanResponse {
        success: failed == 0,
        message: format!("Planned {} requests, {} failed", total, failed),
        results,
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn internal_error(e: tokio::task::JoinError) -> Response {
    tracing::error!("规划任务异常终止: {}", e);
    let response = PlanResponse {
        success: false,
        message: format!("Error: {}", e),
        plan: None,
        stats: None,
        generated_at: Utc::now(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
}
