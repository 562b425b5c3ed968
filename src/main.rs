use mealmaker_rust::{api, load_recipes, logging, AppConfig, MenuPlanner};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // 加载菜谱库 (启动时校验一次)
    let recipes = load_recipes(Path::new(&config.planner.recipes_path))?;
    let planner = Arc::new(MenuPlanner::new(recipes).with_max_days(config.planner.max_days));
    info!("Recipe catalogue ready: {} recipes", planner.recipes().len());

    let app = api::router(planner);

    // 启动服务器
    let addr = config.bind_addr();
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/plan        - plan one menu");
    info!("  POST /api/plan/batch  - plan several menus in parallel");
    info!("  GET  /api/recipes     - recipe catalogue");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
