use crate::models::DEFAULT_MAX_DAYS;
use serde::{Deserialize, Serialize};

/// 配置文件名 (可选，不含扩展名)
pub const CONFIG_FILE: &str = "mealmaker";
/// 环境变量前缀，例如 MEALMAKER__SERVER__PORT
pub const ENV_PREFIX: &str = "MEALMAKER";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 菜谱库 JSON 文件
    pub recipes_path: String,
    /// 单次请求允许的最大天数
    pub max_days: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            planner: PlannerConfig {
                recipes_path: "recipes.json".to_string(),
                max_days: DEFAULT_MAX_DAYS,
            },
        }
    }
}

impl AppConfig {
    /// 加载配置：默认值 < mealmaker.toml (可选) < 环境变量
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("planner.recipes_path", defaults.planner.recipes_path)?
            .set_default("planner.max_days", defaults.planner.max_days as i64)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
