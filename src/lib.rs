pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod service;
pub mod store;

pub use self::config::AppConfig;
pub use errors::PlanError;
pub use models::{Ingredient, MenuConstraints, MenuPlan, PlanRequest, Recipe, ShoppingItem};
pub use service::{consolidate, plan, select_menu, MenuPlanner};
pub use store::load_recipes;
