pub mod export;
pub mod recipes;

pub use export::{export_shopping_list_csv, write_plan_json};
pub use recipes::{load_recipes, parse_recipes, validate_recipes};
