pub mod constraints;
pub mod plan;
pub mod recipe;

pub use constraints::{
    MenuConstraints, PlanRequest, DEFAULT_DAYS, DEFAULT_MAX_DAYS, DEFAULT_MIN_VEGE, DEFAULT_SEED, DEFAULT_TOLERANCE,
    TAG_FISH, TAG_MEAT, TAG_VEGE,
};
pub use plan::{MenuPlan, SelectionOutcome, SelectionStats, ShoppingItem};
pub use recipe::{Ingredient, Recipe, DEFAULT_TIME_MIN};
