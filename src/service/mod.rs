pub mod aggregator;
pub mod planner;
pub mod selector;

pub use aggregator::consolidate;
pub use planner::{plan, plan_with_stats, plan_within, MenuPlanner};
pub use selector::{select_menu, select_menu_with_rng, Menu, Selection, MAX_ATTEMPTS};
