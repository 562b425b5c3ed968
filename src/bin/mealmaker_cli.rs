use clap::Parser;
use mealmaker_rust::models::{DEFAULT_DAYS, DEFAULT_MIN_VEGE, DEFAULT_SEED, DEFAULT_TOLERANCE};
use mealmaker_rust::service::plan_with_stats;
use mealmaker_rust::store::{export_shopping_list_csv, write_plan_json};
use mealmaker_rust::{load_recipes, logging, MenuConstraints};
use std::path::PathBuf;
use tracing::info;

/// 根据菜谱库生成多日菜单与购物清单
#[derive(Debug, Parser)]
#[command(name = "mealmaker-cli", version, about)]
struct Cli {
    #[arg(long, help = "Recipe catalogue (JSON array)")]
    recipes: PathBuf,
    #[arg(long, default_value_t = DEFAULT_DAYS, value_parser = parse_days, help = "Number of days to plan")]
    days: usize,
    #[arg(long, default_value_t = DEFAULT_MIN_VEGE, help = "Minimum vegetarian meals")]
    min_vege: usize,
    #[arg(long, default_value_t = 0, help = "Minimum fish meals")]
    min_fish: usize,
    #[arg(long, help = "Maximum meat meals")]
    max_meat: Option<usize>,
    #[arg(long, help = "Maximum preparation time per recipe (minutes)")]
    max_time: Option<u32>,
    #[arg(long, help = "Target average budget per meal (EUR)")]
    avg_budget: Option<f64>,
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, help = "Relative tolerance around --avg-budget")]
    tolerance: f64,
    #[arg(long, value_delimiter = ',', help = "Ingredients to exclude (comma separated)")]
    exclude_ingredients: Vec<String>,
    #[arg(long, help = "Never repeat a recipe within the menu")]
    no_duplicates: bool,
    #[arg(long, help = "Maximum total budget for the whole menu (EUR)")]
    max_weekly_budget: Option<f64>,
    #[arg(long, help = "Deterministic seed (default 42)")]
    seed: Option<u64>,
    #[arg(long, conflicts_with = "seed", help = "Seed from system entropy (not reproducible)")]
    random_seed: bool,
    #[arg(long, default_value = "menu.json", help = "Output JSON path")]
    output: PathBuf,
    #[arg(long, help = "Optional shopping list CSV export")]
    shopping_csv: Option<PathBuf>,
}

fn parse_days(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(format!("days must be a positive integer, got '{raw}'")),
    }
}

impl Cli {
    fn constraints(&self) -> MenuConstraints {
        MenuConstraints {
            min_vege: self.min_vege,
            min_fish: self.min_fish,
            max_meat: self.max_meat,
            max_time: self.max_time,
            excluded_ingredients: if self.exclude_ingredients.is_empty() {
                None
            } else {
                Some(self.exclude_ingredients.clone())
            },
            no_duplicates: self.no_duplicates,
            max_weekly_budget: self.max_weekly_budget,
            avg_budget: self.avg_budget,
            tolerance: self.tolerance,
            seed: if self.random_seed {
                None
            } else {
                Some(self.seed.unwrap_or(DEFAULT_SEED))
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let cli = Cli::parse();

    let recipes = load_recipes(&cli.recipes)?;
    let (plan, stats) = plan_with_stats(&recipes, cli.days, &cli.constraints())?;

    write_plan_json(&plan, &cli.output)?;
    if let Some(path) = &cli.shopping_csv {
        export_shopping_list_csv(&plan.shopping_list, path)?;
    }

    info!(
        "完成: {} 天菜单, {} 项购物清单, 尝试 {} 次 ({:?})",
        plan.menu.len(),
        plan.shopping_list.len(),
        stats.attempts,
        stats.outcome
    );
    Ok(())
}
