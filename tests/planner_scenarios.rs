use mealmaker_rust::models::SelectionOutcome;
use mealmaker_rust::service::{plan_with_stats, select_menu};
use mealmaker_rust::{consolidate, plan, MenuConstraints, Recipe};
use std::collections::HashSet;

fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("r1")
            .with_tag("vege")
            .with_time(15)
            .with_budget(2.0)
            .with_ingredient("pâtes", 200.0, "g"),
        Recipe::new("r2")
            .with_tag("viande")
            .with_time(30)
            .with_budget(3.0)
            .with_ingredient("riz", 150.0, "g"),
        Recipe::new("r3")
            .with_tag("vege")
            .with_time(10)
            .with_budget(1.5)
            .with_ingredient("pâtes", 100.0, "g"),
    ]
}

fn count_tag(menu: &[&Recipe], tag: &str) -> usize {
    menu.iter().filter(|r| r.has_tag(tag)).count()
}

#[test]
fn vege_quota_and_average_budget_are_met() {
    let recipes = sample_recipes();
    let constraints = MenuConstraints {
        min_vege: 2,
        max_time: Some(30),
        avg_budget: Some(2.0),
        tolerance: 0.5,
        seed: Some(1),
        ..MenuConstraints::default()
    };
    let selection = select_menu(&recipes, 3, &constraints).unwrap();

    assert_eq!(selection.menu.len(), 3);
    assert!(count_tag(&selection.menu, "vege") >= 2);
    let avg: f64 =
        selection.menu.iter().map(|r| r.budget_eur).sum::<f64>() / selection.menu.len() as f64;
    assert!((1.0..=3.0).contains(&avg));
}

#[test]
fn fish_and_meat_quotas_are_met() {
    let mut recipes = sample_recipes();
    recipes.push(
        Recipe::new("r4")
            .with_tag("poisson")
            .with_time(20)
            .with_budget(4.0)
            .with_ingredient("saumon", 150.0, "g"),
    );
    recipes.push(
        Recipe::new("r5")
            .with_tag("viande")
            .with_time(25)
            .with_budget(5.0)
            .with_ingredient("boeuf", 200.0, "g"),
    );
    let constraints = MenuConstraints {
        min_vege: 1,
        min_fish: 1,
        max_meat: Some(1),
        max_time: Some(30),
        seed: Some(1),
        ..MenuConstraints::default()
    };
    let selection = select_menu(&recipes, 5, &constraints).unwrap();

    assert!(matches!(selection.stats.outcome, SelectionOutcome::Accepted { .. }));
    assert_eq!(selection.menu.len(), 5);
    assert!(count_tag(&selection.menu, "vege") >= 1);
    assert!(count_tag(&selection.menu, "poisson") >= 1);
    assert!(count_tag(&selection.menu, "viande") <= 1);
}

#[test]
fn excluded_ingredients_never_appear() {
    let recipes = sample_recipes();
    let constraints = MenuConstraints {
        excluded_ingredients: Some(vec!["PÂTES".to_string()]),
        seed: Some(1),
        ..MenuConstraints::default()
    };
    let selection = select_menu(&recipes, 3, &constraints).unwrap();

    // 只剩一个非素食菜谱，min_vege 无法满足，走兜底
    assert_eq!(selection.menu.len(), 3);
    assert!(selection.stats.is_fallback());
    for recipe in &selection.menu {
        assert!(recipe.ingredients.iter().all(|ing| ing.name.to_lowercase() != "pâtes"));
    }
}

#[test]
fn no_duplicates_yields_unique_ids() {
    let recipes: Vec<Recipe> = sample_recipes()
        .into_iter()
        .cycle()
        .take(9)
        .collect();
    let constraints = MenuConstraints {
        no_duplicates: true,
        seed: Some(1),
        ..MenuConstraints::default()
    };
    let selection = select_menu(&recipes, 3, &constraints).unwrap();

    let ids: HashSet<&str> = selection.menu.iter().filter_map(|r| r.key()).collect();
    assert_eq!(selection.menu.len(), 3);
    assert_eq!(ids.len(), 3);
}

#[test]
fn weekly_budget_cap_is_met() {
    let recipes = sample_recipes();
    let constraints = MenuConstraints {
        max_weekly_budget: Some(5.0),
        seed: Some(1),
        ..MenuConstraints::default()
    };
    let selection = select_menu(&recipes, 3, &constraints).unwrap();

    assert_eq!(selection.menu.len(), 3);
    let total: f64 = selection.menu.iter().map(|r| r.budget_eur).sum();
    assert!(total <= 5.0);
}

#[test]
fn same_seed_gives_same_menu() {
    let recipes = sample_recipes();
    let constraints = MenuConstraints {
        min_vege: 1,
        seed: Some(2024),
        ..MenuConstraints::default()
    };
    for days in 1..=7 {
        let first = plan(&recipes, days, &constraints).unwrap();
        let second = plan(&recipes, days, &constraints).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn shopping_list_sums_first_two_recipes() {
    let recipes = sample_recipes();
    let menu: Vec<&Recipe> = recipes.iter().take(2).collect();
    let items = consolidate(&menu);

    assert_eq!(items.len(), 2);
    assert_eq!((items[0].name.as_str(), items[0].unit.as_str(), items[0].qty), ("pâtes", "g", 200.0));
    assert_eq!((items[1].name.as_str(), items[1].unit.as_str(), items[1].qty), ("riz", "g", 150.0));
}

#[test]
fn empty_pool_gives_empty_plan() {
    let recipes = sample_recipes();
    let constraints = MenuConstraints {
        excluded_ingredients: Some(vec!["pâtes".into(), "riz".into()]),
        ..MenuConstraints::default()
    };
    let (plan, stats) = plan_with_stats(&recipes, 4, &constraints).unwrap();

    assert_eq!(plan.days, 4);
    assert!(plan.menu.is_empty());
    assert!(plan.shopping_list.is_empty());
    assert_eq!(stats.outcome, SelectionOutcome::EmptyPool);
}

#[test]
fn menu_only_contains_filtered_recipes() {
    let recipes = sample_recipes();
    let constraints = MenuConstraints {
        max_time: Some(15),
        min_vege: 0,
        seed: Some(5),
        ..MenuConstraints::default()
    };
    let plan = plan(&recipes, 6, &constraints).unwrap();

    assert_eq!(plan.menu.len(), 6);
    assert!(plan.menu.iter().all(|r| r.time_min <= 15));
}

#[test]
fn padded_ingredient_names_are_still_excluded() {
    let recipes = vec![
        Recipe::new("r")
            .with_time(10)
            .with_ingredient(" Pâtes", 100.0, "g"),
        Recipe::new("s")
            .with_time(10)
            .with_ingredient("riz", 50.0, "g"),
    ];
    let constraints = MenuConstraints {
        excluded_ingredients: Some(vec!["pâtes".into()]),
        min_vege: 0,
        seed: Some(1),
        ..MenuConstraints::default()
    };
    let plan = plan(&recipes, 2, &constraints).unwrap();

    assert!(plan.menu.iter().all(|r| r.key() == Some("s")));
    assert!(plan.shopping_list.iter().all(|item| item.name != "pâtes"));
}
