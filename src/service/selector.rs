use crate::errors::PlanError;
use crate::models::{
    MenuConstraints, Recipe, SelectionOutcome, SelectionStats, TAG_FISH, TAG_MEAT, TAG_VEGE,
};
use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 每次选择的最大抽样次数
pub const MAX_ATTEMPTS: usize = 200;

/// 菜单：按天排列的菜谱引用
pub type Menu<'a> = Vec<&'a Recipe>;

/// 选择结果
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub menu: Menu<'a>,
    pub stats: SelectionStats,
}

/// 选菜入口：每次调用独立创建随机数生成器
///
/// 有 seed 时结果完全可复现；seed 为 None 时使用系统熵。
pub fn select_menu<'a>(
    recipes: &'a [Recipe],
    days: usize,
    constraints: &MenuConstraints,
) -> Result<Selection<'a>, PlanError> {
    let mut rng = match constraints.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    select_menu_with_rng(recipes, days, constraints, &mut rng)
}

/// 使用调用方提供的生成器选菜
pub fn select_menu_with_rng<'a, R: Rng + ?Sized>(
    recipes: &'a [Recipe],
    days: usize,
    constraints: &MenuConstraints,
    rng: &mut R,
) -> Result<Selection<'a>, PlanError> {
    // 1. 去重模式下每个菜谱必须有 id
    if constraints.no_duplicates {
        if let Some(index) = recipes.iter().position(|r| r.key().is_none()) {
            return Err(PlanError::MissingRecipeId { index });
        }
    }

    // 2. 预过滤 (时间 + 排除食材)，之后池不再变化
    let pool = filter_pool(recipes, constraints);
    if pool.is_empty() {
        tracing::warn!(
            "过滤后候选池为空 (输入 {} 个菜谱), 返回空菜单",
            recipes.len()
        );
        return Ok(Selection {
            menu: Vec::new(),
            stats: SelectionStats {
                requested_days: days,
                pool_size: 0,
                menu_len: 0,
                attempts: 0,
                outcome: SelectionOutcome::EmptyPool,
            },
        });
    }

    let distinct = if constraints.no_duplicates {
        distinct_by_id(&pool)
    } else {
        Vec::new()
    };
    let unique_draws = constraints.no_duplicates && distinct.len() >= days;

    // 3. 抽样 + 约束检查，第一个满足的候选立即接受
    for attempt in 1..=MAX_ATTEMPTS {
        let candidate = if unique_draws {
            draw_unique(&pool, days, rng)
        } else {
            draw_with_repetition(&pool, days, rng)
        };

        if let Some(reason) = rejection_reason(&candidate, constraints) {
            tracing::debug!("候选 {} 被拒绝: {}", attempt, reason);
            continue;
        }

        tracing::info!(
            "菜单选择完成: 第 {} 次尝试满足约束, {} 天, 候选池 {}",
            attempt,
            candidate.len(),
            pool.len()
        );
        return Ok(Selection {
            stats: SelectionStats {
                requested_days: days,
                pool_size: pool.len(),
                menu_len: candidate.len(),
                attempts: attempt,
                outcome: SelectionOutcome::Accepted { attempt },
            },
            menu: candidate,
        });
    }

    // 4. 兜底：按池顺序循环填充到 days，忽略约束
    //    不同 id 足够时按去重后的池循环，保证不重复
    let menu = if unique_draws {
        fallback_menu(&distinct, days)
    } else {
        fallback_menu(&pool, days)
    };
    tracing::warn!(
        "{} 次尝试均未满足约束, 使用兜底菜单 ({} 天, 候选池 {})",
        MAX_ATTEMPTS,
        menu.len(),
        pool.len()
    );

    Ok(Selection {
        stats: SelectionStats {
            requested_days: days,
            pool_size: pool.len(),
            menu_len: menu.len(),
            attempts: MAX_ATTEMPTS,
            outcome: SelectionOutcome::Fallback,
        },
        menu,
    })
}

/// 按时间上限和排除食材过滤
pub fn filter_pool<'a>(recipes: &'a [Recipe], constraints: &MenuConstraints) -> Vec<&'a Recipe> {
    let excluded = constraints.excluded_lowercase();
    recipes
        .iter()
        .filter(|r| r.fits_time(constraints.max_time))
        .filter(|r| excluded.is_empty() || !r.contains_any_ingredient(&excluded))
        .collect()
}

/// 按 id 去重，保留首次出现的顺序
fn distinct_by_id<'a>(pool: &[&'a Recipe]) -> Vec<&'a Recipe> {
    let mut seen: IndexSet<&'a str> = IndexSet::with_capacity(pool.len());
    pool.iter()
        .copied()
        .filter(|r| r.key().map_or(true, |id| seen.insert(id)))
        .collect()
}

/// 不重复抽取：每次从尚未使用的 id 中随机选一个
fn draw_unique<'a, R: Rng + ?Sized>(pool: &[&'a Recipe], days: usize, rng: &mut R) -> Menu<'a> {
    let mut used: IndexSet<&'a str> = IndexSet::with_capacity(days);
    let mut candidate = Vec::with_capacity(days);

    while candidate.len() < days {
        let available: Vec<&'a Recipe> = pool
            .iter()
            .copied()
            .filter(|r| r.key().map_or(false, |id| !used.contains(id)))
            .collect();
        let Some(&recipe) = available.choose(rng) else {
            break;
        };
        if let Some(id) = recipe.key() {
            used.insert(id);
        }
        candidate.push(recipe);
    }

    candidate
}

/// 可重复抽取 days 次
fn draw_with_repetition<'a, R: Rng + ?Sized>(
    pool: &[&'a Recipe],
    days: usize,
    rng: &mut R,
) -> Menu<'a> {
    (0..days).filter_map(|_| pool.choose(rng).copied()).collect()
}

fn count_tag(candidate: &[&Recipe], tag: &str) -> usize {
    candidate.iter().filter(|r| r.has_tag(tag)).count()
}

fn total_budget(candidate: &[&Recipe]) -> f64 {
    candidate.iter().map(|r| r.budget_eur).sum()
}

/// 平均预算是否在 [min, max] 内；空候选视为满足
pub fn within_budget_avg(candidate: &[&Recipe], min: f64, max: f64) -> bool {
    if candidate.is_empty() {
        return true;
    }
    let avg = total_budget(candidate) / candidate.len() as f64;
    min <= avg && avg <= max
}

/// 按固定顺序检查约束，返回第一个不满足的原因
fn rejection_reason(candidate: &[&Recipe], constraints: &MenuConstraints) -> Option<&'static str> {
    if count_tag(candidate, TAG_VEGE) < constraints.min_vege {
        return Some("vege count below min_vege");
    }

    let fish = count_tag(candidate, TAG_FISH);
    let meat = count_tag(candidate, TAG_MEAT);
    if fish < constraints.min_fish || constraints.max_meat.is_some_and(|max| meat > max) {
        return Some("fish/meat quota not met");
    }

    if let Some((min, max)) = constraints.avg_budget_bounds() {
        if !within_budget_avg(candidate, min, max) {
            return Some("average budget outside tolerance");
        }
    }

    if let Some(max) = constraints.max_weekly_budget {
        if total_budget(candidate) > max {
            return Some("total budget above max_weekly_budget");
        }
    }

    None
}

fn fallback_menu<'a>(pool: &[&'a Recipe], days: usize) -> Menu<'a> {
    pool.iter().copied().cycle().take(days).collect()
}
