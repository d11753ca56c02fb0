use thiserror::Error;

use crate::input::layout::BenchmarkLayout;
use crate::input::{InputError, PlanScores, load_database};
use crate::stats::{StatError, SummaryStat};

#[derive(Debug, Error)]
pub enum EvalError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{stat} over Plan{plan} positives: {source}")]
    Stat {
        stat: &'static str,
        plan: u32,
        source: StatError,
    },
}

pub fn count_false_pos(threshold: f64, scores: &[f64]) -> usize {
    let mut count = 0usize;
    for &score in scores {
        if score >= threshold {
            count += 1;
        }
    }
    count
}

pub fn evaluate_plans(stat: SummaryStat, plans: &[PlanScores]) -> Result<Vec<usize>, EvalError> {
    let mut counts = Vec::with_capacity(plans.len());
    for plan in plans {
        let threshold = stat
            .apply(&plan.positives)
            .map_err(|source| EvalError::Stat {
                stat: stat.name(),
                plan: plan.plan,
                source,
            })?;
        counts.push(count_false_pos(threshold, &plan.randoms));
    }
    Ok(counts)
}

pub fn evaluate_database(
    stat: SummaryStat,
    layout: &BenchmarkLayout,
    db: u32,
) -> Result<Vec<usize>, EvalError> {
    let data = load_database(layout, db)?;
    evaluate_plans(stat, &data.plans)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/evaluate.rs"]
mod tests;
