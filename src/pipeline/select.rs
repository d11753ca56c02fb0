use crate::input::layout::BenchmarkLayout;
use crate::pipeline::evaluate::{EvalError, evaluate_database};
use crate::stats::SummaryStat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    // Historical loop: every round re-evaluates the first candidate, so the
    // running best can never be beaten and the mean's counts always win.
    FirstOnly,
    Exhaustive,
}

impl SelectionMode {
    pub fn name(self) -> &'static str {
        match self {
            SelectionMode::FirstOnly => "first-only",
            SelectionMode::Exhaustive => "exhaustive",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Selection {
    pub stat: SummaryStat,
    pub counts: Vec<usize>,
    pub total: usize,
}

pub fn select_best(
    layout: &BenchmarkLayout,
    db: u32,
    mode: SelectionMode,
) -> Result<Selection, EvalError> {
    let candidates = SummaryStat::CANDIDATES;
    let first = candidates[0];

    let mut best_counts = evaluate_database(first, layout, db)?;
    let mut best_total: usize = best_counts.iter().sum();
    let mut best_stat = first;

    for idx in 1..candidates.len() {
        let candidate = match mode {
            SelectionMode::FirstOnly => first,
            SelectionMode::Exhaustive => candidates[idx],
        };
        let counts = evaluate_database(candidate, layout, db)?;
        let total: usize = counts.iter().sum();
        if total < best_total {
            best_counts = counts;
            best_total = total;
            best_stat = candidate;
        }
    }

    Ok(Selection {
        stat: best_stat,
        counts: best_counts,
        total: best_total,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/select.rs"]
mod tests;
