use thiserror::Error;
use tracing::{debug, warn};

pub mod layout;
pub mod scores;

use layout::BenchmarkLayout;
use scores::parse_scores;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct PlanScores {
    pub plan: u32,
    pub positives: Vec<f64>,
    pub randoms: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct DatabaseScores {
    pub db: u32,
    pub plans: Vec<PlanScores>,
}

pub fn load_plan(layout: &BenchmarkLayout, db: u32, plan: u32) -> Result<PlanScores, InputError> {
    let pos_path = layout.resolve_positive(db, plan)?;
    let rand_path = layout.resolve_random(db, plan)?;

    debug!(
        "discovered score files: pos={}, rand={}",
        pos_path.display(),
        rand_path.display()
    );

    let positives = parse_scores(&pos_path)?;
    let randoms = parse_scores(&rand_path)?;

    if positives.len() != randoms.len() {
        warn!(
            "positive and random score counts differ for DB{} Plan{}: {} vs {}",
            db,
            plan,
            positives.len(),
            randoms.len()
        );
    }

    Ok(PlanScores {
        plan,
        positives,
        randoms,
    })
}

pub fn load_database(layout: &BenchmarkLayout, db: u32) -> Result<DatabaseScores, InputError> {
    let mut plans = Vec::with_capacity(layout::PLAN_COUNT as usize);
    for plan in BenchmarkLayout::plans() {
        plans.push(load_plan(layout, db, plan)?);
    }
    Ok(DatabaseScores { db, plans })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
