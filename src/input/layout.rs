use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::input::InputError;

pub const DATABASE_COUNT: u32 = 4;
pub const PLAN_COUNT: u32 = 4;
pub const DEFAULT_RESULTS_DIR: &str = "Results/Hough_Benchmarks";
pub const POSITIVE_SCORES_FILE: &str = "benchmark-hough-pos.txt";
pub const RANDOM_SCORES_FILE: &str = "benchmark-hough-rand.txt";

#[derive(Debug, Clone)]
pub struct BenchmarkLayout {
    pub root: PathBuf,
}

impl BenchmarkLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn databases() -> RangeInclusive<u32> {
        1..=DATABASE_COUNT
    }

    pub fn plans() -> RangeInclusive<u32> {
        1..=PLAN_COUNT
    }

    pub fn plan_dir(&self, db: u32, plan: u32) -> PathBuf {
        self.root.join(format!("DB{db}")).join(format!("Plan{plan}"))
    }

    pub fn resolve_positive(&self, db: u32, plan: u32) -> Result<PathBuf, InputError> {
        resolve_scores_path(&self.plan_dir(db, plan), POSITIVE_SCORES_FILE)
    }

    pub fn resolve_random(&self, db: u32, plan: u32) -> Result<PathBuf, InputError> {
        resolve_scores_path(&self.plan_dir(db, plan), RANDOM_SCORES_FILE)
    }
}

fn resolve_scores_path(dir: &Path, name: &str) -> Result<PathBuf, InputError> {
    let plain = dir.join(name);
    if plain.exists() {
        return Ok(plain);
    }
    let gz = dir.join(format!("{name}.gz"));
    if gz.exists() {
        return Ok(gz);
    }
    Err(InputError::MissingInput(format!(
        "missing {} or {}.gz in {}",
        name,
        name,
        dir.display()
    )))
}
