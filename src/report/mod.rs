use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub mod json;
pub mod text;

use crate::input::layout::BenchmarkLayout;
use crate::pipeline::evaluate::EvalError;
use crate::pipeline::select::{SelectionMode, select_best};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseReport {
    pub db: u32,
    pub statistic: &'static str,
    pub counts: Vec<usize>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: String,
    pub version: String,
    pub results_root: String,
    pub selection_mode: String,
    pub databases: Vec<DatabaseReport>,
    pub total_false_positives: usize,
}

impl RunSummary {
    pub fn new(
        layout: &BenchmarkLayout,
        mode: SelectionMode,
        databases: Vec<DatabaseReport>,
    ) -> Self {
        let total = databases.iter().map(|d| d.total).sum();
        Self {
            tool: "hough-benchqc".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            results_root: layout.root.display().to_string(),
            selection_mode: mode.name().to_string(),
            databases,
            total_false_positives: total,
        }
    }
}

pub fn format_counts(counts: &[usize]) -> String {
    let parts: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

pub fn report_line(db: u32, counts: &[usize]) -> String {
    format!("False positives for DB{} are {}", db, format_counts(counts))
}

// Lines are written as each database completes, so earlier output survives a
// later failure.
pub fn run_report<W: Write>(
    layout: &BenchmarkLayout,
    mode: SelectionMode,
    out: &mut W,
) -> Result<Vec<DatabaseReport>, ReportError> {
    let mut reports = Vec::new();
    for db in BenchmarkLayout::databases() {
        let selection = select_best(layout, db, mode)?;
        writeln!(out, "{}", report_line(db, &selection.counts))?;
        reports.push(DatabaseReport {
            db,
            statistic: selection.stat.name(),
            counts: selection.counts,
            total: selection.total,
        });
    }
    Ok(reports)
}

pub fn write_reports(summary: &RunSummary, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join("report.txt");
    fs::write(&report_path, text::render_report_text(summary))?;

    let summary_path = out_dir.join("summary.json");
    fs::write(&summary_path, json::render_summary_json(summary)?)?;

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
