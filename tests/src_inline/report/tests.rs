use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{RunSummary, format_counts, report_line, run_report, write_reports};
use crate::input::layout::{BenchmarkLayout, POSITIVE_SCORES_FILE, RANDOM_SCORES_FILE};
use crate::pipeline::select::SelectionMode;
use crate::report::ReportError;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("hough_report_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_benchmark_tree(root: &Path) {
    for db in 1..=4u32 {
        for plan in 1..=4u32 {
            let dir = root.join(format!("DB{db}")).join(format!("Plan{plan}"));
            fs::create_dir_all(&dir).unwrap();
            write_file(&dir.join(POSITIVE_SCORES_FILE), "1.0\n2.0\n3.0\n");
            write_file(&dir.join(RANDOM_SCORES_FILE), "0.5\n1.5\n2.5\n3.5\n");
        }
    }
}

#[test]
fn test_format_counts() {
    assert_eq!(format_counts(&[2, 2, 2, 2]), "[2, 2, 2, 2]");
    assert_eq!(format_counts(&[7]), "[7]");
    assert_eq!(format_counts(&[]), "[]");
}

#[test]
fn test_report_line() {
    assert_eq!(
        report_line(1, &[2, 0, 3, 1]),
        "False positives for DB1 are [2, 0, 3, 1]"
    );
}

#[test]
fn test_run_report_emits_four_lines_in_order() {
    let root = make_temp_dir();
    write_benchmark_tree(&root);

    let layout = BenchmarkLayout::new(&root);
    let mut out = Vec::new();
    let reports = run_report(&layout, SelectionMode::FirstOnly, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for (idx, line) in lines.iter().enumerate() {
        assert_eq!(
            *line,
            format!("False positives for DB{} are [2, 2, 2, 2]", idx + 1)
        );
    }

    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].statistic, "mean");
    assert_eq!(reports[3].db, 4);
    assert_eq!(reports[0].total, 8);
}

#[test]
fn test_run_report_aborts_on_missing_database() {
    let root = make_temp_dir();
    write_benchmark_tree(&root);
    fs::remove_dir_all(root.join("DB3")).unwrap();

    let layout = BenchmarkLayout::new(&root);
    let mut out = Vec::new();
    let err = run_report(&layout, SelectionMode::FirstOnly, &mut out).unwrap_err();
    assert!(matches!(err, ReportError::Eval(_)));

    // Databases reported before the failure stay written.
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_summary_json_round_back() {
    let root = make_temp_dir();
    write_benchmark_tree(&root);

    let layout = BenchmarkLayout::new(&root);
    let reports = run_report(&layout, SelectionMode::FirstOnly, &mut Vec::new()).unwrap();
    let summary = RunSummary::new(&layout, SelectionMode::FirstOnly, reports);

    let rendered = render_summary_json(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["tool"], "hough-benchqc");
    assert_eq!(value["selection_mode"], "first-only");
    assert_eq!(value["databases"].as_array().unwrap().len(), 4);
    assert_eq!(value["databases"][0]["statistic"], "mean");
    assert_eq!(value["databases"][0]["counts"][0], 2);
    assert_eq!(value["total_false_positives"], 32);
}

#[test]
fn test_write_reports_creates_artifacts() {
    let root = make_temp_dir();
    write_benchmark_tree(&root);

    let layout = BenchmarkLayout::new(&root);
    let reports = run_report(&layout, SelectionMode::FirstOnly, &mut Vec::new()).unwrap();
    let summary = RunSummary::new(&layout, SelectionMode::FirstOnly, reports);

    let out_dir = make_temp_dir().join("artifacts");
    write_reports(&summary, &out_dir).unwrap();

    let text = fs::read_to_string(out_dir.join("report.txt")).unwrap();
    assert!(text.contains("False positives for DB1 are [2, 2, 2, 2]"));
    assert!(text.contains("Total false positives across databases: 32"));

    let json = fs::read_to_string(out_dir.join("summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["databases"].as_array().unwrap().len(), 4);
}

#[test]
fn test_render_report_text_sections() {
    let layout = BenchmarkLayout::new("Results/Hough_Benchmarks");
    let summary = RunSummary::new(
        &layout,
        SelectionMode::Exhaustive,
        vec![super::DatabaseReport {
            db: 1,
            statistic: "median",
            counts: vec![1, 1, 1, 1],
            total: 4,
        }],
    );

    let text = render_report_text(&summary);
    assert!(text.starts_with("Hough Benchmark False-Positive Report\n"));
    assert!(text.contains("Selection mode: exhaustive"));
    assert!(text.contains("False positives for DB1 are [1, 1, 1, 1] (statistic: median, total: 4)"));
}
