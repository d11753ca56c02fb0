use crate::report::{RunSummary, report_line};

pub fn render_report_text(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str("Hough Benchmark False-Positive Report\n");
    out.push_str("=====================================\n\n");

    out.push_str(&format!("Tool: {} {}\n", summary.tool, summary.version));
    out.push_str(&format!("Results root: {}\n", summary.results_root));
    out.push_str(&format!("Selection mode: {}\n\n", summary.selection_mode));

    for report in &summary.databases {
        out.push_str(&format!(
            "{} (statistic: {}, total: {})\n",
            report_line(report.db, &report.counts),
            report.statistic,
            report.total
        ));
    }

    out.push_str(&format!(
        "\nTotal false positives across databases: {}\n",
        summary.total_false_positives
    ));

    out
}
