mod input;
mod logging;
mod pipeline;
mod report;
mod stats;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::input::layout::{BenchmarkLayout, DEFAULT_RESULTS_DIR};
use crate::pipeline::select::SelectionMode;
use crate::report::json::render_summary_json;
use crate::report::{RunSummary, run_report, write_reports};

#[derive(Parser)]
#[command(name = "hough-benchqc")]
#[command(about = "False-positive threshold analysis over Hough benchmark scores", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate candidate thresholds and report per-database false positives
    Run {
        /// Root directory holding DB<n>/Plan<m> benchmark score files
        #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
        results: PathBuf,

        /// Directory to write report.txt and summary.json into
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output format for stdout
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Threshold selection strategy
        #[arg(long, value_enum, default_value = "first-only")]
        selection: SelectionArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SelectionArg {
    /// Historical selection loop; always reports the first statistic (mean)
    FirstOnly,
    /// Evaluate every candidate statistic and keep the lowest total
    Exhaustive,
}

impl SelectionArg {
    fn to_mode(self) -> SelectionMode {
        match self {
            SelectionArg::FirstOnly => SelectionMode::FirstOnly,
            SelectionArg::Exhaustive => SelectionMode::Exhaustive,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Run {
            results,
            out,
            format,
            selection,
        } => {
            let layout = BenchmarkLayout::new(results);
            let mode = selection.to_mode();

            let reports = match format {
                OutputFormat::Text => {
                    let stdout = std::io::stdout();
                    run_report(&layout, mode, &mut stdout.lock()).map_err(|e| e.to_string())?
                }
                OutputFormat::Json => {
                    run_report(&layout, mode, &mut Vec::new()).map_err(|e| e.to_string())?
                }
            };

            let summary = RunSummary::new(&layout, mode, reports);
            if format == OutputFormat::Json {
                println!(
                    "{}",
                    render_summary_json(&summary).map_err(|e| e.to_string())?
                );
            }

            if let Some(out_dir) = out {
                write_reports(&summary, &out_dir).map_err(|e| e.to_string())?;
                info!("reports written to {}", out_dir.display());
            }

            Ok(())
        }
    }
}
