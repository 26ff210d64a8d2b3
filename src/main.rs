mod input;
mod logging;
mod model;
mod pipeline;
mod plot;
mod report;

use std::path::PathBuf;

use clap::Parser;

use crate::input::DEFAULT_INPUT;
use crate::input::records::ScoreField;
use crate::pipeline::PipelineError;
use crate::pipeline::stage1_load::{Stage1Params, run_stage1};
use crate::pipeline::stage2_stats::run_stage2;
use crate::pipeline::stage3_fit::{DEFAULT_BINS, DEFAULT_CURVE_POINTS, Stage3Inputs, run_stage3};
use crate::pipeline::stage4_rank::{DEFAULT_TOP, Stage4Inputs, run_stage4};
use crate::pipeline::stage5_report::{Stage5Input, Stage5Options, write_reports};
use crate::report::count_line;

#[derive(Debug, Clone, Parser)]
#[command(name = "score-normfit")]
#[command(version)]
#[command(about = "Fit a normal distribution to user score records and plot a density histogram")]
struct Cli {
    /// JSON array of user records (`.gz` accepted)
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory for the plot and report files
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Score field to analyse
    #[arg(long, value_enum, default_value_t = ScoreField::Total)]
    field: ScoreField,

    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,

    /// Number of samples on the fitted normal curve
    #[arg(long, default_value_t = DEFAULT_CURVE_POINTS)]
    curve_points: usize,

    /// Number of highest-scoring records listed in the ranking (0 disables it)
    #[arg(long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Skip rendering the PNG plot
    #[arg(long)]
    no_plot: bool,

    /// Skip writing report.txt and summary.json
    #[arg(long)]
    no_files: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(&cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let stage1 = run_stage1(&Stage1Params {
        input: cli.input.clone(),
        field: cli.field,
    })?;
    if stage1.scores.values.is_empty() {
        tracing::warn!(path = %stage1.scores.path.display(), "no records; nothing to fit");
        println!("{}", count_line(0));
        return Ok(());
    }

    let stage2 = run_stage2(&stage1.scores.values)?;
    let stage3 = run_stage3(&Stage3Inputs {
        values: &stage1.scores.values,
        stats: &stage2.stats,
        bins: cli.bins,
        curve_points: cli.curve_points,
    })?;

    let stage4 = run_stage4(&Stage4Inputs {
        scores: &stage1.scores,
        top: cli.top,
    });

    let stage5 = write_reports(
        &Stage5Input {
            scores: &stage1.scores,
            stats: &stage2.stats,
            fit: &stage3,
            ranking: &stage4.ranking,
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        &cli.out,
        Stage5Options {
            render_plot: !cli.no_plot,
            write_files: !cli.no_files,
        },
    )?;

    println!("{}", stage5.count_line);
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
