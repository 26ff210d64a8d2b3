use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::input::ScoreSet;
use crate::model::ranking::RankEntry;
use crate::model::stats::Descriptive;
use crate::pipeline::PipelineError;
use crate::pipeline::stage3_fit::Stage3Output;
use crate::plot::{CANVAS_HEIGHT, CANVAS_WIDTH, PlotInput, PlotLabels, render_plot, save_plot};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    FitSummary, HistogramSummary, InputInfo, ReportContext, SummaryData, ToolInfo, count_line,
};

pub const PLOT_FILE: &str = "score_distribution.png";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone, Copy)]
pub struct Stage5Options {
    pub render_plot: bool,
    pub write_files: bool,
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub scores: &'a ScoreSet,
    pub stats: &'a Descriptive,
    pub fit: &'a Stage3Output,
    pub ranking: &'a [RankEntry],
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone)]
pub struct Stage5Output {
    pub count_line: String,
    pub written: Vec<PathBuf>,
}

pub fn write_reports(
    input: &Stage5Input,
    out_dir: &Path,
    options: Stage5Options,
) -> Result<Stage5Output, PipelineError> {
    let labels = PlotLabels::for_score(input.scores.field.label());
    let mut written = Vec::new();

    if options.render_plot || options.write_files {
        fs::create_dir_all(out_dir)?;
    }

    let plot_path = out_dir.join(PLOT_FILE);
    let plot_file = if options.render_plot {
        let img = render_plot(&PlotInput {
            histogram: &input.fit.histogram,
            curve: &input.fit.curve,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        });
        save_plot(&plot_path, &img)?;
        tracing::info!(path = %plot_path.display(), "plot written");
        written.push(plot_path.clone());
        Some(plot_path.display().to_string())
    } else {
        None
    };

    if options.write_files {
        let ctx = ReportContext {
            input_path: input.scores.path.display().to_string(),
            field: input.scores.field,
            n_records: input.scores.n_records,
            stats: input.stats,
            fit: &input.fit.fit,
            curve_points: input.fit.curve.len(),
            histogram: &input.fit.histogram,
            labels: &labels,
            plot_file: plot_file.clone(),
            ranking: input.ranking,
        };
        let report_path = out_dir.join(REPORT_FILE);
        write_text(&report_path, &render_report_text(&ctx))?;
        written.push(report_path);

        let summary = build_summary(input, labels, plot_file);
        let json = render_summary_json(&summary)?;
        let summary_path = out_dir.join(SUMMARY_FILE);
        write_text(&summary_path, &json)?;
        written.push(summary_path);
    }

    Ok(Stage5Output {
        count_line: count_line(input.scores.n_records),
        written,
    })
}

fn build_summary(input: &Stage5Input, labels: PlotLabels, plot_file: Option<String>) -> SummaryData {
    let fit = &input.fit.fit;
    let curve = &input.fit.curve;
    SummaryData {
        tool: ToolInfo {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputInfo {
            path: input.scores.path.display().to_string(),
            field: input.scores.field,
            json_key: input.scores.field.json_key(),
            n_records: input.scores.n_records,
        },
        stats: *input.stats,
        fit: FitSummary {
            mean: fit.mean,
            std_dev: fit.std_dev,
            peak_density: fit.peak(),
            curve_points: curve.len(),
            curve_range: match (curve.first(), curve.last()) {
                (Some(a), Some(b)) => Some([a.x, b.x]),
                _ => None,
            },
        },
        histogram: HistogramSummary::from(&input.fit.histogram),
        labels,
        plot_file,
        ranking: input.ranking.to_vec(),
    }
}

fn write_text(path: &Path, contents: &str) -> Result<(), PipelineError> {
    let mut f = BufWriter::new(File::create(path)?);
    f.write_all(contents.as_bytes())?;
    f.flush()?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
