use crate::report::{ReportContext, count_line, format_f64_6};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str(&ctx.labels.title);
    out.push('\n');
    out.push_str(&"=".repeat(ctx.labels.title.chars().count()));
    out.push_str("\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!("File: {}\n", ctx.input_path));
    out.push_str(&format!("Field: {}\n", ctx.field.json_key()));
    out.push_str(&format!("{}\n\n", count_line(ctx.n_records)));

    out.push_str("2. Descriptive statistics\n");
    let s = ctx.stats;
    out.push_str(&format!("Mean: {}\n", format_f64_6(s.mean)));
    out.push_str(&format!("Std dev (population): {}\n", format_f64_6(s.std_dev)));
    out.push_str(&format!(
        "Min / P10 / Median / P90 / Max: {} / {} / {} / {} / {}\n\n",
        format_f64_6(s.min),
        format_f64_6(s.p10),
        format_f64_6(s.median),
        format_f64_6(s.p90),
        format_f64_6(s.max)
    ));

    out.push_str("3. Normal fit\n");
    if ctx.fit.is_degenerate() {
        out.push_str("Standard deviation is zero; no curve drawn.\n\n");
    } else {
        out.push_str(&format!(
            "{}: N({}, {}^2)\n",
            ctx.labels.curve_label,
            format_f64_6(ctx.fit.mean),
            format_f64_6(ctx.fit.std_dev)
        ));
        out.push_str(&format!("Peak density: {}\n", format_f64_6(ctx.fit.peak())));
        out.push_str(&format!(
            "Curve: {} points over mean +/- 3 sd\n\n",
            ctx.curve_points
        ));
    }

    out.push_str("4. Histogram\n");
    out.push_str(&format!(
        "{}: {} bins, width {}\n",
        ctx.labels.histogram_label,
        ctx.histogram.n_bins(),
        format_f64_6(ctx.histogram.bin_width())
    ));
    for (i, count) in ctx.histogram.counts.iter().enumerate() {
        out.push_str(&format!(
            "[{}, {}{} {} ({})\n",
            format_f64_6(ctx.histogram.edges[i]),
            format_f64_6(ctx.histogram.edges[i + 1]),
            if i + 1 == ctx.histogram.n_bins() { "]" } else { ")" },
            count,
            format_f64_6(ctx.histogram.density[i])
        ));
    }
    out.push('\n');

    out.push_str("5. Plot\n");
    out.push_str(&format!(
        "Axes: x = {}, y = {}\n",
        ctx.labels.x_label, ctx.labels.y_label
    ));
    match &ctx.plot_file {
        Some(path) => out.push_str(&format!("Image: {}\n", path)),
        None => out.push_str("Image: not rendered\n"),
    }

    if !ctx.ranking.is_empty() {
        out.push_str("\n6. Ranking\n");
        for entry in ctx.ranking {
            let who = match &entry.serial {
                Some(serial) => serial.clone(),
                None => format!("record #{}", entry.index),
            };
            out.push_str(&format!(
                "{}. {} {}\n",
                entry.rank,
                who,
                format_f64_6(entry.score)
            ));
        }
    }

    out
}
