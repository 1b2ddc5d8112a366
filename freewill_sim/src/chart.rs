//! Stacked bar chart of a run's result table.
//!
//! One bar per measurement method: a gray baseline segment with the influence
//! segment stacked on top in dark blue. Each bar carries its total above it,
//! and influences above 0.05 points are labelled inside their segment.

use crate::table::{Method, ResultRow, ResultTable};
use freewill_core::ExperimentParams;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::{Path, PathBuf};

const BASELINE_COLOR: RGBColor = RGBColor(128, 128, 128);
const INFLUENCE_COLOR: RGBColor = RGBColor(0, 0, 139);

/// Influence at or below this many points gets no inside label.
const INFLUENCE_LABEL_THRESHOLD: f64 = 0.05;

/// Half the bar width, in category units.
const BAR_HALF_WIDTH: f64 = 0.4;

/// Pixel height of one inside label line.
const LABEL_LINE_HEIGHT: i32 = 16;

/// Returns `<dir>/<run_name>_simulation.png`.
pub fn chart_path(run_dir: &Path, run_name: &str) -> PathBuf {
    run_dir.join(format!("{}_simulation.png", run_name))
}

/// Label drawn above a bar.
pub fn total_label(row: &ResultRow) -> String {
    format!("{:.2}%", row.total())
}

/// Lines drawn inside the influence segment, if it is tall enough.
pub fn influence_label(row: &ResultRow) -> Option<Vec<String>> {
    if row.influence <= INFLUENCE_LABEL_THRESHOLD {
        return None;
    }
    let mut lines = vec![format!("+{:.2}%", row.influence)];
    if row.method == Method::Majority {
        lines.push("(Free Will)".to_string());
    }
    Some(lines)
}

/// True if `lines` label lines fit inside a segment `segment_px` pixels tall.
pub fn label_fits(segment_px: i32, lines: usize) -> bool {
    segment_px >= LABEL_LINE_HEIGHT * lines as i32
}

/// Chart title.
pub fn title(params: &ExperimentParams) -> String {
    format!(
        "Free Will Impact vs. Deterministic Baseline (N={}, K={})",
        thousands(params.population_size()),
        thousands(params.influence_count())
    )
}

/// Upper bound of the y axis: 20% headroom over the tallest bar.
pub fn y_limit(table: &ResultTable) -> f64 {
    let max_total = table.max_total();
    if max_total > 0.0 {
        max_total * 1.2
    } else {
        1.0
    }
}

/// Formats an integer with comma thousands separators.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders the stacked bar chart to a PNG file.
pub fn render_stacked_bars(
    out_path: &Path,
    table: &ResultTable,
    params: &ExperimentParams,
) -> Result<(), Box<dyn Error>> {
    let rows = table.rows();
    let y_max = y_limit(table);

    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title(params), ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(rows.len() as f64 - 0.5), 0.0f64..y_max)?;

    let method_at = |x: &f64| -> String {
        let i = x.round();
        if (x - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < rows.len() {
            rows[i as usize].method.name().to_string()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&method_at)
        .y_desc(format!(
            "Percentage of States set to \"{}\"",
            params.target_label()
        ))
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.2))
        .draw()?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, row)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, row.baseline)],
                BASELINE_COLOR.filled(),
            )
        }))?
        .label("Deterministic Baseline")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 16, y + 5)], BASELINE_COLOR.filled())
        });

    chart
        .draw_series(rows.iter().enumerate().map(|(i, row)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, row.baseline), (x + BAR_HALF_WIDTH, row.total())],
                INFLUENCE_COLOR.filled(),
            )
        }))?
        .label("Free Will Influence")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 16, y + 5)], INFLUENCE_COLOR.filled())
        });

    let total_style = TextStyle::from(("sans-serif", 16).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let label_font = ("sans-serif", 14).into_font().style(FontStyle::Bold);
    let inside_style = TextStyle::from(label_font.clone())
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    // Thin segments get their label beside the bar instead
    let beside_style = TextStyle::from(label_font)
        .color(&INFLUENCE_COLOR)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (i, row) in rows.iter().enumerate() {
        let x = i as f64;

        chart.draw_series(std::iter::once(
            EmptyElement::at((x, row.total()))
                + Text::new(total_label(row), (0, -4), total_style.clone()),
        ))?;

        if let Some(lines) = influence_label(row) {
            let mid = row.baseline + row.influence / 2.0;
            let bottom_px = chart.backend_coord(&(x, row.baseline)).1;
            let top_px = chart.backend_coord(&(x, row.total())).1;
            let segment_px = bottom_px - top_px;
            let (anchor, dx, style) = if label_fits(segment_px, lines.len()) {
                ((x, mid), 0, &inside_style)
            } else {
                ((x + BAR_HALF_WIDTH, mid), 6, &beside_style)
            };
            let first_dy = -(LABEL_LINE_HEIGHT / 2) * (lines.len() as i32 - 1);
            for (j, line) in lines.into_iter().enumerate() {
                let dy = first_dy + LABEL_LINE_HEIGHT * j as i32;
                chart.draw_series(std::iter::once(
                    EmptyElement::at(anchor) + Text::new(line, (dx, dy), style.clone()),
                ))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
