//! Bar charts comparing the analysed sequences, rendered to a PNG.

use std::path::Path;

use anyhow::{bail, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::report::SequenceReport;

const TITLE: &str = "Dinucleotide Analysis (CG/GC and AT/TA)";

const GC_BLUE: RGBColor = RGBColor(0x26, 0x5C, 0xD2);
const AT_RED: RGBColor = RGBColor(0xDC, 0x32, 0x2F);
const OTHER_GRAY: RGBColor = RGBColor(0x80, 0x80, 0x80);
const ORANGE: RGBColor = RGBColor(0xFF, 0x8C, 0x00);
const GC_GREEN: RGBColor = RGBColor(0x2E, 0x8B, 0x57);

// Top of the percentage axis; the space above 100 holds the legend.
const STACK_AXIS_MAX: f64 = 130.0;

// Half width of a stacked bar, and of each bar in a side-by-side pair.
const STACK_HALF: f64 = 0.4;
const PAIR_HALF: f64 = 0.2;

#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { width: 1800, height: 600 }
    }
}

/// The series plotted across the three panels, one entry per sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub gc_percent: Vec<f64>,
    pub at_percent: Vec<f64>,
    pub other_percent: Vec<f64>,
    pub gc_pairs: Vec<usize>,
    pub at_pairs: Vec<usize>,
}

impl ChartData {
    pub fn from_reports(reports: &[SequenceReport]) -> Self {
        Self {
            labels: reports.iter().map(SequenceReport::label).collect(),
            gc_percent: reports.iter().map(|r| r.result.gc_percent).collect(),
            at_percent: reports.iter().map(|r| r.result.at_percent).collect(),
            other_percent: reports.iter().map(|r| r.result.other_percent()).collect(),
            gc_pairs: reports.iter().map(|r| r.result.gc_pairs()).collect(),
            at_pairs: reports.iter().map(|r| r.result.at_pairs()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest pair count in either class.
    pub fn max_count(&self) -> usize {
        self.gc_pairs.iter().chain(&self.at_pairs).copied().max().unwrap_or(0)
    }

    /// Largest GC or AT percentage.
    pub fn max_percent(&self) -> f64 {
        self.gc_percent.iter().chain(&self.at_percent).copied().fold(0.0, f64::max)
    }

    /// Horizontal extent: one unit per sequence, centred on integer positions.
    fn x_range(&self) -> std::ops::Range<f64> {
        -0.5..(self.len() as f64 - 0.5)
    }
}

/// Label for an x tick; blank between sequences.
fn tick_label(labels: &[String], x: f64) -> String {
    let r = x.round();
    if (x - r).abs() > 1e-6 || r < 0.0 {
        return String::new();
    }
    labels.get(r as usize).cloned().unwrap_or_default()
}

fn bar(center: f64, half: f64, bottom: f64, top: f64, color: RGBColor) -> Rectangle<(f64, f64)> {
    Rectangle::new([(center - half, bottom), (center + half, top)], color.mix(0.8).filled())
}

fn legend_box(color: RGBColor) -> impl Fn((i32, i32)) -> Rectangle<(i32, i32)> {
    move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.mix(0.8).filled())
}

/// Renders the three comparison panels into a PNG at `path`.
pub fn render_charts<P: AsRef<Path>>(
    path: P,
    reports: &[SequenceReport],
    options: ChartOptions,
) -> Result<()> {
    let path = path.as_ref();
    let data = ChartData::from_reports(reports);
    if data.is_empty() {
        bail!("no sequences to chart");
    }

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(TITLE, ("sans-serif", 28))?;
    let panels = root.split_evenly((1, 3));

    draw_composition(&panels[0], &data).context("drawing percentage chart")?;
    draw_counts(&panels[1], &data).context("drawing pair count chart")?;
    draw_gc_vs_at(&panels[2], &data).context("drawing GC vs AT chart")?;

    root.present().with_context(|| format!("writing chart to {}", path.display()))?;
    Ok(())
}

/// Stacked GC / AT / other percentages per sequence.
fn draw_composition(area: &DrawingArea<BitMapBackend<'_>, Shift>, data: &ChartData) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption("Dinucleotide Percentage per Sequence", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(data.x_range(), 0f64..STACK_AXIS_MAX)?;

    let fmt = |x: &f64| tick_label(&data.labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len())
        .x_label_formatter(&fmt)
        .x_desc("Sequences")
        .y_desc("Percentage (%)")
        .draw()?;

    chart
        .draw_series(data.gc_percent.iter().enumerate().map(|(i, &gc)| {
            bar(i as f64, STACK_HALF, 0.0, gc, GC_BLUE)
        }))?
        .label("GC pairs (CG+GC)")
        .legend(legend_box(GC_BLUE));

    chart
        .draw_series(data.at_percent.iter().enumerate().map(|(i, &at)| {
            let base = data.gc_percent[i];
            bar(i as f64, STACK_HALF, base, base + at, AT_RED)
        }))?
        .label("AT pairs (AT+TA)")
        .legend(legend_box(AT_RED));

    chart
        .draw_series(data.other_percent.iter().enumerate().map(|(i, &other)| {
            let base = data.gc_percent[i] + data.at_percent[i];
            bar(i as f64, STACK_HALF, base, base + other, OTHER_GRAY)
        }))?
        .label("Other positions")
        .legend(legend_box(OTHER_GRAY));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// Side-by-side GC and AT pair counts.
fn draw_counts(area: &DrawingArea<BitMapBackend<'_>, Shift>, data: &ChartData) -> Result<()> {
    let y_max = ((data.max_count() + 1) as f64 * 1.15).ceil();
    let mut chart = ChartBuilder::on(area)
        .caption("Pair Counts per Sequence", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(data.x_range(), 0f64..y_max)?;

    let fmt = |x: &f64| tick_label(&data.labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len())
        .x_label_formatter(&fmt)
        .x_desc("DNA Sequences")
        .y_desc("Counts")
        .draw()?;

    chart
        .draw_series(data.gc_pairs.iter().enumerate().map(|(i, &n)| {
            bar(i as f64 - PAIR_HALF, PAIR_HALF, 0.0, n as f64, GC_BLUE)
        }))?
        .label("CG/GC")
        .legend(legend_box(GC_BLUE));

    chart
        .draw_series(data.at_pairs.iter().enumerate().map(|(i, &n)| {
            bar(i as f64 + PAIR_HALF, PAIR_HALF, 0.0, n as f64, ORANGE)
        }))?
        .label("AT/TA")
        .legend(legend_box(ORANGE));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// GC against AT percentage, each bar annotated with its value.
fn draw_gc_vs_at(area: &DrawingArea<BitMapBackend<'_>, Shift>, data: &ChartData) -> Result<()> {
    let y_max = (data.max_percent() * 1.2).max(10.0);
    let mut chart = ChartBuilder::on(area)
        .caption("GC vs AT Pairs", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(data.x_range(), 0f64..y_max)?;

    let fmt = |x: &f64| tick_label(&data.labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len())
        .x_label_formatter(&fmt)
        .x_desc("Sequences")
        .y_desc("Percentage (%)")
        .draw()?;

    chart
        .draw_series(data.gc_percent.iter().enumerate().map(|(i, &v)| {
            bar(i as f64 - PAIR_HALF, PAIR_HALF, 0.0, v, GC_GREEN)
        }))?
        .label("GC pairs")
        .legend(legend_box(GC_GREEN));

    chart
        .draw_series(data.at_percent.iter().enumerate().map(|(i, &v)| {
            bar(i as f64 + PAIR_HALF, PAIR_HALF, 0.0, v, ORANGE)
        }))?
        .label("AT pairs")
        .legend(legend_box(ORANGE));

    let value_style = TextStyle::from(("sans-serif", 12).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let lift = y_max * 0.01;
    let values = data
        .gc_percent
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64 - PAIR_HALF, v))
        .chain(data.at_percent.iter().enumerate().map(|(i, &v)| (i as f64 + PAIR_HALF, v)));
    chart.draw_series(values.map(|(x, v)| {
        Text::new(format!("{v:.1}%"), (x, v + lift), value_style.clone())
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}
