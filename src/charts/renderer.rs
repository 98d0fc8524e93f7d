//! Static Chart Renderer
//! Draws a `ChartSpec` to PNG bytes with plotters' bitmap backend.
//!
//! Layout:
//! 1. Caption: chart title centered on top
//! 2. Plot area with axis descriptions and a light horizontal grid
//! 3. Categorical charts: bars with value labels above (or inside) each bar
//! 4. Numeric charts: traces in order, fills under their own line, legend top right

use crate::charts::band::{self, Layer};
use crate::charts::{BarTrace, ChartSpec, Color, Fill, Layout, LineTrace, TextPosition, Trace};
use crate::error::{ChartError, ChartResult};
use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::Color as _;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::io::Cursor;
use tracing::debug;

const FONT: &str = "sans-serif";
const TITLE_SIZE: u32 = 24;
const AXIS_DESC_SIZE: u32 = 16;
const TICK_LABEL_SIZE: u32 = 13;
const VALUE_LABEL_SIZE: u32 = 14;
/// Pixel gap on each side of a bar.
const BAR_MARGIN: u32 = 12;
/// Fraction of the data span added above and below when fitting a range.
const RANGE_PAD: f64 = 0.05;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

fn rgba(c: Color) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart to an in-memory PNG.
    pub fn render_png(chart: &ChartSpec, width: u32, height: u32) -> ChartResult<Vec<u8>> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidSize { width, height });
        }
        let layout = chart.layout()?;
        debug!(width, height, title = %chart.title, "rendering static chart");

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&rgba(chart.theme.background))?;

            match &layout {
                Layout::Categorical { labels } => Self::draw_categorical(&root, chart, labels)?,
                Layout::Numeric => Self::draw_numeric(&root, chart)?,
            }
            root.present()?;
        }

        let image = RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::Render("pixel buffer does not match image size".into()))?;
        let mut png = Vec::new();
        DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }

    fn draw_categorical(root: &Area<'_>, chart: &ChartSpec, labels: &[String]) -> ChartResult<()> {
        let n = labels.len();
        if n == 0 {
            return Err(ChartError::Unsupported("bar chart without categories".into()));
        }
        let bar_values = chart.traces.iter().filter_map(|t| match t {
            Trace::Bar(bar) => Some(bar.y.as_slice()),
            Trace::Line(_) => None,
        });
        let (y_min, y_max) = chart
            .y_axis
            .range
            .unwrap_or_else(|| fit_bar_range(bar_values.flatten().copied()));
        let text = rgba(chart.theme.text);

        let mut cc = ChartBuilder::on(root)
            .margin(20)
            .caption(&chart.title, (FONT, TITLE_SIZE).into_font().color(&text))
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d((0..n).into_segmented(), y_min..y_max)?;

        cc.plotting_area().fill(&rgba(chart.theme.plot_background))?;
        cc.configure_mesh()
            .disable_x_mesh()
            .light_line_style(rgba(chart.theme.grid))
            .bold_line_style(rgba(chart.theme.grid))
            .x_desc(chart.x_axis.title.as_str())
            .y_desc(chart.y_axis.title.as_str())
            .axis_desc_style((FONT, AXIS_DESC_SIZE).into_font().color(&text))
            .label_style((FONT, TICK_LABEL_SIZE).into_font().color(&text))
            .x_labels(n.max(1))
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        for trace in &chart.traces {
            let Trace::Bar(bars) = trace else {
                continue;
            };
            cc.draw_series(
                Histogram::vertical(&cc)
                    .style(rgba(bars.color).filled())
                    .margin(BAR_MARGIN)
                    .data(bars.y.iter().enumerate().map(|(i, v)| (i, *v))),
            )?;

            // Value labels just past the bar top
            let (vpos, dy) = label_placement(bars, y_max - y_min);
            let style = (FONT, VALUE_LABEL_SIZE)
                .into_font()
                .color(&text)
                .pos(Pos::new(HPos::Center, vpos));
            cc.draw_series(bars.y.iter().zip(&bars.text).enumerate().map(
                |(i, (value, label))| {
                    Text::new(
                        label.clone(),
                        (SegmentValue::CenterOf(i), *value + dy),
                        style.clone(),
                    )
                },
            ))?;
        }
        Ok(())
    }

    fn draw_numeric(root: &Area<'_>, chart: &ChartSpec) -> ChartResult<()> {
        let lines: Vec<&LineTrace> = chart
            .traces
            .iter()
            .filter_map(|t| match t {
                Trace::Line(line) => Some(line),
                Trace::Bar(_) => None,
            })
            .collect();

        let (x_min, x_max) = chart
            .x_axis
            .range
            .unwrap_or_else(|| fit_range(lines.iter().flat_map(|l| l.x.iter().copied()), 0.0));
        let (y_min, y_max) = chart.y_axis.range.unwrap_or_else(|| {
            fit_range(lines.iter().flat_map(|l| l.y.iter().copied()), RANGE_PAD)
        });
        let text = rgba(chart.theme.text);

        let mut cc = ChartBuilder::on(root)
            .margin(20)
            .caption(&chart.title, (FONT, TITLE_SIZE).into_font().color(&text))
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        cc.plotting_area().fill(&rgba(chart.theme.plot_background))?;
        cc.configure_mesh()
            .light_line_style(rgba(chart.theme.grid))
            .bold_line_style(rgba(chart.theme.grid))
            .x_desc(chart.x_axis.title.as_str())
            .y_desc(chart.y_axis.title.as_str())
            .axis_desc_style((FONT, AXIS_DESC_SIZE).into_font().color(&text))
            .label_style((FONT, TICK_LABEL_SIZE).into_font().color(&text))
            .draw()?;

        let mut has_legend = false;
        for layer in band::layers(chart) {
            match layer {
                Layer::Fill {
                    trace,
                    color,
                    regions,
                } => {
                    let fill = rgba(color).filled();
                    let anno = cc.draw_series(
                        regions.into_iter().map(|region| Polygon::new(region, fill)),
                    )?;
                    if let Some(name) = trace.legend_name() {
                        anno.label(name).legend(move |(x, y)| {
                            Rectangle::new([(x, y - 6), (x + 20, y + 6)], fill)
                        });
                        has_legend = true;
                    }
                }
                Layer::Line { trace } => {
                    let stroke =
                        rgba(trace.line_color).stroke_width(trace.line_width.round().max(1.0) as u32);
                    let anno = cc.draw_series(LineSeries::new(trace.points(), stroke))?;
                    // filled traces are listed through their band
                    if trace.fill != Fill::None {
                        continue;
                    }
                    if let Some(name) = trace.legend_name() {
                        anno.label(name).legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], stroke)
                        });
                        has_legend = true;
                    }
                }
            }
        }

        if has_legend {
            cc.configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(rgba(chart.theme.grid))
                .label_font((FONT, TICK_LABEL_SIZE).into_font().color(&text))
                .draw()?;
        }
        Ok(())
    }
}

/// Min/max of `values` widened by `pad` times the span on each side.
///
/// Empty input gives `[0, 1]`; a flat series gets `±1` around its value.
pub fn fit_range(values: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let margin = (max - min) * pad;
    (min - margin, max + margin)
}

/// Vertical anchor and offset of a bar's value label.
fn label_placement(bars: &BarTrace, span: f64) -> (VPos, f64) {
    let offset = span * 0.01;
    match bars.text_position {
        TextPosition::Outside => (VPos::Bottom, offset),
        TextPosition::Inside => (VPos::Top, -offset),
    }
}

/// Bar range always includes the zero baseline; the padding is dropped on a
/// side that holds no bars.
fn fit_bar_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let values: Vec<f64> = values.filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let (lo, hi) = fit_range(values.iter().copied().chain(std::iter::once(0.0)), RANGE_PAD);
    let lo = if values.iter().all(|v| *v >= 0.0) { 0.0 } else { lo };
    let hi = if values.iter().all(|v| *v <= 0.0) { 0.0 } else { hi };
    (lo, hi)
}
