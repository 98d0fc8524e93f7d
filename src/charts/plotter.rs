//! Chart Plotter Module
//! Draws a `ChartSpec` interactively using egui_plot.

use crate::charts::band::{self, Layer};
use crate::charts::{BarTrace, ChartSpec, Layout, LineTrace, TextPosition, Trace};
use egui::{Align2, Color32, RichText};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, PlotResponse, PlotUi,
    Polygon, Text,
};

/// Bar width in category units.
const BAR_WIDTH: f64 = 0.8;
const LABEL_SIZE: f32 = 13.0;

/// Draws chart definitions with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the chart using a layout previously returned by `ChartSpec::layout`.
    ///
    /// Axis ranges only seed the auto-fitted view, so zooming and panning stay
    /// with the user until a double-click resets them.
    pub fn draw_chart(ui: &mut egui::Ui, chart: &ChartSpec, layout: &Layout) -> PlotResponse<()> {
        match layout {
            Layout::Categorical { labels } => Self::draw_categorical(ui, chart, labels),
            Layout::Numeric => Self::draw_numeric(ui, chart),
        }
    }

    /// Bars at x = 0..n with category names under the ticks.
    fn draw_categorical(ui: &mut egui::Ui, chart: &ChartSpec, labels: &[String]) -> PlotResponse<()> {
        let n = labels.len();
        let x_labels = labels.to_vec();

        let mut plot = Plot::new(format!("categorical_{}", chart.file_stem()))
            .legend(Legend::default())
            .x_axis_label(chart.x_axis.title.clone())
            .y_axis_label(chart.y_axis.title.clone())
            .show_grid([false, true])
            .include_x(-0.5)
            .include_x(n as f64 - 0.5)
            // one tick per category
            .x_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx - mark.value).abs() < 1e-6 {
                    x_labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            });
        if let Some((y_min, y_max)) = chart.y_axis.range {
            plot = plot.include_y(y_min).include_y(y_max);
        }

        plot.show(ui, |plot_ui| {
            for trace in &chart.traces {
                if let Trace::Bar(bars) = trace {
                    Self::draw_bars(plot_ui, bars);
                }
            }
        })
    }

    fn draw_bars(plot_ui: &mut PlotUi, trace: &BarTrace) {
        let color = Color32::from(trace.color);
        let bars: Vec<Bar> = trace
            .x
            .iter()
            .zip(&trace.y)
            .enumerate()
            .map(|(i, (label, &value))| {
                Bar::new(i as f64, value)
                    .width(BAR_WIDTH)
                    .fill(color)
                    .name(label)
            })
            .collect();

        plot_ui.bar_chart(BarChart::new(bars).color(color).name(&trace.name));

        // Value labels
        let anchor = match trace.text_position {
            TextPosition::Outside => Align2::CENTER_BOTTOM,
            TextPosition::Inside => Align2::CENTER_TOP,
        };
        for (i, (value, label)) in trace.y.iter().zip(&trace.text).enumerate() {
            plot_ui.text(
                Text::new(
                    PlotPoint::new(i as f64, *value),
                    RichText::new(label).size(LABEL_SIZE),
                )
                .anchor(anchor),
            );
        }
    }

    /// Line traces in insertion order; fills are drawn under their own line.
    fn draw_numeric(ui: &mut egui::Ui, chart: &ChartSpec) -> PlotResponse<()> {
        let mut plot = Plot::new(format!("numeric_{}", chart.file_stem()))
            .legend(Legend::default())
            .x_axis_label(chart.x_axis.title.clone())
            .y_axis_label(chart.y_axis.title.clone());
        if let Some((x_min, x_max)) = chart.x_axis.range {
            plot = plot.include_x(x_min).include_x(x_max);
        }
        if let Some((y_min, y_max)) = chart.y_axis.range {
            plot = plot.include_y(y_min).include_y(y_max);
        }

        plot.show(ui, |plot_ui| {
            for layer in band::layers(chart) {
                match layer {
                    Layer::Fill {
                        trace,
                        color,
                        regions,
                    } => {
                        let fill = Color32::from(color);
                        for region in regions {
                            let points: PlotPoints = region.into_iter().map(|(x, y)| [x, y]).collect();
                            plot_ui.polygon(
                                Polygon::new(points)
                                    .fill_color(fill)
                                    .stroke(egui::Stroke::NONE)
                                    .name(legend_label(trace)),
                            );
                        }
                    }
                    Layer::Line { trace } => Self::draw_line(plot_ui, trace),
                }
            }
        })
    }

    fn draw_line(plot_ui: &mut PlotUi, trace: &LineTrace) {
        let points: PlotPoints = trace.points().map(|(x, y)| [x, y]).collect();
        plot_ui.line(
            Line::new(points)
                .color(Color32::from(trace.line_color))
                .width(trace.line_width)
                .name(legend_label(trace)),
        );
    }
}

/// Empty names keep an item out of the legend; a filled trace's line and
/// band share one entry.
fn legend_label(trace: &LineTrace) -> &str {
    trace.legend_name().unwrap_or_default()
}
