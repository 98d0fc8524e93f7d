//! Chart definition shared by both drawing backends.
//! Both the egui_plot window and the plotters image are drawn from a `ChartSpec`.

use crate::data::CategorySeries;
use crate::error::{ChartError, ChartResult};
use egui::Color32;
use serde::Serialize;

/// RGB color with opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    /// Translucent light blue used to shade uncertainty bands.
    pub const BAND_FILL: Color = Color::rgba(173, 216, 230, 0.4);
    /// Default bar color (#636efa).
    pub const BAR: Color = Color::rgb(99, 110, 250);
    pub const GRID: Color = Color::rgb(235, 240, 248);
    pub const TEXT: Color = Color::rgb(42, 63, 95);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opacity as an 8-bit alpha channel.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl From<Color> for Color32 {
    fn from(c: Color) -> Self {
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.alpha_u8())
    }
}

/// Background, grid and text colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    pub background: Color,
    pub plot_background: Color,
    pub grid: Color,
    pub text: Color,
}

impl Theme {
    /// Neutral look: white paper and plot area, faint grid.
    pub const fn white() -> Self {
        Self {
            background: Color::WHITE,
            plot_background: Color::WHITE,
            grid: Color::GRID,
            text: Color::TEXT,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::white()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    /// Fixed `(min, max)`; `None` fits the data.
    pub range: Option<(f64, f64)>,
}

/// Where a bar's value label sits relative to the bar top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPosition {
    #[default]
    Outside,
    Inside,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    /// Per-bar label text; empty for no labels.
    pub text: Vec<String>,
    pub text_position: TextPosition,
    pub color: Color,
}

impl BarTrace {
    /// One bar per category, labelled with its two-decimal value.
    pub fn from_series(series: &CategorySeries) -> Self {
        Self {
            name: String::new(),
            x: series.labels().to_vec(),
            y: series.values().to_vec(),
            text: series.formatted_values(),
            text_position: TextPosition::Outside,
            color: Color::BAR,
        }
    }
}

/// How the area under a line trace is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Fill {
    #[default]
    None,
    /// Fill between this trace and the one drawn before it.
    ToNextY { color: Color },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub line_color: Color,
    pub line_width: f32,
    pub fill: Fill,
    pub show_legend: bool,
}

impl LineTrace {
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            line_color: Color::BAR,
            line_width: 2.0,
            fill: Fill::None,
            show_legend: true,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn hide_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Legend entry of this trace, `None` when it is hidden.
    pub fn legend_name(&self) -> Option<&str> {
        self.show_legend.then_some(self.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Bar(BarTrace),
    Line(LineTrace),
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Bar(bar) => &bar.name,
            Trace::Line(line) => &line.name,
        }
    }
}

impl From<BarTrace> for Trace {
    fn from(trace: BarTrace) -> Self {
        Trace::Bar(trace)
    }
}

impl From<LineTrace> for Trace {
    fn from(trace: LineTrace) -> Self {
        Trace::Line(trace)
    }
}

/// How the x axis is laid out.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// Bars at integer positions, one per label.
    Categorical { labels: Vec<String> },
    /// Continuous x axis for line traces.
    Numeric,
}

/// A single chart: layout options plus traces in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub theme: Theme,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            theme: Theme::default(),
            traces: Vec::new(),
        }
    }

    pub fn with_x_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis.title = title.into();
        self
    }

    pub fn with_y_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis.title = title.into();
        self
    }

    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_axis.range = Some((min, max));
        self
    }

    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_axis.range = Some((min, max));
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Append a trace. Later traces are drawn on top of earlier ones.
    pub fn add_trace(mut self, trace: impl Into<Trace>) -> Self {
        self.traces.push(trace.into());
        self
    }

    /// Check trace consistency and decide how the x axis is laid out.
    pub fn layout(&self) -> ChartResult<Layout> {
        let mut labels: Option<&Vec<String>> = None;
        let mut has_lines = false;

        for trace in &self.traces {
            match trace {
                Trace::Bar(bar) => {
                    check_len("bar values", bar.x.len(), bar.y.len())?;
                    if !bar.text.is_empty() {
                        check_len("bar labels", bar.x.len(), bar.text.len())?;
                    }
                    match labels {
                        Some(existing) if existing != &bar.x => {
                            return Err(ChartError::Unsupported(
                                "bar traces must share the same categories".to_string(),
                            ));
                        }
                        _ => labels = Some(&bar.x),
                    }
                }
                Trace::Line(line) => {
                    check_len("line points", line.x.len(), line.y.len())?;
                    has_lines = true;
                }
            }
        }

        match (labels, has_lines) {
            (Some(_), true) => Err(ChartError::Unsupported(
                "bar and line traces cannot share a chart".to_string(),
            )),
            (Some(labels), false) => Ok(Layout::Categorical {
                labels: labels.clone(),
            }),
            (None, _) => Ok(Layout::Numeric),
        }
    }

    /// Full chart definition as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Title reduced to lowercase ASCII words joined by `_`.
    pub fn file_stem(&self) -> String {
        let stem = self
            .title
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("_");
        if stem.is_empty() {
            "chart".to_string()
        } else {
            stem
        }
    }
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> ChartResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ChartError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars(labels: &[&str]) -> BarTrace {
        BarTrace {
            name: String::new(),
            x: labels.iter().map(|s| s.to_string()).collect(),
            y: vec![0.5; labels.len()],
            text: Vec::new(),
            text_position: TextPosition::Outside,
            color: Color::BAR,
        }
    }

    #[test]
    fn empty_chart_is_numeric() {
        assert_eq!(ChartSpec::new("empty").layout().unwrap(), Layout::Numeric);
    }

    #[test]
    fn bar_chart_is_categorical() {
        let chart = ChartSpec::new("bars")
            .add_trace(bars(&["a", "b"]))
            .add_trace(bars(&["a", "b"]));
        assert_eq!(
            chart.layout().unwrap(),
            Layout::Categorical {
                labels: vec!["a".into(), "b".into()]
            }
        );
    }

    #[test]
    fn mixed_traces_are_rejected() {
        let chart = ChartSpec::new("mixed")
            .add_trace(bars(&["a"]))
            .add_trace(LineTrace::new("line", vec![0.0], vec![1.0]));
        assert!(matches!(chart.layout(), Err(ChartError::Unsupported(_))));
    }

    #[test]
    fn differing_categories_are_rejected() {
        let chart = ChartSpec::new("bars")
            .add_trace(bars(&["a", "b"]))
            .add_trace(bars(&["a", "c"]));
        assert!(matches!(chart.layout(), Err(ChartError::Unsupported(_))));
    }

    #[test]
    fn misaligned_traces_are_rejected() {
        let mut bar = bars(&["a", "b"]);
        bar.text = vec!["0.50".into()];
        let chart = ChartSpec::new("bars").add_trace(bar);
        assert!(matches!(
            chart.layout(),
            Err(ChartError::LengthMismatch {
                what: "bar labels",
                expected: 2,
                actual: 1
            })
        ));

        let line = LineTrace::new("line", vec![0.0, 1.0], vec![1.0]);
        let chart = ChartSpec::new("lines").add_trace(line);
        assert!(matches!(
            chart.layout(),
            Err(ChartError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn bar_trace_from_series_carries_labels() {
        let trace = BarTrace::from_series(&CategorySeries::total_sobol_indices());
        assert_eq!(trace.x.len(), 5);
        assert_eq!(trace.text[0], "0.45");
        assert_eq!(trace.text_position, TextPosition::Outside);
    }

    #[test]
    fn file_stem_is_filesystem_safe() {
        let chart = ChartSpec::new("Example time-course with uncertainty band");
        assert_eq!(chart.file_stem(), "example_time_course_with_uncertainty_band");
        assert_eq!(ChartSpec::new("--").file_stem(), "chart");
    }

    #[test]
    fn json_names_trace_kinds_and_fill_mode() {
        let chart = ChartSpec::new("lines").add_trace(
            LineTrace::new("band", vec![0.0], vec![1.0]).with_fill(Fill::ToNextY {
                color: Color::BAND_FILL,
            }),
        );
        let json: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
        assert_eq!(json["traces"][0]["type"], "line");
        assert_eq!(json["traces"][0]["fill"]["mode"], "to_next_y");
        assert_eq!(json["traces"][0]["fill"]["color"]["a"], 0.4);
    }

    #[test]
    fn alpha_converts_to_byte() {
        assert_eq!(Color::BAND_FILL.alpha_u8(), 102);
        assert_eq!(Color::WHITE.alpha_u8(), 255);
    }

    #[test]
    fn hidden_trace_has_no_legend_name() {
        let line = LineTrace::new("Lower bound", vec![0.0], vec![1.0]);
        assert_eq!(line.legend_name(), Some("Lower bound"));
        assert_eq!(line.hide_legend().legend_name(), None);
    }

    #[test]
    fn converts_to_unmultiplied_egui_color() {
        assert_eq!(
            Color32::from(Color::BAND_FILL),
            Color32::from_rgba_unmultiplied(173, 216, 230, 102)
        );
        assert_eq!(Color32::from(Color::BLUE), Color32::BLUE);
    }
}
