//! Charts module - Chart definition and rendering

pub mod band;
mod model;
mod plotter;
mod renderer;

pub use model::{
    Axis, BarTrace, ChartSpec, Color, Fill, Layout, LineTrace, TextPosition, Theme, Trace,
};
pub use plotter::ChartPlotter;
pub use renderer::{fit_range, StaticChartRenderer};
