//! Figures module - The two example charts

mod sensitivity_bar;
mod timecourse_band;

pub use sensitivity_bar::{sensitivity_bar_chart, sensitivity_bar_chart_from};
pub use timecourse_band::{timecourse_band_chart, timecourse_band_chart_from};
