//! GUI module - Native chart window

mod app;
mod chart_viewer;

pub use app::{themed_visuals, ChartApp};
pub use chart_viewer::ChartViewer;

use crate::charts::{ChartSpec, Layout};
use crate::config::DisplayConfig;
use crate::error::{ChartError, ChartResult};
use eframe::egui;
use tracing::debug;

/// Open a native window for the chart and block until it is closed.
pub fn run_window(chart: ChartSpec, layout: Layout, config: &DisplayConfig) -> ChartResult<()> {
    let title = chart.title.clone();
    let size = [config.width as f32, config.height as f32];
    debug!(width = size[0], height = size[1], "opening chart window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size([400.0, 300.0])
            .with_title(&title),
        ..Default::default()
    };

    let viewer = ChartViewer::new(chart, layout);
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(ChartApp::new(cc, viewer)))),
    )
    .map_err(|err| ChartError::Viewer(err.to_string()))
}
