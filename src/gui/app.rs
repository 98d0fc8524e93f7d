//! Chart window application
//! Single-panel eframe app showing one chart.

use crate::charts::Theme;
use crate::gui::ChartViewer;
use egui::{Color32, Visuals};

/// Main application window.
pub struct ChartApp {
    viewer: ChartViewer,
}

impl ChartApp {
    pub fn new(cc: &eframe::CreationContext<'_>, viewer: ChartViewer) -> Self {
        cc.egui_ctx
            .set_visuals(themed_visuals(&viewer.chart.theme));
        Self { viewer }
    }
}

/// Light visuals with panel and plot backgrounds taken from the chart theme.
pub fn themed_visuals(theme: &Theme) -> Visuals {
    let mut visuals = Visuals::light();
    visuals.panel_fill = Color32::from(theme.background);
    visuals.window_fill = Color32::from(theme.background);
    // egui_plot paints its frame with the extreme background color
    visuals.extreme_bg_color = Color32::from(theme.plot_background);
    visuals.override_text_color = Some(Color32::from(theme.text));
    visuals
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(16.0),
            )
            .show(ctx, |ui| {
                self.viewer.show(ui);
            });
    }
}
