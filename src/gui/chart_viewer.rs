//! Chart Viewer Widget
//! Central panel content: chart title above an interactive plot.

use crate::charts::{ChartPlotter, ChartSpec, Layout};
use egui::{Color32, RichText};

const TITLE_SIZE: f32 = 20.0;
const TITLE_SPACING: f32 = 8.0;

/// Displays one chart with its title as a heading.
pub struct ChartViewer {
    pub chart: ChartSpec,
    pub layout: Layout,
}

impl ChartViewer {
    pub fn new(chart: ChartSpec, layout: Layout) -> Self {
        Self { chart, layout }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&self.chart.title)
                    .size(TITLE_SIZE)
                    .color(Color32::from(self.chart.theme.text)),
            );
        });
        ui.add_space(TITLE_SPACING);

        ChartPlotter::draw_chart(ui, &self.chart, &self.layout);
    }
}
