//! Show a chart on the configured render target.

use crate::charts::{ChartSpec, StaticChartRenderer};
use crate::config::{DisplayConfig, RenderTarget};
use crate::error::{ChartError, ChartResult};
use crate::gui;
use std::fs;
use std::path::PathBuf;
use tracing::{info, trace, Level};

/// Show the chart and return once the viewer has been closed (window) or
/// launched (image).
pub fn show(chart: ChartSpec, config: &DisplayConfig) -> ChartResult<()> {
    let layout = chart.layout()?;
    info!(
        title = %chart.title,
        traces = chart.traces.len(),
        target = %config.target,
        "showing chart"
    );
    if let Some(json) = traced_definition(&chart) {
        trace!(definition = %json, "chart definition");
    }

    match config.target {
        RenderTarget::Window => gui::run_window(chart, layout, config),
        RenderTarget::Png => {
            let path = write_png(&chart, config)?;
            open::that(&path).map_err(|source| ChartError::Open {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "opened chart image");
            Ok(())
        }
    }
}

/// Render the chart and write it as `<file_stem>.png` into the scratch directory.
pub fn write_png(chart: &ChartSpec, config: &DisplayConfig) -> ChartResult<PathBuf> {
    let png = StaticChartRenderer::render_png(chart, config.width, config.height)?;
    fs::create_dir_all(&config.scratch_dir)?;
    let path = config.scratch_dir.join(format!("{}.png", chart.file_stem()));
    fs::write(&path, png)?;
    Ok(path)
}

/// Serialized chart for the trace log; not built unless TRACE is enabled.
fn traced_definition(chart: &ChartSpec) -> Option<String> {
    if !tracing::enabled!(Level::TRACE) {
        return None;
    }
    chart.to_json().ok()
}
