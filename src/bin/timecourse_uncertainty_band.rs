//! Time course with a shaded uncertainty band around the median.

use anyhow::Context;
use uq_charts::{display, figures, telemetry, DisplayConfig};

fn main() -> anyhow::Result<()> {
    let _ = telemetry::init_tracing();

    let config = DisplayConfig::from_env().context("reading display configuration")?;
    let chart = figures::timecourse_band_chart();

    display::show(chart, &config)
        .with_context(|| format!("could not show chart on the {} renderer", config.target))
}
