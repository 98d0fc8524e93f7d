//! Bar chart of example total-order sensitivity indices.

use anyhow::Context;
use uq_charts::{display, figures, telemetry, DisplayConfig};

fn main() -> anyhow::Result<()> {
    let _ = telemetry::init_tracing();

    let config = DisplayConfig::from_env().context("reading display configuration")?;
    let chart = figures::sensitivity_bar_chart().context("building sensitivity bar chart")?;

    display::show(chart, &config)
        .with_context(|| format!("could not show chart on the {} renderer", config.target))
}
