//! Bar chart of example total-order sensitivity indices.

use crate::charts::{BarTrace, ChartSpec, Theme};
use crate::data::CategorySeries;
use crate::error::ChartResult;

pub const TITLE: &str = "Example total-order sensitivity indices";

/// Bar chart of the literal p1..p5 indices on a fixed [0, 1] axis.
pub fn sensitivity_bar_chart() -> ChartResult<ChartSpec> {
    sensitivity_bar_chart_from(&CategorySeries::total_sobol_indices())
}

/// Same layout for any category series.
pub fn sensitivity_bar_chart_from(series: &CategorySeries) -> ChartResult<ChartSpec> {
    let chart = ChartSpec::new(TITLE)
        .with_x_title("Parameter")
        .with_y_title("Total Sobol index")
        .with_y_range(0.0, 1.0)
        .with_theme(Theme::white())
        .add_trace(BarTrace::from_series(series));
    chart.layout()?;
    Ok(chart)
}
