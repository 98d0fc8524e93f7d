//! Line chart of a time course with a shaded uncertainty band.

use crate::charts::{ChartSpec, Color, Fill, LineTrace, Theme};
use crate::data::TimeSeriesTriple;

pub const TITLE: &str = "Example time-course with uncertainty band";
pub const LOWER_NAME: &str = "Lower bound (e.g. 5th percentile)";
pub const BAND_NAME: &str = "Uncertainty band (e.g. 5–95%)";
pub const MEDIAN_NAME: &str = "Median time-course";

/// Band chart of the synthesized damped oscillation.
pub fn timecourse_band_chart() -> ChartSpec {
    timecourse_band_chart_from(&TimeSeriesTriple::synthesize())
}

/// Trace order is significant: the upper trace fills down to the lower one,
/// and the median is drawn last so it sits on top of the shading.
pub fn timecourse_band_chart_from(series: &TimeSeriesTriple) -> ChartSpec {
    let time = series.time().to_vec();

    let lower = LineTrace::new(LOWER_NAME, time.clone(), series.lower().to_vec())
        .with_color(Color::LIGHT_BLUE)
        .hide_legend();
    let upper = LineTrace::new(BAND_NAME, time.clone(), series.upper().to_vec())
        .with_color(Color::LIGHT_BLUE)
        .with_fill(Fill::ToNextY {
            color: Color::BAND_FILL,
        });
    let median =
        LineTrace::new(MEDIAN_NAME, time, series.median().to_vec()).with_color(Color::BLUE);

    ChartSpec::new(TITLE)
        .with_x_title("Time")
        .with_y_title("Output")
        .with_theme(Theme::white())
        .add_trace(lower)
        .add_trace(upper)
        .add_trace(median)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{Layout, Trace};

    fn lines(chart: &ChartSpec) -> Vec<&LineTrace> {
        chart
            .traces
            .iter()
            .map(|t| match t {
                Trace::Line(line) => line,
                Trace::Bar(_) => panic!("unexpected bar trace"),
            })
            .collect()
    }

    #[test]
    fn traces_are_lower_band_median_in_order() {
        let chart = timecourse_band_chart();
        let names: Vec<&str> = chart.traces.iter().map(Trace::name).collect();
        assert_eq!(names, [LOWER_NAME, BAND_NAME, MEDIAN_NAME]);

        let lines = lines(&chart);
        assert_eq!(lines[0].fill, Fill::None);
        assert!(!lines[0].show_legend);
        assert_eq!(
            lines[1].fill,
            Fill::ToNextY {
                color: Color::BAND_FILL
            }
        );
        assert!(lines[1].show_legend);
        assert_eq!(lines[2].fill, Fill::None);
        assert!(lines[2].show_legend);
    }

    #[test]
    fn median_stands_out_from_band_edges() {
        let chart = timecourse_band_chart();
        let lines = lines(&chart);
        assert_eq!(lines[0].line_color, Color::LIGHT_BLUE);
        assert_eq!(lines[1].line_color, Color::LIGHT_BLUE);
        assert_eq!(lines[2].line_color, Color::BLUE);
    }

    #[test]
    fn traces_carry_the_series() {
        let series = TimeSeriesTriple::synthesize();
        let chart = timecourse_band_chart_from(&series);
        let lines = lines(&chart);
        assert_eq!(lines[0].y, series.lower());
        assert_eq!(lines[1].y, series.upper());
        assert_eq!(lines[2].y, series.median());
        assert!(lines.iter().all(|l| l.x == series.time()));
    }

    #[test]
    fn layout_is_numeric_with_titles() {
        let chart = timecourse_band_chart();
        assert_eq!(chart.layout().unwrap(), Layout::Numeric);
        assert_eq!(chart.title, TITLE);
        assert_eq!(chart.x_axis.title, "Time");
        assert_eq!(chart.y_axis.title, "Output");
        assert_eq!(chart.y_axis.range, None);
    }
}
