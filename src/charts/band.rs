//! Fill geometry between two curves, and the back-to-front drawing order
//! of line charts.
//!
//! The region between a trace and its predecessor is cut into one convex
//! polygon per sample interval so that backends which only fill convex
//! shapes shade it correctly, including where the curves cross.

use crate::charts::{ChartSpec, Color, Fill, LineTrace, Trace};

pub type Polygon = Vec<(f64, f64)>;

/// One drawing step of a line chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer<'a> {
    /// Shading of a `ToNextY` trace, drawn before its line.
    Fill {
        trace: &'a LineTrace,
        color: Color,
        regions: Vec<Polygon>,
    },
    Line { trace: &'a LineTrace },
}

/// Line traces expanded into fills and lines, back to front.
///
/// Each filled trace contributes its shading right before its own line, so
/// a later trace always covers the shading of an earlier one.
pub fn layers(chart: &ChartSpec) -> Vec<Layer<'_>> {
    let mut layers = Vec::new();
    let mut previous: Option<&LineTrace> = None;
    for trace in &chart.traces {
        let Trace::Line(line) = trace else {
            continue;
        };
        if let Fill::ToNextY { color } = line.fill {
            layers.push(Layer::Fill {
                trace: line,
                color,
                regions: fill_regions(previous, line),
            });
        }
        layers.push(Layer::Line { trace: line });
        previous = Some(line);
    }
    layers
}

/// Polygons covering the area between `previous` and `current`.
///
/// Without a previous trace the area is taken down to `y = 0`. When both
/// traces are sampled at the same x positions the area is split per interval
/// over their common prefix; otherwise it is a single polygon running along
/// `current` and back along `previous`, each at its own x positions.
pub fn fill_regions(previous: Option<&LineTrace>, current: &LineTrace) -> Vec<Polygon> {
    let n = current.x.len().min(current.y.len());
    let Some(prev) = previous else {
        return between(&current.x[..n], &vec![0.0; n], &current.y[..n]);
    };

    let m = prev.x.len().min(prev.y.len()).min(n);
    if prev.x[..m] == current.x[..m] {
        return between(&current.x[..m], &prev.y[..m], &current.y[..m]);
    }

    let outline: Polygon = current
        .points()
        .take(n)
        .chain(prev.points().collect::<Vec<_>>().into_iter().rev())
        .collect();
    if outline.len() < 3 {
        Vec::new()
    } else {
        vec![outline]
    }
}

/// Polygons covering the area between curves `a` and `b` sampled at `x`.
pub fn between(x: &[f64], a: &[f64], b: &[f64]) -> Vec<Polygon> {
    let n = x.len().min(a.len()).min(b.len());
    if n < 2 {
        return Vec::new();
    }

    let mut regions = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let (x0, x1) = (x[i], x[i + 1]);
        let (a0, a1) = (a[i], a[i + 1]);
        let (b0, b1) = (b[i], b[i + 1]);
        let d0 = b0 - a0;
        let d1 = b1 - a1;

        if d0 * d1 < 0.0 {
            // curves swap order inside the interval
            let t = d0 / (d0 - d1);
            let xc = x0 + t * (x1 - x0);
            let yc = a0 + t * (a1 - a0);
            regions.push(vec![(x0, a0), (xc, yc), (x0, b0)]);
            regions.push(vec![(xc, yc), (x1, a1), (x1, b1)]);
        } else {
            regions.push(vec![(x0, a0), (x1, a1), (x1, b1), (x0, b0)]);
        }
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn one_quad_per_interval_without_crossing() {
        let regions = between(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0], &[1.0, 2.0, 1.0]);
        assert_eq!(regions.len(), 2);
        assert_eq!(
            regions[0],
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 2.0), (0.0, 1.0)]
        );
    }

    #[test]
    fn crossing_splits_into_triangles_at_intersection() {
        // a rises 0 -> 2, b falls 2 -> 0: they meet at x = 0.5, y = 1
        let regions = between(&[0.0, 1.0], &[0.0, 2.0], &[2.0, 0.0]);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].len(), 3);
        assert_eq!(regions[1].len(), 3);
        let (xc, yc) = regions[0][1];
        assert_abs_diff_eq!(xc, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(yc, 1.0, epsilon = 1e-12);
        assert_eq!(regions[1][0], regions[0][1]);
    }

    #[test]
    fn touching_curves_stay_a_single_quad() {
        let regions = between(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 2.0]);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 4);
    }

    #[test]
    fn fewer_than_two_samples_yield_nothing() {
        assert!(between(&[0.0], &[0.0], &[1.0]).is_empty());
        assert!(between(&[], &[], &[]).is_empty());
    }

    #[test]
    fn missing_previous_trace_fills_to_zero() {
        let line = LineTrace::new("only", vec![0.0, 1.0], vec![1.0, 1.0]);
        let regions = fill_regions(None, &line);
        assert_eq!(
            regions,
            vec![vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]]
        );
    }

    #[test]
    fn traces_on_different_x_form_one_outline() {
        let lower = LineTrace::new("lower", vec![0.0, 2.0], vec![0.0, 0.0]);
        let upper = LineTrace::new("upper", vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 1.0]);
        let regions = fill_regions(Some(&lower), &upper);
        assert_eq!(
            regions,
            vec![vec![
                (0.0, 1.0),
                (1.0, 2.0),
                (2.0, 1.0),
                (2.0, 0.0),
                (0.0, 0.0)
            ]]
        );
    }

    #[test]
    fn fill_is_layered_under_its_own_line() {
        let chart = ChartSpec::new("band")
            .add_trace(LineTrace::new("lower", vec![0.0, 1.0], vec![0.0, 0.0]).hide_legend())
            .add_trace(
                LineTrace::new("upper", vec![0.0, 1.0], vec![1.0, 1.0]).with_fill(
                    Fill::ToNextY {
                        color: Color::BAND_FILL,
                    },
                ),
            )
            .add_trace(LineTrace::new("median", vec![0.0, 1.0], vec![0.5, 0.5]));

        let steps: Vec<(&str, &str)> = layers(&chart)
            .iter()
            .map(|layer| match layer {
                Layer::Fill { trace, .. } => ("fill", trace.name.as_str()),
                Layer::Line { trace } => ("line", trace.name.as_str()),
            })
            .collect();
        assert_eq!(
            steps,
            [
                ("line", "lower"),
                ("fill", "upper"),
                ("line", "upper"),
                ("line", "median")
            ]
        );

        let Layer::Fill { regions, color, .. } = &layers(&chart)[1] else {
            panic!("expected the band fill second");
        };
        assert_eq!(*color, Color::BAND_FILL);
        assert_eq!(
            regions,
            &vec![vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]]
        );
    }

    #[test]
    fn uses_common_prefix_of_both_traces() {
        let lower = LineTrace::new("lower", vec![0.0, 1.0], vec![0.0, 0.0]);
        let upper = LineTrace::new("upper", vec![0.0, 1.0, 2.0], vec![1.0, 1.0, 1.0]);
        assert_eq!(fill_regions(Some(&lower), &upper).len(), 1);
    }
}
