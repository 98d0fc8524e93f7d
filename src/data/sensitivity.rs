//! Category-value series for sensitivity-index bar charts.

use crate::error::{ChartError, ChartResult};

/// Ordered (label, value) pairs, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl CategorySeries {
    /// Pair up labels and values. Both lists must have the same length.
    pub fn new<L, S>(labels: L, values: Vec<f64>) -> ChartResult<Self>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch {
                what: "category values",
                expected: labels.len(),
                actual: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    /// Example parameter names and their total-order Sobol indices.
    pub fn total_sobol_indices() -> Self {
        Self {
            labels: ["p1", "p2", "p3", "p4", "p5"]
                .into_iter()
                .map(String::from)
                .collect(),
            values: vec![0.45, 0.25, 0.15, 0.10, 0.05],
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Values rendered with two decimals, as shown above each bar.
    pub fn formatted_values(&self) -> Vec<String> {
        self.values.iter().map(|v| format!("{:.2}", v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_indices_are_aligned_and_in_unit_range() {
        let series = CategorySeries::total_sobol_indices();
        assert_eq!(series.len(), 5);
        assert_eq!(series.labels(), ["p1", "p2", "p3", "p4", "p5"]);
        assert_eq!(series.values(), [0.45, 0.25, 0.15, 0.10, 0.05]);
        assert!(series.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn formats_with_two_decimals() {
        let series = CategorySeries::total_sobol_indices();
        assert_eq!(
            series.formatted_values(),
            ["0.45", "0.25", "0.15", "0.10", "0.05"]
        );
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = CategorySeries::new(["a", "b"], vec![0.1]).unwrap_err();
        match err {
            ChartError::LengthMismatch {
                expected, actual, ..
            } => assert_eq!((expected, actual), (2, 1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn iter_pairs_labels_with_values() {
        let series = CategorySeries::new(vec!["x".to_string(), "y".to_string()], vec![1.5, -2.0])
            .unwrap();
        let pairs: Vec<_> = series.iter().collect();
        assert_eq!(pairs, [("x", 1.5), ("y", -2.0)]);
        assert!(!series.is_empty());
    }
}
