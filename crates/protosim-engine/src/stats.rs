//! Descriptive statistics over per-run values.

/// Count, mean, extrema and population standard deviation of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation: `sqrt(Σ(x - mean)² / n)`.
    pub std_dev: f64,
}

impl Summary {
    /// Summarize `values`. `None` for an empty slice.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            count: values.len(),
            mean,
            min,
            max,
            std_dev: variance.sqrt(),
        })
    }
}
