//! arithmetic mean

use super::statistic::Statistic;

/// The arithmetic mean as a [Statistic]. NaN for an empty slice.
#[derive(Debug, Default, Copy, Clone)]
pub struct Mean;

impl Statistic for Mean {
    fn name(&self) -> &str {
        "mean"
    }

    fn compute(&self, values: &mut [f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }
}
