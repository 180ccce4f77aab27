//! trait for a statistic summarizing a lane of a table

pub trait Statistic: Send + Sync {
    /// name used in logs
    fn name(&self) -> &str;
    /// compute statistic. The slice may be reordered, its content is not preserved.
    fn compute(&self, values: &mut [f64]) -> f64;
}
