//! statistics used to summarize a row or a column of a table.
//! The median is the default statistic, the mean is provided for comparison.

pub mod mean;
pub mod median;
pub mod statistic;

pub use mean::Mean;
pub use median::{Median, median};
pub use statistic::Statistic;
