//! exact median

use std::cmp::Ordering;

use num_traits::float::Float;

use super::statistic::Statistic;

#[cfg_attr(doc, katexit::katexit)]
/// Median of a sequence $x_1, \dots, x_n$ sorted in ascending order.
/// For $n$ odd it is $x_{(n+1)/2}$, for $n$ even $(x_{n/2} + x_{n/2+1})/2$.
///
/// The values are partially reordered, not sorted, we use `select_nth_unstable_by`
/// which gives the same result as a full sort in linear time.
/// If one value is NaN the median is NaN, and the median of an empty slice is NaN.
pub fn median<T: Float>(values: &mut [T]) -> T {
    let n = values.len();
    if n == 0 || values.iter().any(|x| x.is_nan()) {
        return T::nan();
    }
    // no NaN left, partial_cmp always succeeds
    let cmp = |a: &T, b: &T| a.partial_cmp(b).unwrap_or(Ordering::Equal);
    let mid = n / 2;
    let (lower, upper, _) = values.select_nth_unstable_by(mid, cmp);
    let upper = *upper;
    if n % 2 == 1 {
        upper
    } else {
        // the lower middle value is the largest of the lower part
        let lower_max = lower
            .iter()
            .fold(T::neg_infinity(), |acc, x| if *x > acc { *x } else { acc });
        (lower_max + upper) / (T::one() + T::one())
    }
} // end of median

/// The median as a [Statistic].
#[derive(Debug, Default, Copy, Clone)]
pub struct Median;

impl Statistic for Median {
    fn name(&self) -> &str {
        "median"
    }

    fn compute(&self, values: &mut [f64]) -> f64 {
        median(values)
    }
}

//========================================================

// end of mod tests
