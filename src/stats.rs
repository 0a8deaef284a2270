//! Sample-size bound for estimating a multinomial distribution.
//!
//! The CDF estimator samples the input to build its histogram. The number of
//! samples follows S. K. Thompson, "Sample Size for Estimating Multinomial
//! Proportions": with probability at least `1 - alpha`, every sampled
//! per-category proportion lies within `distance` of the true proportion when
//!
//! ```text
//! s = ceil(z² (1/m) (1 - 1/m) / d²)
//! ```
//!
//! where `m` is the worst-case number of categories for `alpha` and `z` is the
//! upper `alpha / 2m` quantile of the standard normal distribution.

use crate::error::{Error, Result};
use statrs::function::erf::erfc_inv;
use std::f64::consts::SQRT_2;

/// Worst-case category count `m` keyed by the smallest `alpha` it applies to.
///
/// The largest breakpoint not exceeding `alpha` wins.
const WORST_CASE_CATEGORIES: [(f64, f64); 5] = [
    (0.0000, 2.0),
    (0.0344, 3.0),
    (0.3466, 4.0),
    (0.6311, 5.0),
    (0.8934, 6.0),
];

fn worst_case_categories(alpha: f64) -> f64 {
    WORST_CASE_CATEGORIES
        .iter()
        .rev()
        .find(|(breakpoint, _)| *breakpoint <= alpha)
        .map_or(WORST_CASE_CATEGORIES[0].1, |&(_, m)| m)
}

/// Returns the minimum number of samples needed so that, with probability at
/// least `1 - alpha`, each sampled category proportion is within `distance`
/// of the population proportion.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `alpha` is outside `[0, 1)` or
/// `distance` is not positive.
///
/// # Examples
///
/// ```
/// use cyclepart::min_samples_per_category;
///
/// assert_eq!(min_samples_per_category(0.05, 0.01).unwrap(), 12736);
/// ```
pub fn min_samples_per_category(alpha: f64, distance: f64) -> Result<usize> {
    if !(0.0..1.0).contains(&alpha) {
        return Err(Error::invalid_alpha(alpha));
    }
    if distance.is_nan() || distance <= 0.0 {
        return Err(Error::invalid_distance(distance));
    }

    let m = worst_case_categories(alpha);
    // erfc_inv(0) is infinite: with alpha == 0 no finite sample suffices.
    let z = SQRT_2 * erfc_inv(alpha / m);
    let samples = (z * z * (1.0 / m) * (1.0 - 1.0 / m) / (distance * distance)).ceil();

    Ok(if samples.is_finite() {
        samples as usize
    } else {
        usize::MAX
    })
}
