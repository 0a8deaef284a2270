//! Histogram/CDF-based partition function.
//!
//! The estimator splits `[min, max]` into equal-width cells, samples the
//! input at a fixed stride, and turns the per-cell sample counts into a
//! cumulative distribution with add-one (Laplace) smoothing. Classification
//! interpolates linearly inside a cell, so the class of a value approximates
//! its quantile even when the data is far from uniform.
//!
//! The sampling stride is deterministic: building twice from the same input
//! yields the same estimator.

use crate::core::{Element, PartitionFunction, min_max_indices};
use crate::error::{Error, Result};
use crate::stats::min_samples_per_category;
use log::debug;

/// Construction parameters for [`CdfPartitionFunction`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CdfConfig {
    /// Target number of elements per class.
    pub cell_size: usize,
    /// Probability that the sampled distribution misses the `cdf_distance` target.
    pub alpha: f64,
    /// Tolerated gap between a sampled and a true per-cell proportion.
    pub cdf_distance: f64,
}

impl Default for CdfConfig {
    fn default() -> Self {
        Self {
            cell_size: 100,
            alpha: 0.05,
            cdf_distance: 0.01,
        }
    }
}

impl CdfConfig {
    pub fn with_cell_size(mut self, cell_size: usize) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_cdf_distance(mut self, cdf_distance: f64) -> Self {
        self.cdf_distance = cdf_distance;
        self
    }

    /// Checks every parameter against its domain.
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(Error::invalid_cell_size(self.cell_size));
        }
        min_samples_per_category(self.alpha, self.cdf_distance).map(|_| ())
    }
}

/// Partition function backed by a sampled cumulative distribution.
#[derive(Clone, Debug)]
pub struct CdfPartitionFunction<T> {
    min: T,
    max: T,
    cdf: Vec<f64>,
    cell_width: f64,
    sample_count: usize,
}

impl<T: Element + Clone> CdfPartitionFunction<T> {
    /// Builds an estimator targeting `cell_size` elements per class.
    ///
    /// # Errors
    ///
    /// Fails if `data` is empty or holds an absent element, if `cell_size`
    /// is zero, or if `alpha`/`cdf_distance` are out of range (see
    /// [`min_samples_per_category`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclepart::{CdfPartitionFunction, PartitionFunction};
    ///
    /// let data: Vec<f64> = (-4..6).map(f64::from).collect();
    /// let function = CdfPartitionFunction::new(&data, 2, 0.9, 0.1).unwrap();
    ///
    /// assert_eq!(function.num_classes(), 5);
    /// assert_eq!(function.classify(&-4.0), 0);
    /// assert_eq!(function.classify(&5.0), 4);
    /// ```
    pub fn new(data: &[T], cell_size: usize, alpha: f64, cdf_distance: f64) -> Result<Self> {
        Self::with_config(
            data,
            &CdfConfig {
                cell_size,
                alpha,
                cdf_distance,
            },
        )
    }

    /// Builds an estimator from a [`CdfConfig`].
    pub fn with_config(data: &[T], config: &CdfConfig) -> Result<Self> {
        config.validate()?;
        let target_samples = min_samples_per_category(config.alpha, config.cdf_distance)?;
        let (min_index, max_index) = min_max_indices(data)?;

        let len = data.len();
        let min = data[min_index].clone();
        let max = data[max_index].clone();
        let range = max.distance(&min);

        let mut num_cells = len.div_ceil(config.cell_size);
        if !(range.is_finite() && range > 0.0) {
            debug!("Value range {range} is degenerate, collapsing {num_cells} cells into one");
            num_cells = 1;
        }
        let cell_width = if num_cells > 1 {
            range / num_cells as f64
        } else {
            0.0
        };

        let num_samples = target_samples.min(len);
        let stride = (len / num_samples).max(1);

        let mut counts = vec![0usize; num_cells];
        let mut sample_count = 0;
        for value in data.iter().step_by(stride) {
            counts[cell_index(value.distance(&min), cell_width, num_cells)] += 1;
            sample_count += 1;
        }

        let denominator = (sample_count + num_cells) as f64;
        let cdf: Vec<f64> = counts
            .iter()
            .scan(0.0, |cumulative, &count| {
                *cumulative += (count + 1) as f64 / denominator;
                Some(*cumulative)
            })
            .collect();

        debug!(
            "Built CDF estimator: {len} elements, {num_cells} cells, {sample_count} samples (stride {stride})"
        );

        Ok(Self {
            min,
            max,
            cdf,
            cell_width,
            sample_count,
        })
    }

    /// Smallest element seen at construction.
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Largest element seen at construction.
    pub fn max(&self) -> &T {
        &self.max
    }

    /// Estimated cumulative probability at the upper edge of every cell.
    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// Width of one cell in distance units; `0.0` for a collapsed range.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Number of elements sampled to build the distribution.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}

// Clamped into the last cell: `max` itself lands exactly on the upper edge.
#[inline]
fn cell_index(offset: f64, cell_width: f64, num_cells: usize) -> usize {
    if num_cells == 1 {
        return 0;
    }
    ((offset / cell_width) as usize).min(num_cells - 1)
}

impl<T: Element> PartitionFunction<T> for CdfPartitionFunction<T> {
    fn num_classes(&self) -> usize {
        self.cdf.len()
    }

    fn classify(&self, value: &T) -> usize {
        let num_cells = self.cdf.len();
        if num_cells == 1 {
            return 0;
        }

        let offset = value.distance(&self.min);
        let cell = cell_index(offset, self.cell_width, num_cells);
        let prev = if cell == 0 { 0.0 } else { self.cdf[cell - 1] };
        let slope = (self.cdf[cell] - prev) / self.cell_width;

        // Uniform density within the cell.
        let x = offset - cell as f64 * self.cell_width;
        let px = slope * x + prev;

        ((px * num_cells as f64).floor() as usize).min(num_cells - 1)
    }
}
