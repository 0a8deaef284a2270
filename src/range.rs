//! Linear min/max partition function.
//!
//! Classes split `[min, max]` into equal-width value intervals. This is the
//! classic Flashsort classifier: cheap to build, and balanced only when the
//! data is close to uniform.

use crate::core::{Element, PartitionFunction, min_max_indices};
use crate::error::{Error, Result};
use log::debug;

/// Partition function interpolating linearly between the global min and max.
#[derive(Clone, Debug)]
pub struct RangePartitionFunction<T> {
    min: T,
    max: T,
    range: f64,
    requested_classes: usize,
    num_classes: usize,
}

impl<T: Element + Clone> RangePartitionFunction<T> {
    /// Builds an estimator distributing into at most `max_classes` classes.
    ///
    /// A class is never narrower than one distinct value: when
    /// `max - min < max_classes`, the class count drops to
    /// `floor(max - min) + 1`.
    ///
    /// # Errors
    ///
    /// Fails if `max_classes < 2`, or if `data` is empty or holds an absent
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclepart::{PartitionFunction, RangePartitionFunction};
    ///
    /// let data = vec![0u32, 9, 3, 5];
    /// let function = RangePartitionFunction::new(&data, 100).unwrap();
    ///
    /// assert_eq!(function.num_classes(), 10);
    /// assert_eq!(function.classify(&5), 5);
    /// ```
    pub fn new(data: &[T], max_classes: usize) -> Result<Self> {
        if max_classes < 2 {
            return Err(Error::invalid_class_count(max_classes));
        }
        let (min_index, max_index) = min_max_indices(data)?;

        let min = data[min_index].clone();
        let max = data[max_index].clone();
        let range = max.distance(&min);

        let mut num_classes = max_classes;
        if !(range.is_finite() && range > 0.0) {
            debug!("Value range {range} is degenerate, collapsing {max_classes} classes into one");
            num_classes = 1;
        } else if range < max_classes as f64 {
            num_classes = range.floor() as usize + 1;
            debug!("Value range {range} narrower than {max_classes} classes, using {num_classes}");
        }

        Ok(Self {
            min,
            max,
            range,
            requested_classes: max_classes,
            num_classes,
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

    /// Class count asked for at construction, before any reduction.
    pub fn requested_classes(&self) -> usize {
        self.requested_classes
    }
}

impl<T: Element> PartitionFunction<T> for RangePartitionFunction<T> {
    fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn classify(&self, value: &T) -> usize {
        if self.num_classes == 1 {
            return 0;
        }
        let class = (self.num_classes as f64 * value.distance(&self.min) / self.range).floor();
        // `max` maps exactly onto `num_classes`.
        (class as usize).min(self.num_classes - 1)
    }
}
