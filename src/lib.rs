//! # Cyclepart
//!
//! `cyclepart` is an O(N), in-place, unstable classification partitioner. It moves every element
//! of a slice into one of C ordered *classes* (contiguous index ranges) such that every element
//! of class `i` is less than or equal to every element of class `i + 1`, without allocating a
//! second array.
//!
//! Which class an element belongs to is predicted by a pluggable [`PartitionFunction`], built
//! from the data before the true class boundaries are known. The partitioner stays correct when
//! the predicted class sizes are wrong: full classes grow into their neighbours on the fly.
//!
//! ## Key Features
//!
//! - **Cycle Partitioning**: The [Flashsort](https://www.drdobbs.com/database/the-flashsort1-algorithm/184410496)
//!   permutation step, generalized to any partition function, with dynamic and cascading class
//!   resizing. One pass, O(1) extra memory beyond two per-class arrays.
//! - **CDF Estimator**: [`CdfPartitionFunction`] samples the input, builds a smoothed histogram
//!   CDF, and interpolates within cells, giving balanced classes even for skewed data.
//! - **Range Estimator**: [`RangePartitionFunction`] interpolates between min and max, the classic
//!   Flashsort classifier, optimal for uniform data.
//! - **Sample Sizing**: [`min_samples_per_category`] bounds how many samples the CDF estimate needs
//!   for a given confidence.
//!
//! ## Usage
//!
//! ```rust
//! use cyclepart::prelude::*;
//!
//! let mut data: Vec<f64> = (0..1000).map(|i| ((i * 7919) % 1000) as f64).collect();
//!
//! let function = CdfPartitionFunction::new(&data, 100, 0.05, 0.01).unwrap();
//! let bounds = partition(&mut data, &function).unwrap();
//!
//! // Classes are ordered relative to each other; sort each one to finish.
//! for class in bounds.classes_mut(&mut data) {
//!     class.sort_by(|a, b| a.partial_cmp(b).unwrap());
//! }
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! ```
//!
//! ### Custom Types
//!
//! Any ordered type with a signed distance can be partitioned by implementing [`Element`].
//! Any monotone classifier can drive the partitioner by implementing [`PartitionFunction`].
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(N) classifications and swaps, plus O(C) per class-boundary resize cascade.
//! - **Memory Overhead**: Two `usize` arrays of length C per call; estimators hold one `f64`
//!   per class at most.
//!
//! ## Concurrency
//!
//! All state is local to one call. Independent slices may be partitioned concurrently; the
//! resulting classes are disjoint and can be processed in parallel afterwards.

pub mod algo;
pub mod cdf;
pub mod core;
pub mod error;
pub mod range;
pub mod stats;

pub use algo::partition;
pub use cdf::{CdfConfig, CdfPartitionFunction};
pub use crate::core::{ClassBounds, Element, PartitionFunction};
pub use error::{Error, Result};
pub use range::RangePartitionFunction;
pub use stats::min_samples_per_category;

pub mod prelude {
    pub use crate::algo::partition;
    pub use crate::cdf::{CdfConfig, CdfPartitionFunction};
    pub use crate::core::{ClassBounds, Element, PartitionFunction};
    pub use crate::range::RangePartitionFunction;
}
