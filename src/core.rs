//! Core traits and types for cycle partitioning.
//!
//! This module defines:
//! - [`Element`]: The capability contract for values that can be classified.
//! - [`PartitionFunction`]: The estimator contract consumed by [`partition`](crate::partition).
//! - [`ClassBounds`]: The class boundaries produced by a partition call.

use crate::error::{Error, Result};
use std::ops::Range;

/// A value that can be ranked and measured against other values.
///
/// `distance` must agree with the ordering: its sign matches the sign of
/// `self.partial_cmp(other)`, `a.distance(b) == -b.distance(a)`, and it grows
/// monotonically with the ordering. Its magnitude is used for interpolation,
/// so it should approximate the metric distance between the two values.
///
/// # Examples
///
/// Implementing for a newtype:
///
/// ```
/// use cyclepart::core::Element;
///
/// #[derive(Clone, PartialEq, PartialOrd)]
/// struct Millis(u64);
///
/// impl Element for Millis {
///     fn distance(&self, other: &Self) -> f64 {
///         self.0 as f64 - other.0 as f64
///     }
/// }
///
/// assert_eq!(Millis(10).distance(&Millis(4)), 6.0);
/// ```
pub trait Element: PartialOrd {
    /// Returns the signed distance from `other` to `self`.
    fn distance(&self, other: &Self) -> f64;

    /// Returns `true` if this value has no place in the total order.
    ///
    /// Estimators refuse to build from a sequence holding absent values.
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_element_int {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[inline]
            fn distance(&self, other: &Self) -> f64 {
                *self as f64 - *other as f64
            }
        }
    )*};
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[inline]
            fn distance(&self, other: &Self) -> f64 {
                *self as f64 - *other as f64
            }

            #[inline]
            fn is_absent(&self) -> bool {
                self.is_nan()
            }
        }
    )*};
}

impl_element_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element_float!(f32, f64);

// `None` plays the role of a null slot. It has no distance to anything.
impl<T: Element> Element for Option<T> {
    fn distance(&self, other: &Self) -> f64 {
        match (self, other) {
            (Some(a), Some(b)) => a.distance(b),
            _ => f64::NAN,
        }
    }

    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(Element::is_absent)
    }
}

/// Predicts which class an element belongs to.
///
/// Implementations must be monotone: if `a <= b` then
/// `classify(a) <= classify(b)`, and every result lies in
/// `0..num_classes()`.
pub trait PartitionFunction<T: ?Sized> {
    /// Returns the number of classes this function distributes into.
    fn num_classes(&self) -> usize;

    /// Returns the class index of `value`.
    fn classify(&self, value: &T) -> usize;
}

impl<T: ?Sized, F: PartitionFunction<T> + ?Sized> PartitionFunction<T> for &F {
    #[inline]
    fn num_classes(&self) -> usize {
        (**self).num_classes()
    }

    #[inline]
    fn classify(&self, value: &T) -> usize {
        (**self).classify(value)
    }
}

impl<T: ?Sized, F: PartitionFunction<T> + ?Sized> PartitionFunction<T> for Box<F> {
    #[inline]
    fn num_classes(&self) -> usize {
        (**self).num_classes()
    }

    #[inline]
    fn classify(&self, value: &T) -> usize {
        (**self).classify(value)
    }
}

/// Scans `data` once for its smallest and largest elements.
///
/// Returns their indices. Fails on an empty sequence or an absent element.
pub(crate) fn min_max_indices<T: Element>(data: &[T]) -> Result<(usize, usize)> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    if first.is_absent() {
        return Err(Error::AbsentElement { index: 0 });
    }

    let (mut min, mut max) = (0, 0);
    for (index, value) in data.iter().enumerate().skip(1) {
        if value.is_absent() {
            return Err(Error::AbsentElement { index });
        }
        if *value < data[min] {
            min = index;
        } else if *value > data[max] {
            max = index;
        }
    }

    Ok((min, max))
}

/// Class boundaries produced by [`partition`](crate::partition).
///
/// Class `0` spans `[0, upper_bound(0)]` and class `i > 0` spans
/// `[upper_bound(i - 1) + 1, upper_bound(i)]`. Internally each class is kept
/// as its exclusive end, so a class may be empty, including the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassBounds {
    ends: Vec<usize>,
}

impl ClassBounds {
    pub(crate) fn from_ends(ends: Vec<usize>) -> Self {
        Self { ends }
    }

    /// Returns the number of classes.
    pub fn num_classes(&self) -> usize {
        self.ends.len()
    }

    /// Returns `true` if there are no classes.
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Exclusive end index of every class, in increasing order.
    pub fn ends(&self) -> &[usize] {
        &self.ends
    }

    /// Returns the inclusive upper-bound index of class `class`.
    ///
    /// `None` means classes `0..=class` are all empty, so no index bounds
    /// them from above.
    ///
    /// # Panics
    ///
    /// Panics if `class >= self.num_classes()`.
    pub fn upper_bound(&self, class: usize) -> Option<usize> {
        self.ends[class].checked_sub(1)
    }

    /// Inclusive upper-bound index of every class, in increasing order.
    pub fn upper_bounds(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.ends.iter().map(|end| end.checked_sub(1))
    }

    /// Returns the index range occupied by class `class`.
    ///
    /// # Panics
    ///
    /// Panics if `class >= self.num_classes()`.
    pub fn range(&self, class: usize) -> Range<usize> {
        let start = if class == 0 { 0 } else { self.ends[class - 1] };
        start..self.ends[class]
    }

    /// Index ranges of every class, in order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.ends.len()).map(|class| self.range(class))
    }

    /// Number of elements held by every class.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges().map(|range| range.len())
    }

    /// Splits `data` into one sub-slice per class.
    pub fn classes<'a, T>(&self, data: &'a [T]) -> Vec<&'a [T]> {
        self.ranges().map(|range| &data[range]).collect()
    }

    /// Splits `data` into one disjoint mutable sub-slice per class.
    ///
    /// The classes can then be sorted independently, including in parallel.
    pub fn classes_mut<'a, T>(&self, mut data: &'a mut [T]) -> Vec<&'a mut [T]> {
        let mut classes = Vec::with_capacity(self.ends.len());
        let mut start = 0;
        for &end in &self.ends {
            let (class, rest) = std::mem::take(&mut data).split_at_mut(end - start);
            classes.push(class);
            data = rest;
            start = end;
        }
        classes
    }

    /// Checks that every element of `data` sits in the class `function`
    /// predicts for it.
    ///
    /// Returns the first misplaced index on failure.
    pub fn verify<T, F>(&self, data: &[T], function: &F) -> std::result::Result<(), usize>
    where
        F: PartitionFunction<T> + ?Sized,
    {
        for (class, range) in self.ranges().enumerate() {
            if let Some(index) = range.into_iter().find(|&i| function.classify(&data[i]) != class) {
                return Err(index);
            }
        }
        Ok(())
    }
}

impl AsRef<[usize]> for ClassBounds {
    fn as_ref(&self) -> &[usize] {
        &self.ends
    }
}
