//! In-place cycle partitioner.
//!
//! This module implements the Flashsort permutation step generalized to any
//! [`PartitionFunction`]: every element is moved into the contiguous index
//! range of its predicted class in O(N) swaps, in-place and unstably.
//!
//! - **Cycle leader**: the first index whose occupant lies outside its class.
//!   Its occupant is moved to its class, evicting an element which is moved in
//!   turn, until an element lands back on the leader index. The leader is the
//!   only slot not yet claimed by a class, so every cycle ends there.
//! - **Class sizes**: classes start out equally sized. Each class fills from
//!   its upper bound downwards. When a class is full, it grows *towards the
//!   cycle leader*, shrinking the neighbour on that side, and the neighbour
//!   of that neighbour if it was empty, and so on. The element evicted from
//!   the border lands on the far side of its own class, so the cascade keeps
//!   heading towards the leader and the cycle still terminates.
//!
//! The main entry point is [`partition`].

use crate::core::{ClassBounds, PartitionFunction};
use cuneiform::cuneiform;
use log::{debug, trace};
use std::ops::RangeInclusive;

/// Per-call bookkeeping for one partition run.
///
/// `ends[c]` is the exclusive end of class `c`; its lower bound is
/// `ends[c - 1]` (or `0`). `cursors[c]` is the exclusive end of the unfilled
/// part of class `c`: the next element placed into the class goes to
/// `cursors[c] - 1`. At every step
/// `lower_bound(c) <= cursors[c] <= ends[c]`, so a class is full exactly when
/// its cursor reaches its lower bound.
#[cuneiform]
struct PartitionState {
    ends: Vec<usize>,
    cursors: Vec<usize>,
    leader: usize,
    resizes: usize,
}

impl PartitionState {
    fn new(len: usize, num_classes: usize) -> Self {
        let class_size = len / num_classes;
        let mut ends: Vec<usize> = (1..=num_classes).map(|c| class_size * c).collect();
        // Last class absorbs the remainder.
        ends[num_classes - 1] = len;

        Self {
            cursors: ends.clone(),
            ends,
            leader: 0,
            resizes: 0,
        }
    }

    #[inline(always)]
    fn lower_bound(&self, class: usize) -> usize {
        if class == 0 { 0 } else { self.ends[class - 1] }
    }

    #[inline(always)]
    fn contains(&self, class: usize, index: usize) -> bool {
        self.lower_bound(class) <= index && index < self.ends[class]
    }

    /// Claims the slot the next element of `class` is placed into.
    ///
    /// Full classes grow towards the leader, cascading into neighbours.
    fn next_slot(&mut self, class: usize) -> usize {
        let lower = self.lower_bound(class);
        if self.cursors[class] > lower {
            self.cursors[class] -= 1;
            return self.cursors[class];
        }

        if self.leader < lower {
            self.grow_down(class)
        } else if self.leader < self.ends[class] {
            // Leader lies inside the class: placing there closes the cycle.
            self.leader
        } else {
            self.grow_up(class)
        }
    }

    /// Takes the slot just below `class`, shrinking the classes beneath it.
    fn grow_down(&mut self, class: usize) -> usize {
        self.cursors[class] -= 1;
        let slot = self.cursors[class];

        let mut current = class;
        while current > 0 && self.ends[current - 1] > self.cursors[current] {
            let below = current - 1;
            self.ends[below] = self.cursors[current];
            self.cursors[below] = self.cursors[below].min(self.ends[below]);
            current = below;
        }

        self.resizes += 1;
        trace!(
            "Class {class} grew down to {slot}, classes {current}..{class} shrunk (leader {})",
            self.leader
        );
        self.assert_consistent(current..=class);
        slot
    }

    /// Takes the slot just above `class`, shrinking the classes above it.
    fn grow_up(&mut self, class: usize) -> usize {
        let slot = self.ends[class];
        self.ends[class] += 1;

        let mut current = class;
        while current + 1 < self.ends.len() && self.cursors[current + 1] < self.ends[current] {
            let above = current + 1;
            self.cursors[above] = self.ends[current];
            self.ends[above] = self.ends[above].max(self.cursors[above]);
            current = above;
        }

        self.resizes += 1;
        trace!(
            "Class {class} grew up to {slot}, classes {class}..{current} shifted (leader {})",
            self.leader
        );
        self.assert_consistent(class..=current);
        slot
    }

    /// Panics if the bounds of any class in `classes` are inconsistent.
    ///
    /// A failure here is an algorithm defect, never an input error.
    fn assert_consistent(&self, classes: RangeInclusive<usize>) {
        for class in classes {
            let lower = self.lower_bound(class);
            assert!(
                lower <= self.cursors[class] && self.cursors[class] <= self.ends[class],
                "class boundary invariant violated for class {class}: \
                 lower {lower}, cursor {}, end {}",
                self.cursors[class],
                self.ends[class]
            );
        }
    }
}

/// Partitions `data` into the classes predicted by `function`, in-place.
///
/// After the call, every element of class `i` precedes every element of
/// class `i + 1`, and class ranges are described by the returned
/// [`ClassBounds`]. Order within a class is unspecified. Each class can then
/// be sorted separately, possibly in parallel.
///
/// Returns `None` without touching `data` if it holds fewer than two elements
/// or `function` distributes into fewer than two classes.
///
/// # Panics
///
/// Panics if `function.classify` returns a class outside
/// `0..function.num_classes()`, or if a class boundary invariant breaks.
///
/// # Examples
///
/// ```
/// use cyclepart::{partition, RangePartitionFunction};
///
/// let mut data = vec![9u32, 2, 7, 4, 0, 5, 8, 1, 6, 3];
/// let function = RangePartitionFunction::new(&data, 2).unwrap();
/// let bounds = partition(&mut data, &function).unwrap();
///
/// assert_eq!(bounds.upper_bound(0), Some(4));
/// assert!(data[..5].iter().all(|&v| v < 5));
/// assert!(data[5..].iter().all(|&v| v >= 5));
/// ```
pub fn partition<T, F>(data: &mut [T], function: &F) -> Option<ClassBounds>
where
    F: PartitionFunction<T> + ?Sized,
{
    let len = data.len();
    let num_classes = function.num_classes();
    if len < 2 || num_classes < 2 {
        return None;
    }

    let classify = |value: &T| {
        let class = function.classify(value);
        assert!(
            class < num_classes,
            "partition function returned class {class} of {num_classes}"
        );
        class
    };

    let mut state = PartitionState::new(len, num_classes);
    let mut cycles = 0usize;
    let mut moves = 0usize;

    while state.leader < len {
        // Find the next element outside its class.
        while state.leader < len && state.contains(classify(&data[state.leader]), state.leader) {
            state.leader += 1;
        }
        if state.leader >= len {
            break;
        }

        // The element being relocated always sits at the leader index.
        cycles += 1;
        loop {
            let slot = state.next_slot(classify(&data[state.leader]));
            if slot == state.leader {
                break;
            }
            data.swap(state.leader, slot);
            moves += 1;
        }

        state.leader += 1;
    }

    state.assert_consistent(0..=num_classes - 1);
    assert_eq!(state.ends[num_classes - 1], len, "last class must end at the sequence end");

    debug!(
        "Partitioned {len} elements into {num_classes} classes: {cycles} cycles, {moves} moves, {} resizes",
        state.resizes
    );

    Some(ClassBounds::from_ends(state.ends))
}
