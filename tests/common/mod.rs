#![allow(dead_code)]

use cyclepart::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

pub fn consecutive(len: usize, start: f64) -> Vec<f64> {
    (0..len).map(|i| start + i as f64).collect()
}

pub fn uniform(len: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(min..max)).collect()
}

pub fn normal(len: usize, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, std_dev).unwrap();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn sorted<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted
}

/// Checks everything a partition call promises about its output.
pub fn check_partition<T, F>(original: &[T], output: &[T], function: &F, bounds: &ClassBounds)
where
    T: PartialOrd + Clone + std::fmt::Debug,
    F: PartitionFunction<T>,
{
    // Same multiset of elements.
    assert_eq!(sorted(original), sorted(output), "output is not a permutation of the input");

    assert_eq!(bounds.num_classes(), function.num_classes());
    assert_eq!(*bounds.ends().last().unwrap(), output.len());
    for (i, w) in bounds.ends().windows(2).enumerate() {
        assert!(w[0] <= w[1], "class {} has negative length: {:?}", i + 1, w);
    }

    if let Err(index) = bounds.verify(output, function) {
        panic!(
            "element {:?} at index {index} is outside its class {}",
            output[index],
            function.classify(&output[index])
        );
    }

    let classes = bounds.classes(output);
    let mut prev_max: Option<&T> = None;
    for (i, class) in classes.iter().enumerate() {
        let Some(min) = class.iter().reduce(|a, b| if b < a { b } else { a }) else {
            continue;
        };
        if let Some(prev_max) = prev_max {
            assert!(
                prev_max <= min,
                "max of an earlier class ({prev_max:?}) exceeds min of class {i} ({min:?})"
            );
        }
        prev_max = class.iter().reduce(|a, b| if b > a { b } else { a });
    }
}

/// Sorts every class in place, leaving the class bounds untouched.
pub fn sort_classes<T: PartialOrd>(data: &mut [T], bounds: &ClassBounds) {
    for class in bounds.classes_mut(data) {
        class.sort_by(|a, b| a.partial_cmp(b).unwrap());
    }
}
