mod common;

use common::check_partition;
use cyclepart::core::Element;
use cyclepart::prelude::*;
use std::cmp::Ordering;

// Simulate an external timestamp type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Timestamp {
    secs: i64,
    nanos: u32,
}

impl Element for Timestamp {
    fn distance(&self, other: &Self) -> f64 {
        (self.secs - other.secs) as f64 + (self.nanos as f64 - other.nanos as f64) * 1e-9
    }
}

// Classifies by hour of day, ignoring the sample data entirely.
struct HourOfDay;

impl PartitionFunction<Timestamp> for HourOfDay {
    fn num_classes(&self) -> usize {
        24
    }

    fn classify(&self, value: &Timestamp) -> usize {
        ((value.secs / 3600) % 24) as usize
    }
}

fn timestamps() -> Vec<Timestamp> {
    (0..5000i64)
        .map(|i| Timestamp {
            secs: (i * 7919) % 86_400,
            nanos: ((i * 104_729) % 1_000_000_000) as u32,
        })
        .collect()
}

#[test]
fn test_external_element_with_builtin_estimators() {
    let original = timestamps();

    let mut data = original.clone();
    let function = CdfPartitionFunction::new(&data, 250, 0.05, 0.01).unwrap();
    let bounds = partition(&mut data, &function).unwrap();
    check_partition(&original, &data, &function, &bounds);

    let mut data = original.clone();
    let function = RangePartitionFunction::new(&data, 16).unwrap();
    let bounds = partition(&mut data, &function).unwrap();
    check_partition(&original, &data, &function, &bounds);
}

#[test]
fn test_external_partition_function() {
    let original = timestamps();
    let mut data = original.clone();

    let bounds = partition(&mut data, &HourOfDay).unwrap();
    check_partition(&original, &data, &HourOfDay, &bounds);

    for (hour, class) in bounds.classes(&data).into_iter().enumerate() {
        assert!(class.iter().all(|t| (t.secs / 3600) as usize == hour));
    }
}

#[test]
fn test_boxed_partition_functions() {
    let original: Vec<f64> = (0..3000).map(|i| ((i * 31) % 3000) as f64 / 3.0).collect();

    let functions: Vec<Box<dyn PartitionFunction<f64>>> = vec![
        Box::new(CdfPartitionFunction::new(&original, 30, 0.05, 0.01).unwrap()),
        Box::new(RangePartitionFunction::new(&original, 30).unwrap()),
    ];

    for function in &functions {
        let mut data = original.clone();
        let bounds = partition(&mut data, function).unwrap();
        check_partition(&original, &data, function, &bounds);
    }
}

#[test]
fn test_integer_element_types() {
    let original: Vec<u64> = (0..4096u64).map(|i| (i * 2_654_435_761) % 1_000_003).collect();
    let mut data = original.clone();

    let function = CdfPartitionFunction::new(&data, 64, 0.1, 0.02).unwrap();
    let bounds = partition(&mut data, &function).unwrap();
    check_partition(&original, &data, &function, &bounds);

    let original: Vec<i8> = (0..=255u8).map(|b| b.wrapping_mul(167) as i8).collect();
    let mut data = original.clone();
    let function = RangePartitionFunction::new(&data, 300).unwrap();
    assert_eq!(function.num_classes(), 256);

    let bounds = partition(&mut data, &function).unwrap();
    check_partition(&original, &data, &function, &bounds);
    // One distinct value per class: partitioning alone sorts the data.
    assert!(data.windows(2).all(|w| w[0].cmp(&w[1]) == Ordering::Less));
}

#[test]
fn test_option_elements() {
    let original: Vec<Option<i32>> = (0..1000).map(|i| Some((i * 37) % 1000)).collect();
    let mut data = original.clone();

    let function = RangePartitionFunction::new(&data, 10).unwrap();
    let bounds = partition(&mut data, &function).unwrap();
    check_partition(&original, &data, &function, &bounds);
    assert!(bounds.sizes().all(|size| size == 100));
}
