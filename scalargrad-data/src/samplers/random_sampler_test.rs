// scalargrad-data/src/samplers/random_sampler_test.rs

use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_len_default() {
    let sampler = RandomSampler::new(false, None);
    assert_eq!(sampler.len(10), 10);
}

#[test]
fn test_random_sampler_len_with_num_samples() {
    let sampler = RandomSampler::new(false, Some(5));
    assert_eq!(sampler.len(10), 5);
}

#[test]
fn test_random_sampler_iter_no_replacement_less_than_dataset() {
    let dataset_len = 10;
    let num_samples = 5;
    let sampler = RandomSampler::new(false, Some(num_samples));
    let indices: Vec<usize> = sampler.iter(dataset_len).collect();
    assert_eq!(indices.len(), num_samples);
    let unique_indices: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique_indices.len(), num_samples);
    for index in unique_indices {
        assert!(index < dataset_len);
    }
}

#[test]
fn test_random_sampler_iter_is_a_permutation() {
    let dataset_len = 10;
    let sampler = RandomSampler::new(false, None);
    let mut indices: Vec<usize> = sampler.iter(dataset_len).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..dataset_len).collect::<Vec<_>>());
}

#[test]
fn test_random_sampler_iter_no_replacement_more_than_dataset_returns_empty() {
    let sampler = RandomSampler::new(false, Some(10));
    let indices: Vec<usize> = sampler.iter(5).collect();
    assert!(indices.is_empty(), "Should return empty if num_samples > dataset_len without replacement");
    assert_eq!(sampler.len(5), 0);
}

#[test]
fn test_random_sampler_with_replacement() {
    let sampler = RandomSampler::new(true, Some(50));
    let indices: Vec<usize> = sampler.iter(3).collect();
    assert_eq!(indices.len(), 50);
    assert!(indices.iter().all(|&i| i < 3));
}

#[test]
fn test_random_sampler_empty_dataset() {
    let sampler = RandomSampler::new(true, Some(4));
    assert_eq!(sampler.iter(0).count(), 0);
    assert_eq!(sampler.len(0), 0);
}

#[test]
fn test_random_sampler_seeded_is_reproducible() {
    let a: Vec<usize> = RandomSampler::new(false, None).with_seed(9).iter(20).collect();
    let b: Vec<usize> = RandomSampler::new(false, None).with_seed(9).iter(20).collect();
    assert_eq!(a, b);
}
