use super::code::{self, LANES};
use super::{Avx512Rand, BatchBuffer, BatchSource, Mt19937x16, BATCH};
use crate::error::SeedError;
use crate::random::mt19937::code::Mt19937;
use crate::random::{FixedEntropy, Generator, SeedSeq};

/// Counts refills and numbers every produced value sequentially.
struct CountingSource {
    refills: usize,
    next: u32,
}

impl BatchSource for CountingSource {
    fn fill(&mut self, out: &mut [u32; BATCH]) {
        self.refills += 1;
        for slot in out.iter_mut() {
            *slot = self.next;
            self.next += 1;
        }
    }
}

#[test]
fn test_one_refill_per_sixteen_calls() {
    let mut buffer = BatchBuffer::new(CountingSource { refills: 0, next: 0 });
    assert_eq!(buffer.cursor(), 0);

    for batch in 0..10 {
        for slot in 0..BATCH {
            let value = buffer.next_u32();
            // No value skipped or repeated
            assert_eq!(value as usize, batch * BATCH + slot);
            // The refill happens on the first call of each batch only
            assert_eq!(buffer.source().refills, batch + 1);
        }
        assert_eq!(buffer.cursor(), BATCH);
    }
}

#[test]
fn test_batch_values_returned_in_order() {
    let seed = 2024;
    let mut engine = Mt19937x16::from_seed(seed);
    let mut expected = [0u32; BATCH];

    let mut rng = BatchBuffer::new(Mt19937x16::from_seed(seed));
    // More than one twist worth of batches
    for _ in 0..700 {
        engine.fill(&mut expected);
        for &exp in &expected {
            assert_eq!(rng.next_u32(), exp);
        }
    }
}

#[test]
fn test_each_lane_is_an_mt19937_stream() {
    let seed = 77;
    let mut lane_seeds = [0u32; LANES];
    SeedSeq::new([seed]).generate(&mut lane_seeds);
    let mut scalar: Vec<Mt19937> = lane_seeds.iter().map(|&s| Mt19937::from_seed(s)).collect();

    let mut engine = Mt19937x16::with_kernel(seed, code::generate16_original);
    let mut batch = [0u32; BATCH];
    // Cross a twist boundary
    for row in 0..700 {
        engine.fill(&mut batch);
        for (l, mt) in scalar.iter_mut().enumerate() {
            assert_eq!(batch[l], mt.next_u32(), "lane {} row {}", l, row);
        }
    }
}

#[test]
fn test_lanes_are_distinct() {
    let mut engine = Mt19937x16::from_seed(1);
    let mut batch = [0u32; BATCH];
    engine.fill(&mut batch);
    let mut sorted = batch.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), BATCH);
}

#[test]
fn test_all_variants_match_original() {
    super::verify().unwrap();
}

#[test]
fn test_avx512_kernel_matches_portable_when_present() {
    #[cfg(target_arch = "x86_64")]
    {
        let Some(kernel) = code::avx512_kernel() else {
            println!("AVX-512F not available, skipping");
            return;
        };
        let mut a = Mt19937x16::with_kernel(5, kernel);
        let mut b = Mt19937x16::with_kernel(5, code::generate16_original);
        let (mut x, mut y) = ([0u32; BATCH], [0u32; BATCH]);
        for _ in 0..1300 {
            a.fill(&mut x);
            b.fill(&mut y);
            assert_eq!(x, y);
        }
    }
}

#[test]
fn test_avx512_registered_only_when_detected() {
    let names: Vec<&str> = code::available_variants().iter().map(|v| v.name).collect();
    #[cfg(target_arch = "x86_64")]
    assert_eq!(names.contains(&"x86_64-avx512"), code::avx512_kernel().is_some());
    #[cfg(not(target_arch = "x86_64"))]
    assert_eq!(names, ["original"]);
}

#[test]
fn test_from_entropy_takes_one_word() {
    let mut entropy = FixedEntropy::new([11, 12]);
    let mut rng = Avx512Rand::from_entropy(&mut entropy).unwrap();
    assert_eq!(entropy.remaining(), 1);

    let mut direct = BatchBuffer::new(Mt19937x16::from_seed(11));
    for _ in 0..100 {
        assert_eq!(rng.next_value(), direct.next_u32());
    }
}

#[test]
fn test_from_entropy_fails_fast() {
    let result = Avx512Rand::from_entropy(&mut FixedEntropy::empty());
    assert_eq!(result.err(), Some(SeedError::Exhausted { drawn: 0 }));
}
