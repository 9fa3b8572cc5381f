use super::code::{self, Mt19937};
#[cfg(c_implementation_active)]
use super::MtRandC;
use super::{MtRand, SEED_WORDS};
use crate::error::SeedError;
use crate::random::{FixedEntropy, Generator, SeedSeq};
use rand::RngCore;

#[test]
fn test_mt19937_known_values_seed_1() {
    let mut mt = Mt19937::from_seed(1);
    let expected = [
        1_791_095_845,
        4_282_876_139,
        3_093_770_124,
        4_005_303_368,
        491_263,
        550_290_313,
        1_298_508_491,
        4_290_846_341,
        630_311_759,
        1_013_994_432,
    ];
    for (i, &exp) in expected.iter().enumerate() {
        assert_eq!(mt.next_u32(), exp, "mismatch at index {}", i);
    }
}

#[test]
fn test_mt19937_ten_thousandth_value() {
    // The 10000th output of a default-seeded engine is the standard conformance value
    let mut mt = Mt19937::from_seed(code::DEFAULT_SEED);
    for _ in 0..9999 {
        mt.next_u32();
    }
    assert_eq!(mt.next_u32(), 4_123_659_995);
}

#[test]
fn test_mt_rand_determinism() {
    let seq = SeedSeq::new([0x1234_5678, 0x8765_4321, 0, 0, 0, 0, 0, 1]);
    let mut a = MtRand::from_seed_seq(&seq);
    let mut b = MtRand::from_seed_seq(&seq);

    for i in 0..2000 {
        assert_eq!(a.next_value(), b.next_value(), "diverged at index {}", i);
    }
}

#[test]
fn test_mt_rand_draws_all_seed_words() {
    let words: Vec<u32> = (1..=SEED_WORDS as u32).collect();
    let mut entropy = FixedEntropy::new(words.clone());
    let mut from_entropy = MtRand::from_entropy(&mut entropy).unwrap();
    assert_eq!(entropy.remaining(), 0);

    let mut direct = MtRand::from_seed_seq(&SeedSeq::new(words));
    for _ in 0..100 {
        assert_eq!(from_entropy.next_value(), direct.next_value());
    }
}

#[test]
fn test_mt_rand_fails_without_entropy() {
    let mut entropy = FixedEntropy::new([1, 2, 3]);
    let err = MtRand::from_entropy(&mut entropy).unwrap_err();
    assert_eq!(err, SeedError::Exhausted { drawn: 3 });
}

#[test]
fn test_seed_seq_matches_standard_library_engine() {
    // First output of std::mt19937 constructed from std::seed_seq{1, 2, 3, 4, 5}
    let mut rng = MtRand::from_seed_seq(&SeedSeq::new([1, 2, 3, 4, 5]));
    assert_eq!(rng.next_value(), 3_204_071_345);
}

#[test]
fn test_c_variant_registered_only_when_compiled() {
    let registry = crate::registry::build_registry();
    assert_eq!(registry.find("c-mt19937").is_some(), code::C_IMPL_AVAILABLE);
}

#[test]
fn test_seed_seq_differs_from_single_word_seeding() {
    let mut expanded = MtRand::from_seed_seq(&SeedSeq::new([5489]));
    let mut plain = Mt19937::from_seed(5489);
    let a: Vec<u32> = (0..16).map(|_| expanded.next_value()).collect();
    let b: Vec<u32> = (0..16).map(|_| plain.next_u32()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_rng_core_next_u64_combines_two_draws() {
    let seq = SeedSeq::new([9, 9, 9]);
    let mut a = MtRand::from_seed_seq(&seq);
    let mut b = MtRand::from_seed_seq(&seq);

    let lo = b.next_value() as u64;
    let hi = b.next_value() as u64;
    assert_eq!(a.next_u64(), (hi << 32) | lo);
}

#[cfg(c_implementation_active)]
#[test]
fn test_c_variant_matches_original() {
    let seq = SeedSeq::new([3, 1, 4, 1, 5, 9, 2, 6]);
    let mut reference = MtRand::from_seed_seq(&seq);
    let mut c = MtRandC::from_seed_seq(&seq);
    for i in 0..5000 {
        assert_eq!(c.next_value(), reference.next_value(), "mismatch at index {}", i);
    }
}

#[test]
#[ignore = "generates 2^32 - 1 values per generator"]
fn test_full_range_run_every_variant() {
    let registry = crate::registry::build_registry();
    let mid = 2f64.powi(31);
    for variant in registry.all() {
        let mut entropy = crate::random::SeededEntropy::new(0x5eed);
        let mean = (variant.run)(u32::MAX as u64, &mut entropy).unwrap();
        assert!(
            (mean - mid).abs() / mid < 0.01,
            "{} mean {} too far from midpoint",
            variant.name,
            mean
        );
    }
}
