//! # Pseudo-random generators under comparison
//!
//! Every engine exposes the same one-value-per-call contract through
//! [`Generator`]:
//!
//! - **mt19937**: scalar Mersenne Twister, one tempered word per call
//! - **sfmt19937**: SIMD-oriented Fast Mersenne Twister, regenerates 624 words
//!   per block with 128-bit vector operations
//! - **mt19937x16**: sixteen interleaved Mersenne Twister lanes, one 512-bit
//!   batch per refill, served one word at a time
//!
//! Generators are not `Clone`; a copy would replay the same stream.

pub mod entropy;
pub mod mt19937;
pub mod mt19937x16;
pub mod seed_seq;
pub mod sfmt;

pub use entropy::{EntropySource, FixedEntropy, OsEntropy, SeededEntropy};
pub use seed_seq::SeedSeq;

use crate::error::SeedError;

/// A source of uniformly distributed 32-bit values.
pub trait Generator: Sized {
    /// Short identifier used in logs.
    const NAME: &'static str;

    /// Build a generator from fresh seed material.
    ///
    /// Fails if the entropy source cannot deliver the words this engine needs.
    fn from_entropy<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Self, SeedError>;

    /// Next value of the sequence.
    fn next_value(&mut self) -> u32;
}

/// Implement `rand::RngCore` on top of [`Generator::next_value`].
macro_rules! impl_rng_core {
    ($ty:ty) => {
        impl rand::RngCore for $ty {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                $crate::random::Generator::next_value(self)
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                rand::rand_core::impls::next_u64_via_u32(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                rand::rand_core::impls::fill_bytes_via_next(self, dest)
            }
        }
    };
}

pub(crate) use impl_rng_core;
