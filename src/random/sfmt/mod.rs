//! # SFMT-19937 (vectorized software engine)
//!
//! SIMD-oriented Fast Mersenne Twister. Same period as MT19937, but the state
//! is 156 blocks of 128 bits and the whole state is regenerated at once, which
//! maps directly onto vector registers. Values are then served one 32-bit word
//! at a time, so the per-call contract matches the scalar engine.
//!
//! Seeded from a single entropy word, as the engine's own initialiser expects.

pub mod code;
#[cfg(test)]
pub mod test;

use crate::error::SeedError;
use crate::random::{impl_rng_core, EntropySource, Generator};
use code::{GenRandAllFn, State, N32, PARITY};
use tracing::debug;

/// SFMT-19937 serving 32-bit words.
pub struct SfmtRand {
    state: Box<State>,
    idx: usize,
    kernel: GenRandAllFn,
}

impl SfmtRand {
    /// Seed with the fastest kernel for this CPU.
    pub fn from_seed(seed: u32) -> Self {
        Self::with_kernel(seed, code::best_kernel().function)
    }

    /// Seed with an explicit block regeneration kernel.
    pub fn with_kernel(seed: u32, kernel: GenRandAllFn) -> Self {
        let mut state = Box::new(State([0u32; N32]));
        state.0[0] = seed;
        for i in 1..N32 {
            let prev = state.0[i - 1];
            state.0[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        period_certification(&mut state);

        Self {
            state,
            idx: N32,
            kernel,
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.idx >= N32 {
            (self.kernel)(&mut self.state);
            self.idx = 0;
        }
        let r = self.state.0[self.idx];
        self.idx += 1;
        r
    }
}

/// Make sure the initial state lies on the full-period orbit.
fn period_certification(state: &mut State) {
    let mut inner = PARITY
        .iter()
        .zip(&state.0[..4])
        .fold(0u32, |acc, (&p, &w)| acc ^ (w & p));
    let mut shift = 16;
    while shift > 0 {
        inner ^= inner >> shift;
        shift >>= 1;
    }
    if inner & 1 == 1 {
        return;
    }

    // Flip the lowest parity bit
    for (i, &p) in PARITY.iter().enumerate() {
        if p != 0 {
            state.0[i] ^= 1 << p.trailing_zeros();
            return;
        }
    }
}

impl Generator for SfmtRand {
    const NAME: &'static str = "sfmt19937";

    fn from_entropy<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Self, SeedError> {
        let seed = entropy.next_word()?;
        let kernel = code::best_kernel();
        debug!(generator = Self::NAME, kernel = kernel.name, "seeded");
        Ok(Self::with_kernel(seed, kernel.function))
    }

    #[inline]
    fn next_value(&mut self) -> u32 {
        self.next_u32()
    }
}

impl_rng_core!(SfmtRand);

/// Check that every kernel reproduces the portable one.
pub fn verify() -> Result<(), String> {
    let variants = code::available_variants();
    let original = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or("No 'original' variant found for reference")?;

    let seed = 0xdead_beef;
    let mut reference = SfmtRand::with_kernel(seed, original.function);
    // Three block regenerations
    let expected: Vec<u32> = (0..3 * N32).map(|_| reference.next_u32()).collect();

    for variant in &variants {
        if variant.name == "original" {
            continue;
        }

        let mut rng = SfmtRand::with_kernel(seed, variant.function);
        for (i, &exp) in expected.iter().enumerate() {
            let got = rng.next_u32();
            if got != exp {
                return Err(format!(
                    "Variant '{}' failed verification at iteration {}. Expected {}, got {}",
                    variant.name, i, exp, got
                ));
            }
        }
    }

    Ok(())
}
