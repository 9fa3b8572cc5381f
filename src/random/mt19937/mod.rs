//! # MT19937 (scalar software engine)
//!
//! The standard 32-bit Mersenne Twister: 624 words of state, one tempered word
//! per call, a full twist every 624 calls.
//!
//! Seeding draws [`SEED_WORDS`] words of OS entropy and expands them through a
//! [`SeedSeq`] before filling the engine state, which is the recommended way to
//! initialise this engine from more than one word.
//!
//! The full-range uniform distribution over `[0, 2^32 - 1]` is the engine
//! output itself, so no distribution layer sits on top of the engine.

pub mod code;
#[cfg(test)]
pub mod test;

use crate::error::SeedError;
use crate::random::{impl_rng_core, EntropySource, Generator, SeedSeq};
#[cfg(c_implementation_active)]
use code::CState;
use code::Mt19937;
use tracing::debug;

/// Number of entropy words expanded into the initial state
pub const SEED_WORDS: usize = 8;

/// MT19937 seeded from an expanded seed sequence.
#[derive(Debug)]
pub struct MtRand {
    engine: Mt19937,
}

impl MtRand {
    pub fn from_seed_seq(seq: &SeedSeq) -> Self {
        Self {
            engine: Mt19937::from_seed_seq(seq),
        }
    }
}

impl Generator for MtRand {
    const NAME: &'static str = "mt19937";

    fn from_entropy<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Self, SeedError> {
        let mut words = [0u32; SEED_WORDS];
        entropy.fill_words(&mut words)?;
        debug!(generator = Self::NAME, words = SEED_WORDS, "seeded");
        Ok(Self::from_seed_seq(&SeedSeq::new(words)))
    }

    #[inline]
    fn next_value(&mut self) -> u32 {
        self.engine.next_u32()
    }
}

impl_rng_core!(MtRand);

/// The same engine driven through the C implementation.
#[cfg(c_implementation_active)]
pub struct MtRandC {
    state: Box<CState>,
}

#[cfg(c_implementation_active)]
impl MtRandC {
    pub fn from_seed_seq(seq: &SeedSeq) -> Self {
        Self {
            state: CState::from_engine(&Mt19937::from_seed_seq(seq)),
        }
    }
}

#[cfg(c_implementation_active)]
impl Generator for MtRandC {
    const NAME: &'static str = "c-mt19937";

    fn from_entropy<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Self, SeedError> {
        let mut words = [0u32; SEED_WORDS];
        entropy.fill_words(&mut words)?;
        debug!(generator = Self::NAME, compiler = ?code::COMPILER_NAME, "seeded");
        Ok(Self::from_seed_seq(&SeedSeq::new(words)))
    }

    #[inline]
    fn next_value(&mut self) -> u32 {
        self.state.next_u32()
    }
}

#[cfg(c_implementation_active)]
impl_rng_core!(MtRandC);

/// Check that every compiled implementation reproduces the Rust engine.
#[cfg(not(c_implementation_active))]
pub fn verify() -> Result<(), String> {
    Ok(())
}

/// Check that every compiled implementation reproduces the Rust engine.
#[cfg(c_implementation_active)]
pub fn verify() -> Result<(), String> {
    let seq = SeedSeq::new([0xdead_beef, 0x0caf_ebab, 1, 2, 3, 4, 5, 6]);
    let mut reference = MtRand::from_seed_seq(&seq);
    let mut c = MtRandC::from_seed_seq(&seq);

    // Two full twists plus change
    for i in 0..(2 * code::N + 100) {
        let expected = reference.next_value();
        let got = c.next_value();
        if got != expected {
            return Err(format!(
                "Variant '{}' failed verification at iteration {}. Expected {}, got {}",
                MtRandC::NAME,
                i,
                expected,
                got
            ));
        }
    }

    Ok(())
}
