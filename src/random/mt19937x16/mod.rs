//! # MT19937x16 (hardware-vector engine)
//!
//! Sixteen independent MT19937 lanes laid out so that one 512-bit register
//! covers the same state word of every lane. Each refill produces sixteen
//! values in one vector pass; [`BatchBuffer`] hides the batching behind the
//! usual one-value-per-call contract.
//!
//! Lane seeds are spread from a single entropy word with a [`SeedSeq`].
//! Values are documented as uniform over `[0, 2^32)`; callers should treat
//! every engine here as uniform over the 32-bit space without relying on the
//! exact upper bound.
//!
//! The AVX-512F kernel is picked at run time. On CPUs without it the portable
//! kernel produces the same stream.

pub mod batch;
pub mod code;
#[cfg(test)]
pub mod test;

pub use batch::{BatchBuffer, BatchSource, BATCH};

use crate::error::SeedError;
use crate::random::mt19937::code::{init_state, N};
use crate::random::{impl_rng_core, EntropySource, Generator, SeedSeq};
use code::{Generate16Fn, Lanes, LANES};
use tracing::debug;

/// Sixteen-lane MT19937 producing one batch per call.
pub struct Mt19937x16 {
    lanes: Box<Lanes>,
    kernel: Generate16Fn,
}

impl Mt19937x16 {
    /// Seed with the fastest kernel for this CPU.
    pub fn from_seed(seed: u32) -> Self {
        Self::with_kernel(seed, code::best_kernel().function)
    }

    /// Seed with an explicit kernel.
    pub fn with_kernel(seed: u32, kernel: Generate16Fn) -> Self {
        let mut lane_seeds = [0u32; LANES];
        SeedSeq::new([seed]).generate(&mut lane_seeds);

        let mut lanes = Box::new(Lanes {
            rows: [[0u32; LANES]; N],
            index: N,
        });
        for (l, &lane_seed) in lane_seeds.iter().enumerate() {
            for (row, word) in lanes.rows.iter_mut().zip(init_state(lane_seed)) {
                row[l] = word;
            }
        }

        Self { lanes, kernel }
    }
}

impl BatchSource for Mt19937x16 {
    #[inline]
    fn fill(&mut self, out: &mut [u32; BATCH]) {
        (self.kernel)(&mut self.lanes, out);
    }
}

/// The hardware-vector generator: sixteen lanes behind a batch buffer.
pub type Avx512Rand = BatchBuffer<Mt19937x16>;

impl Generator for Avx512Rand {
    const NAME: &'static str = "mt19937x16-avx512";

    fn from_entropy<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Self, SeedError> {
        let seed = entropy.next_word()?;
        let kernel = code::best_kernel();
        debug!(generator = Self::NAME, kernel = kernel.name, "seeded");
        Ok(BatchBuffer::new(Mt19937x16::with_kernel(seed, kernel.function)))
    }

    #[inline]
    fn next_value(&mut self) -> u32 {
        self.next_u32()
    }
}

impl_rng_core!(Avx512Rand);

/// Check that every kernel reproduces the portable one.
pub fn verify() -> Result<(), String> {
    let variants = code::available_variants();
    let original = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or("No 'original' variant found for reference")?;

    let seed = 0xdead_beef;
    let mut reference = Mt19937x16::with_kernel(seed, original.function);
    let mut expected = vec![[0u32; BATCH]; 2 * N + 10];
    for batch in expected.iter_mut() {
        reference.fill(batch);
    }

    for variant in &variants {
        if variant.name == "original" {
            continue;
        }

        let mut engine = Mt19937x16::with_kernel(seed, variant.function);
        let mut got = [0u32; BATCH];
        for (i, exp) in expected.iter().enumerate() {
            engine.fill(&mut got);
            if &got != exp {
                return Err(format!(
                    "Variant '{}' failed verification at batch {}. Expected {:?}, got {:?}",
                    variant.name, i, exp, got
                ));
            }
        }
    }

    Ok(())
}
