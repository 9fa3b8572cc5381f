//! Seed material sources.

use crate::error::SeedError;
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Supplier of independent 32-bit seed words.
pub trait EntropySource {
    /// Draw one word.
    fn next_word(&mut self) -> Result<u32, SeedError>;

    /// Fill `out` with fresh words, failing on the first unavailable word.
    fn fill_words(&mut self, out: &mut [u32]) -> Result<(), SeedError> {
        for word in out.iter_mut() {
            *word = self.next_word()?;
        }
        Ok(())
    }
}

/// Non-deterministic operating system entropy.
#[derive(Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_word(&mut self) -> Result<u32, SeedError> {
        OsRng
            .try_next_u32()
            .map_err(|e| SeedError::Unavailable(e.to_string()))
    }
}

/// Deterministic entropy for reproducible runs (`--seed`).
///
/// 64-bit LCG, upper half of the state returned as the word.
#[derive(Debug)]
pub struct SeededEntropy {
    state: u64,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl EntropySource for SeededEntropy {
    fn next_word(&mut self) -> Result<u32, SeedError> {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        Ok((self.state >> 32) as u32)
    }
}

/// A finite list of words. Drawing past the end is an error.
#[derive(Debug)]
pub struct FixedEntropy {
    words: Vec<u32>,
    drawn: usize,
}

impl FixedEntropy {
    pub fn new(words: impl Into<Vec<u32>>) -> Self {
        Self {
            words: words.into(),
            drawn: 0,
        }
    }

    /// Source that fails on the first draw.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn remaining(&self) -> usize {
        self.words.len() - self.drawn
    }
}

impl EntropySource for FixedEntropy {
    fn next_word(&mut self) -> Result<u32, SeedError> {
        let word = self
            .words
            .get(self.drawn)
            .copied()
            .ok_or(SeedError::Exhausted { drawn: self.drawn })?;
        self.drawn += 1;
        Ok(word)
    }
}
