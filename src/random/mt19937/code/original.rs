//! Pure Rust MT19937.

use crate::random::SeedSeq;

/// State size in 32-bit words
pub const N: usize = 624;
/// Twist offset
pub const M: usize = 397;
pub const MATRIX_A: u32 = 0x9908_b0df;
pub const UPPER_MASK: u32 = 0x8000_0000;
pub const LOWER_MASK: u32 = 0x7fff_ffff;
/// Default seed of the reference engine
pub const DEFAULT_SEED: u32 = 5489;

/// 32-bit Mersenne Twister engine.
#[derive(Debug)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Classic single-word initialisation.
    pub fn from_seed(seed: u32) -> Self {
        Self {
            state: init_state(seed),
            index: N,
        }
    }

    /// Initialise from an expanded seed sequence.
    pub fn from_seed_seq(seq: &SeedSeq) -> Self {
        let mut state = [0u32; N];
        seq.generate(&mut state);
        // An all-zero state never leaves zero
        if state[0] & UPPER_MASK == 0 && state[1..].iter().all(|&w| w == 0) {
            state[0] = UPPER_MASK;
        }
        Self { state, index: N }
    }

    /// Raw state words, used to hand the same starting point to other
    /// implementations of this engine.
    pub fn state(&self) -> &[u32; N] {
        &self.state
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            twist(&mut self.state);
            self.index = 0;
        }
        let y = self.state[self.index];
        self.index += 1;
        temper(y)
    }
}

/// Knuth-style linear initialisation used by single-word seeding.
pub fn init_state(seed: u32) -> [u32; N] {
    let mut state = [0u32; N];
    state[0] = seed;
    for i in 1..N {
        let prev = state[i - 1];
        state[i] = 1_812_433_253u32
            .wrapping_mul(prev ^ (prev >> 30))
            .wrapping_add(i as u32);
    }
    state
}

/// Regenerate all `N` words in place.
pub fn twist(state: &mut [u32; N]) {
    for i in 0..N {
        let y = (state[i] & UPPER_MASK) | (state[(i + 1) % N] & LOWER_MASK);
        let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
        state[i] = state[(i + M) % N] ^ (y >> 1) ^ mag;
    }
}

#[inline(always)]
pub fn temper(mut y: u32) -> u32 {
    y ^= y >> 11;
    y ^= (y << 7) & 0x9d2c_5680;
    y ^= (y << 15) & 0xefc6_0000;
    y ^= y >> 18;
    y
}
