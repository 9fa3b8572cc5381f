//! Seed sequence expansion.
//!
//! Spreads a handful of entropy words over an arbitrarily long, well-mixed
//! initialisation vector. This is the classic `seed_seq::generate` scheme used
//! to initialise Mersenne Twister engines from more than a single word.

/// A short list of seed words that can be expanded to any length.
#[derive(Debug, PartialEq, Eq)]
pub struct SeedSeq {
    words: Vec<u32>,
}

impl SeedSeq {
    pub fn new(words: impl Into<Vec<u32>>) -> Self {
        Self {
            words: words.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Fill `out` with mixed words derived from the seed.
    pub fn generate(&self, out: &mut [u32]) {
        let n = out.len();
        if n == 0 {
            return;
        }

        out.fill(0x8b8b_8b8b);

        let s = self.words.len();
        let t = if n >= 623 {
            11
        } else if n >= 68 {
            7
        } else if n >= 39 {
            5
        } else if n >= 7 {
            3
        } else {
            (n - 1) / 2
        };
        let p = (n - t) / 2;
        let q = p + t;
        let m = (s + 1).max(n);

        for k in 0..m {
            let r1 = 1_664_525u32
                .wrapping_mul(mix(out[k % n] ^ out[(k + p) % n] ^ out[(k + n - 1) % n]));
            let r2 = if k == 0 {
                r1.wrapping_add(s as u32)
            } else if k <= s {
                r1.wrapping_add((k % n) as u32).wrapping_add(self.words[k - 1])
            } else {
                r1.wrapping_add((k % n) as u32)
            };
            out[(k + p) % n] = out[(k + p) % n].wrapping_add(r1);
            out[(k + q) % n] = out[(k + q) % n].wrapping_add(r2);
            out[k % n] = r2;
        }

        for k in m..m + n {
            let r3 = 1_566_083_941u32.wrapping_mul(mix(
                out[k % n]
                    .wrapping_add(out[(k + p) % n])
                    .wrapping_add(out[(k + n - 1) % n]),
            ));
            let r4 = r3.wrapping_sub((k % n) as u32);
            out[(k + p) % n] ^= r3;
            out[(k + q) % n] ^= r4;
            out[k % n] = r4;
        }
    }
}

#[inline]
fn mix(x: u32) -> u32 {
    x ^ (x >> 27)
}
