//! x86_64 SSE2 SFMT block regeneration.
//!
//! SSE2 is part of the x86_64 baseline, so no runtime detection is needed.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::State;
use super::{MSK, N, POS1, SL1, SL2, SR1, SR2};

#[inline(always)]
unsafe fn mm_recursion(a: __m128i, b: __m128i, c: __m128i, d: __m128i, mask: __m128i) -> __m128i {
    let y = _mm_srli_epi32::<{ SR1 as i32 }>(b);
    let z = _mm_srli_si128::<{ SR2 as i32 }>(c);
    let v = _mm_slli_epi32::<{ SL1 as i32 }>(d);
    let z = _mm_xor_si128(z, a);
    let z = _mm_xor_si128(z, v);
    let x = _mm_slli_si128::<{ SL2 as i32 }>(a);
    let y = _mm_and_si128(y, mask);
    let z = _mm_xor_si128(z, x);
    _mm_xor_si128(z, y)
}

/// Regenerate the whole state with 128-bit SSE2 operations.
pub fn gen_rand_all_x86_64_sse2(state: &mut State) {
    let ptr = state.0.as_mut_ptr() as *mut __m128i;

    // SAFETY: `State` holds exactly `N` 16-byte aligned blocks and every
    // index below stays in `0..N`.
    unsafe {
        let mask = _mm_set_epi32(MSK[3] as i32, MSK[2] as i32, MSK[1] as i32, MSK[0] as i32);
        let mut r1 = _mm_load_si128(ptr.add(N - 2));
        let mut r2 = _mm_load_si128(ptr.add(N - 1));

        for i in 0..N {
            let b = if i < N - POS1 { i + POS1 } else { i + POS1 - N };
            let r = mm_recursion(_mm_load_si128(ptr.add(i)), _mm_load_si128(ptr.add(b)), r1, r2, mask);
            _mm_store_si128(ptr.add(i), r);
            r1 = r2;
            r2 = r;
        }
    }
}
