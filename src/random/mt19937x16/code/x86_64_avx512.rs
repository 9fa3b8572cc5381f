//! x86_64 AVX-512F implementation.
//!
//! One 512-bit register holds the same state word of all sixteen lanes, so a
//! twist step and a tempering pass each cover every lane at once.

use std::arch::x86_64::*;
use std::mem::transmute;

use super::{Generate16Fn, Lanes, LANES};
use crate::random::mt19937::code::{LOWER_MASK, M, MATRIX_A, N, UPPER_MASK};

/// The AVX-512F kernel, or `None` when this CPU lacks AVX-512F.
pub fn avx512_kernel() -> Option<Generate16Fn> {
    if is_x86_feature_detected!("avx512f") {
        Some(generate16_x86_64_avx512 as Generate16Fn)
    } else {
        None
    }
}

/// Produce one tempered row with AVX-512F. Only handed out by [`avx512_kernel`].
fn generate16_x86_64_avx512(lanes: &mut Lanes, out: &mut [u32; LANES]) {
    // SAFETY: this function is reachable only through `avx512_kernel`, which
    // returned it after confirming AVX-512F support.
    unsafe { generate16_avx512(lanes, out) }
}

#[target_feature(enable = "avx512f")]
unsafe fn generate16_avx512(lanes: &mut Lanes, out: &mut [u32; LANES]) {
    if lanes.index >= N {
        twist_avx512(&mut lanes.rows);
        lanes.index = 0;
    }

    let mut y: __m512i = transmute(lanes.rows[lanes.index]);
    y = _mm512_xor_si512(y, _mm512_srli_epi32::<11>(y));
    y = _mm512_xor_si512(
        y,
        _mm512_and_si512(_mm512_slli_epi32::<7>(y), _mm512_set1_epi32(0x9d2c_5680u32 as i32)),
    );
    y = _mm512_xor_si512(
        y,
        _mm512_and_si512(_mm512_slli_epi32::<15>(y), _mm512_set1_epi32(0xefc6_0000u32 as i32)),
    );
    y = _mm512_xor_si512(y, _mm512_srli_epi32::<18>(y));

    *out = transmute::<__m512i, [u32; LANES]>(y);
    lanes.index += 1;
}

#[target_feature(enable = "avx512f")]
unsafe fn twist_avx512(rows: &mut [[u32; LANES]; N]) {
    let upper = _mm512_set1_epi32(UPPER_MASK as i32);
    let lower = _mm512_set1_epi32(LOWER_MASK as i32);
    let matrix = _mm512_set1_epi32(MATRIX_A as i32);
    let one = _mm512_set1_epi32(1);
    let zero = _mm512_setzero_si512();

    for i in 0..N {
        let cur: __m512i = transmute(rows[i]);
        let next: __m512i = transmute(rows[(i + 1) % N]);
        let far: __m512i = transmute(rows[(i + M) % N]);

        let y = _mm512_or_si512(_mm512_and_si512(cur, upper), _mm512_and_si512(next, lower));
        // All-ones where the low bit is set, zero elsewhere
        let odd = _mm512_sub_epi32(zero, _mm512_and_si512(y, one));
        let mag = _mm512_and_si512(odd, matrix);
        let v = _mm512_xor_si512(_mm512_xor_si512(far, _mm512_srli_epi32::<1>(y)), mag);

        rows[i] = transmute::<__m512i, [u32; LANES]>(v);
    }
}
