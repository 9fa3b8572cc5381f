//! Portable SFMT block regeneration.
//!
//! Each 128-bit block is handled as a `u128` for the byte-wise shifts and as
//! four 32-bit lanes for the lane-wise shifts and masks.

use super::{MSK, N, POS1, SL1, SL2, SR1, SR2};
use super::State;

#[inline(always)]
fn load(state: &State, i: usize) -> [u32; 4] {
    [
        state.0[4 * i],
        state.0[4 * i + 1],
        state.0[4 * i + 2],
        state.0[4 * i + 3],
    ]
}

#[inline(always)]
fn store(state: &mut State, i: usize, block: [u32; 4]) {
    state.0[4 * i..4 * i + 4].copy_from_slice(&block);
}

#[inline(always)]
fn join(block: [u32; 4]) -> u128 {
    block
        .iter()
        .rev()
        .fold(0u128, |acc, &lane| (acc << 32) | lane as u128)
}

#[inline(always)]
fn split(value: u128) -> [u32; 4] {
    std::array::from_fn(|k| (value >> (32 * k)) as u32)
}

#[inline(always)]
fn do_recursion(a: [u32; 4], b: [u32; 4], c: [u32; 4], d: [u32; 4]) -> [u32; 4] {
    let x = split(join(a) << (SL2 * 8));
    let y = split(join(c) >> (SR2 * 8));
    std::array::from_fn(|k| a[k] ^ x[k] ^ ((b[k] >> SR1) & MSK[k]) ^ y[k] ^ (d[k] << SL1))
}

pub fn gen_rand_all_original(state: &mut State) {
    let mut r1 = load(state, N - 2);
    let mut r2 = load(state, N - 1);

    for i in 0..N {
        let b = if i < N - POS1 { i + POS1 } else { i + POS1 - N };
        let r = do_recursion(load(state, i), load(state, b), r1, r2);
        store(state, i, r);
        r1 = r2;
        r2 = r;
    }
}
