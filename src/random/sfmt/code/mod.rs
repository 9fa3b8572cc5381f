//! SFMT-19937 implementations.
//!
//! Both kernels regenerate the full state in one pass; they differ only in
//! how a 128-bit block is processed.

mod original;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

pub use original::gen_rand_all_original;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::gen_rand_all_x86_64_sse2;

use crate::utils::VariantInfo;

/// Mersenne exponent
pub const MEXP: usize = 19937;
/// State size in 128-bit blocks
pub const N: usize = MEXP / 128 + 1;
/// State size in 32-bit words
pub const N32: usize = N * 4;
pub const POS1: usize = 122;
pub const SL1: u32 = 18;
/// Byte shift
pub const SL2: u32 = 1;
pub const SR1: u32 = 11;
/// Byte shift
pub const SR2: u32 = 1;
pub const MSK: [u32; 4] = [0xdfff_ffef, 0xddfe_cb7f, 0xbffa_ffff, 0xbfff_fff6];
pub const PARITY: [u32; 4] = [0x0000_0001, 0x0000_0000, 0x0000_0000, 0x13c9_e684];

/// Engine state, 16-byte aligned so blocks can be loaded as vectors.
#[derive(Clone)]
#[repr(C, align(16))]
pub struct State(pub [u32; N32]);

/// Signature of a block regeneration kernel
pub type GenRandAllFn = fn(&mut State);

/// Get all available kernels for the current CPU
pub fn available_variants() -> Vec<VariantInfo<GenRandAllFn>> {
    let mut variants: Vec<VariantInfo<GenRandAllFn>> = vec![VariantInfo {
        name: "original",
        description: "Portable Rust, u128 block shifts",
        function: gen_rand_all_original,
    }];

    #[cfg(target_arch = "x86_64")]
    variants.push(VariantInfo {
        name: "x86_64-sse2",
        description: "x86_64 with SSE2 SIMD intrinsics",
        function: gen_rand_all_x86_64_sse2,
    });

    variants
}

/// Fastest kernel available on this CPU.
pub fn best_kernel() -> VariantInfo<GenRandAllFn> {
    available_variants()
        .pop()
        .unwrap_or(VariantInfo {
            name: "original",
            description: "Portable Rust, u128 block shifts",
            function: gen_rand_all_original,
        })
}
