//! Sixteen-lane MT19937 implementations.

mod original;
#[cfg(target_arch = "x86_64")]
mod x86_64_avx512;

pub use original::generate16_original;
#[cfg(target_arch = "x86_64")]
pub use x86_64_avx512::avx512_kernel;

use crate::random::mt19937::code::N;
use crate::utils::VariantInfo;

/// Lanes per batch, one per 32-bit slot of a 512-bit register
pub const LANES: usize = 16;

/// Interleaved state: `rows[i][l]` is word `i` of lane `l`.
#[repr(C, align(64))]
pub struct Lanes {
    pub rows: [[u32; LANES]; N],
    /// Next row to temper; `N` means a twist is due
    pub index: usize,
}

/// Signature of a batch kernel: one tempered value per lane
pub type Generate16Fn = fn(&mut Lanes, &mut [u32; LANES]);

/// Get all available kernels for the current CPU
pub fn available_variants() -> Vec<VariantInfo<Generate16Fn>> {
    let mut variants: Vec<VariantInfo<Generate16Fn>> = vec![VariantInfo {
        name: "original",
        description: "Portable Rust, lane by lane",
        function: generate16_original,
    }];

    #[cfg(target_arch = "x86_64")]
    {
        if let Some(function) = avx512_kernel() {
            variants.push(VariantInfo {
                name: "x86_64-avx512",
                description: "x86_64 with AVX-512F SIMD intrinsics",
                function,
            });
        }
    }

    variants
}

/// Fastest kernel available on this CPU.
pub fn best_kernel() -> VariantInfo<Generate16Fn> {
    available_variants().pop().unwrap_or(VariantInfo {
        name: "original",
        description: "Portable Rust, lane by lane",
        function: generate16_original,
    })
}
