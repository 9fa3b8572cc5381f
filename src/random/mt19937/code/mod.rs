//! MT19937 implementations.

pub mod c_impl;
mod original;

#[cfg(c_implementation_active)]
pub use c_impl::CState;
pub use c_impl::{COMPILER_NAME, C_IMPL_AVAILABLE};
pub use original::{
    init_state, temper, twist, Mt19937, DEFAULT_SEED, LOWER_MASK, M, MATRIX_A, N, UPPER_MASK,
};
