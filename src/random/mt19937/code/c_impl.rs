//! FFI bindings for the C implementation of MT19937.
//!
//! Only built when `build.rs` found a C compiler.

#[cfg(c_implementation_active)]
use super::original::{Mt19937, N};

/// State layout shared with `mt19937.c`
#[cfg(c_implementation_active)]
#[repr(C)]
pub struct CState {
    mt: [u32; N],
    mti: i32,
}

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn mt19937_c_next(state: *mut super::CState) -> u32;
    }
}

/// Check if the C implementation is available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

/// Name of the C compiler used
#[cfg(c_implementation_active)]
pub const COMPILER_NAME: Option<&str> = Some(env!("C_COMPILER_NAME"));

#[cfg(not(c_implementation_active))]
pub const COMPILER_NAME: Option<&str> = None;

#[cfg(c_implementation_active)]
impl CState {
    /// Start the C engine from the same point as a Rust engine that has not
    /// produced any value yet.
    pub fn from_engine(engine: &Mt19937) -> Box<Self> {
        Box::new(Self {
            mt: *engine.state(),
            mti: N as i32,
        })
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        // SAFETY: `self` is a live, exclusively borrowed `CState` whose layout
        // matches `mt19937_c_state`.
        unsafe { ffi::mt19937_c_next(self) }
    }
}
