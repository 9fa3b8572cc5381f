//! CPU pinning for the measured loops.
//!
//! A generator run must not migrate between cores mid-loop, so the driver pins
//! the thread to the core it is running on and restores the original affinity
//! afterwards. Implemented with `libc` on Linux; other platforms run unpinned.

#[cfg(target_os = "linux")]
mod platform {
    /// Saved affinity mask, restored on unpin
    pub struct Saved(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: plain syscall wrapper without arguments.
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn pin(core_id: usize) -> Option<Saved> {
        // SAFETY: `cpu_set_t` is plain data; both calls get a valid pointer
        // and the exact size of the set.
        unsafe {
            let mut original: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut original) != 0 {
                return None;
            }

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
                return None;
            }
            Some(Saved(original))
        }
    }

    pub fn restore(saved: &Saved) -> bool {
        // SAFETY: `saved.0` was filled by `sched_getaffinity`.
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct Saved;

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn pin(_core_id: usize) -> Option<Saved> {
        None
    }

    pub fn restore(_saved: &Saved) -> bool {
        true
    }
}

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
///
/// The thread is unpinned when the guard goes out of scope, even if the code
/// panics.
///
/// # Example
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // Thread pinned
///     // ... run the measured loop ...
/// } // Thread automatically unpinned here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::Saved>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is currently running on.
    pub fn new() -> Self {
        let core = platform::current_cpu().unwrap_or(0);
        match platform::pin(core) {
            Some(saved) => Self {
                pinned_core: Some(core),
                saved: Some(saved),
            },
            None => {
                tracing::warn!(core, "could not pin thread, measuring unpinned");
                Self {
                    pinned_core: None,
                    saved: None,
                }
            }
        }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    /// Check if the thread was successfully pinned.
    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            platform::restore(&saved);
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
