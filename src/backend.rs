//! Backend capability query and process-wide lifecycle.
//!
//! This crate compiles exactly one backend: native hardware atomics. The
//! query and the lifecycle pair exist as the seam where a platform without
//! hardware atomics would substitute an emulated, lock-based backend; that
//! backend would report `is_lock_free() == false` and use `init`/`shutdown`
//! to build and tear down its global lock. The native pair keeps only a
//! diagnostic flag so tests can verify it is a true no-op.

use core::sync::atomic::{AtomicBool, Ordering};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Whether the active backend performs every operation lock-free.
///
/// Constant for a given build: the native hardware backend is the only one
/// compiled here.
#[inline(always)]
pub const fn is_lock_free() -> bool {
    cfg!(target_has_atomic = "ptr")
}

/// Marks the primitives layer initialized.
///
/// Idempotent and safe to call from any thread, any number of times, or not
/// at all; the native backend has no global state to construct.
pub fn init() {
    if !INITIALIZED.swap(true, Ordering::SeqCst) {
        #[cfg(feature = "tracing")]
        tracing::trace!(backend = "native", "atomic primitives initialized");
    }
}

/// Marks the primitives layer shut down.
///
/// Idempotent; safe to call without a matching [`init`].
pub fn shutdown() {
    if INITIALIZED.swap(false, Ordering::SeqCst) {
        #[cfg(feature = "tracing")]
        tracing::trace!(backend = "native", "atomic primitives shut down");
    }
}

/// Whether [`init`] has been called without a matching [`shutdown`] yet.
#[inline(always)]
pub fn initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}
