use crate::loom::sync::atomic::{AtomicUsize, Ordering};

/// An unsigned machine-word cell with sequentially consistent operations.
///
/// The unsigned twin of [`AtomicInt`](crate::cell::AtomicInt); arithmetic
/// wraps at the domain boundary the way the underlying `fetch_add`/`fetch_sub`
/// do.
#[repr(transparent)]
pub struct AtomicUint {
    inner: AtomicUsize,
}

impl AtomicUint {
    /// Creates a new cell holding `value`.
    #[cfg(not(loom))]
    #[inline(always)]
    pub const fn new(value: usize) -> Self {
        Self {
            inner: AtomicUsize::new(value),
        }
    }

    /// Creates a new cell holding `value`.
    #[cfg(loom)]
    pub fn new(value: usize) -> Self {
        Self {
            inner: AtomicUsize::new(value),
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn get(&self) -> usize {
        self.inner.load(Ordering::SeqCst)
    }

    /// Stores `value`.
    #[inline(always)]
    pub fn set(&self, value: usize) {
        self.inner.store(value, Ordering::SeqCst);
    }

    /// Atomically adds one.
    #[inline(always)]
    pub fn inc(&self) {
        self.inner.fetch_add(1, Ordering::SeqCst);
    }

    /// Atomically subtracts one, returning the post-decrement value.
    #[inline(always)]
    pub fn dec(&self) -> usize {
        self.inner.fetch_sub(1, Ordering::SeqCst).wrapping_sub(1)
    }

    /// Atomically subtracts one; true iff the post-decrement value is zero.
    #[inline(always)]
    pub fn dec_and_test(&self) -> bool {
        self.dec() == 0
    }

    /// Swaps in `value`, returning the previous value.
    #[inline(always)]
    pub fn exchange(&self, value: usize) -> usize {
        self.inner.swap(value, Ordering::SeqCst)
    }

    /// Atomically adds `delta` (wrapping), returning the previous value.
    #[inline(always)]
    pub fn add(&self, delta: usize) -> usize {
        self.inner.fetch_add(delta, Ordering::SeqCst)
    }

    /// Bitwise AND with `mask`, returning the previous value.
    #[inline(always)]
    pub fn and(&self, mask: usize) -> usize {
        self.inner.fetch_and(mask, Ordering::SeqCst)
    }

    /// Bitwise OR with `mask`, returning the previous value.
    #[inline(always)]
    pub fn or(&self, mask: usize) -> usize {
        self.inner.fetch_or(mask, Ordering::SeqCst)
    }

    /// Bitwise XOR with `mask`, returning the previous value.
    #[inline(always)]
    pub fn xor(&self, mask: usize) -> usize {
        self.inner.fetch_xor(mask, Ordering::SeqCst)
    }

    /// Strong compare-and-exchange: if the cell holds `expected`, replaces it
    /// with `new` and returns true; otherwise leaves it untouched and returns
    /// false. Never fails spuriously.
    #[inline(always)]
    pub fn compare_and_exchange(&self, expected: usize, new: usize) -> bool {
        self.inner
            .compare_exchange(expected, new, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Returns a mutable reference to the value. The `&mut self` receiver
    /// proves no other thread can observe the cell, so no atomics are needed.
    #[cfg(not(loom))]
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut usize {
        self.inner.get_mut()
    }

    /// Consumes the cell, returning the value.
    #[cfg(not(loom))]
    #[inline(always)]
    pub fn into_inner(self) -> usize {
        self.inner.into_inner()
    }
}

#[cfg(not(loom))]
impl Default for AtomicUint {
    fn default() -> Self {
        Self::new(0)
    }
}
