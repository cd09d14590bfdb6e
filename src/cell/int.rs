use crate::loom::sync::atomic::{AtomicIsize, Ordering};

/// A signed machine-word cell with sequentially consistent operations.
///
/// Layout-compatible with a plain `isize`; constructing the cell is what
/// guarantees the alignment the hardware atomics require. The value may only
/// be touched through the operations below, never through ordinary reads or
/// writes, which is what preserves the ordering contract.
#[repr(transparent)]
pub struct AtomicInt {
    inner: AtomicIsize,
}

impl AtomicInt {
    /// Creates a new cell holding `value`.
    #[cfg(not(loom))]
    #[inline(always)]
    pub const fn new(value: isize) -> Self {
        Self {
            inner: AtomicIsize::new(value),
        }
    }

    /// Creates a new cell holding `value`.
    #[cfg(loom)]
    pub fn new(value: isize) -> Self {
        Self {
            inner: AtomicIsize::new(value),
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn get(&self) -> isize {
        self.inner.load(Ordering::SeqCst)
    }

    /// Stores `value`.
    #[inline(always)]
    pub fn set(&self, value: isize) {
        self.inner.store(value, Ordering::SeqCst);
    }

    /// Atomically adds one.
    #[inline(always)]
    pub fn inc(&self) {
        self.inner.fetch_add(1, Ordering::SeqCst);
    }

    /// Atomically subtracts one, returning the post-decrement value.
    #[inline(always)]
    pub fn dec(&self) -> isize {
        self.inner.fetch_sub(1, Ordering::SeqCst).wrapping_sub(1)
    }

    /// Atomically subtracts one; true iff the post-decrement value is zero.
    #[inline(always)]
    pub fn dec_and_test(&self) -> bool {
        self.dec() == 0
    }

    /// Swaps in `value`, returning the previous value.
    #[inline(always)]
    pub fn exchange(&self, value: isize) -> isize {
        self.inner.swap(value, Ordering::SeqCst)
    }

    /// Atomically adds `delta` (wrapping), returning the previous value.
    #[inline(always)]
    pub fn add(&self, delta: isize) -> isize {
        self.inner.fetch_add(delta, Ordering::SeqCst)
    }

    /// Bitwise AND with `mask`, returning the previous value.
    #[inline(always)]
    pub fn and(&self, mask: isize) -> isize {
        self.inner.fetch_and(mask, Ordering::SeqCst)
    }

    /// Bitwise OR with `mask`, returning the previous value.
    #[inline(always)]
    pub fn or(&self, mask: isize) -> isize {
        self.inner.fetch_or(mask, Ordering::SeqCst)
    }

    /// Bitwise XOR with `mask`, returning the previous value.
    #[inline(always)]
    pub fn xor(&self, mask: isize) -> isize {
        self.inner.fetch_xor(mask, Ordering::SeqCst)
    }

    /// Strong compare-and-exchange: if the cell holds `expected`, replaces it
    /// with `new` and returns true; otherwise leaves it untouched and returns
    /// false. Never fails spuriously.
    #[inline(always)]
    pub fn compare_and_exchange(&self, expected: isize, new: isize) -> bool {
        self.inner
            .compare_exchange(expected, new, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Returns a mutable reference to the value. The `&mut self` receiver
    /// proves no other thread can observe the cell, so no atomics are needed.
    #[cfg(not(loom))]
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut isize {
        self.inner.get_mut()
    }

    /// Consumes the cell, returning the value.
    #[cfg(not(loom))]
    #[inline(always)]
    pub fn into_inner(self) -> isize {
        self.inner.into_inner()
    }
}

#[cfg(not(loom))]
impl Default for AtomicInt {
    fn default() -> Self {
        Self::new(0)
    }
}
