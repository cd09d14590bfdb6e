use core::marker::PhantomData;

use crate::loom::sync::atomic::{AtomicUsize, Ordering};

/// A pointer-sized opaque cell with sequentially consistent operations.
///
/// The cell stores the pointer's bit pattern in an unsigned word atomic and
/// never dereferences it. That representation is what lets [`add`], [`and`],
/// [`or`] and [`xor`] manipulate tag bits and offsets directly; they are
/// bit-pattern operations, not pointer arithmetic.
///
/// [`add`]: AtomicPtrCell::add
/// [`and`]: AtomicPtrCell::and
/// [`or`]: AtomicPtrCell::or
/// [`xor`]: AtomicPtrCell::xor
#[repr(transparent)]
pub struct AtomicPtrCell<T> {
    bits: AtomicUsize,
    _marker: PhantomData<*mut T>,
}

// The cell never dereferences its pointer, so the usual raw-pointer
// auto-trait opt-out does not apply. Same reasoning as core's `AtomicPtr`.
unsafe impl<T> Send for AtomicPtrCell<T> {}
unsafe impl<T> Sync for AtomicPtrCell<T> {}

impl<T> AtomicPtrCell<T> {
    /// Creates a new cell holding `ptr`.
    #[inline(always)]
    pub fn new(ptr: *mut T) -> Self {
        Self {
            bits: AtomicUsize::new(ptr as usize),
            _marker: PhantomData,
        }
    }

    /// Creates a new cell holding the null pointer.
    #[cfg(not(loom))]
    #[inline(always)]
    pub const fn null() -> Self {
        Self {
            bits: AtomicUsize::new(0),
            _marker: PhantomData,
        }
    }

    /// Creates a new cell holding the null pointer.
    #[cfg(loom)]
    pub fn null() -> Self {
        Self {
            bits: AtomicUsize::new(0),
            _marker: PhantomData,
        }
    }

    /// Loads the current pointer.
    #[inline(always)]
    pub fn get(&self) -> *mut T {
        self.bits.load(Ordering::SeqCst) as *mut T
    }

    /// Stores `ptr`.
    #[inline(always)]
    pub fn set(&self, ptr: *mut T) {
        self.bits.store(ptr as usize, Ordering::SeqCst);
    }

    /// Swaps in `ptr`, returning the previous pointer.
    #[inline(always)]
    pub fn exchange(&self, ptr: *mut T) -> *mut T {
        self.bits.swap(ptr as usize, Ordering::SeqCst) as *mut T
    }

    /// Atomically adds `delta` to the bit pattern (wrapping), returning the
    /// previous pointer.
    #[inline(always)]
    pub fn add(&self, delta: usize) -> *mut T {
        self.bits.fetch_add(delta, Ordering::SeqCst) as *mut T
    }

    /// Bitwise AND of the bit pattern with `mask`, returning the previous
    /// pointer.
    #[inline(always)]
    pub fn and(&self, mask: usize) -> *mut T {
        self.bits.fetch_and(mask, Ordering::SeqCst) as *mut T
    }

    /// Bitwise OR of the bit pattern with `mask`, returning the previous
    /// pointer.
    #[inline(always)]
    pub fn or(&self, mask: usize) -> *mut T {
        self.bits.fetch_or(mask, Ordering::SeqCst) as *mut T
    }

    /// Bitwise XOR of the bit pattern with `mask`, returning the previous
    /// pointer.
    #[inline(always)]
    pub fn xor(&self, mask: usize) -> *mut T {
        self.bits.fetch_xor(mask, Ordering::SeqCst) as *mut T
    }

    /// Strong compare-and-exchange: if the cell holds `expected`, replaces it
    /// with `new` and returns true; otherwise leaves it untouched and returns
    /// false. Never fails spuriously.
    #[inline(always)]
    pub fn compare_and_exchange(&self, expected: *mut T, new: *mut T) -> bool {
        self.bits
            .compare_exchange(
                expected as usize,
                new as usize,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// Consumes the cell, returning the pointer.
    #[cfg(not(loom))]
    #[inline(always)]
    pub fn into_inner(self) -> *mut T {
        self.bits.into_inner() as *mut T
    }
}

#[cfg(not(loom))]
impl<T> Default for AtomicPtrCell<T> {
    fn default() -> Self {
        Self::null()
    }
}
