//! # `plinth` - Sequentially Consistent Atomic Primitives
//!
//! A portable atomic-primitives layer: lock-free operations on machine-word
//! integers, pointer-sized values, and individually addressable bits within a
//! memory region, all with sequentially consistent visibility across threads.
//! This is the lowest-level building block for reference counts, lock-free
//! queues, and flag words; it depends on nothing else.
//!
//! ## Guarantees
//!
//! ### Ordering
//! - **One global order**: every operation on every cell participates in a
//!   single total order that all threads agree on. There are no relaxed,
//!   acquire, or release variants to misuse; the strongest ordering is the
//!   only ordering.
//! - **No torn accesses**: a read never observes a mix of two writes, and a
//!   single-bit update never tears the rest of its word, because bit updates
//!   are whole-word fetch-OR / fetch-AND operations.
//!
//! ### Progress
//! - **Lock-free, non-blocking**: every operation is one finite hardware
//!   step. Nothing blocks, spins, retries, or allocates. CAS-retry loops are
//!   a consumer pattern built on top, not something this layer performs.
//! - **Strong CAS**: [`compare_and_exchange`](cell::AtomicUint::compare_and_exchange)
//!   never fails spuriously; `false` means the cell genuinely held something
//!   other than the expected value.
//!
//! ### Ownership
//! - **Caller-owned memory**: cells and bit regions are caller storage. The
//!   crate allocates nothing, holds no shared state beyond the idempotent
//!   [`backend`] lifecycle flag, and never dereferences a stored pointer.
//!
//! ## The pieces
//!
//! 1. **Scalar cells** ([`AtomicInt`], [`AtomicUint`]): signed/unsigned
//!    machine words with get/set, counter ops (`inc`, `dec`,
//!    `dec_and_test`), fetch-style arithmetic and bitwise ops, swap, and
//!    strong CAS.
//! 2. **Pointer cells** ([`AtomicPtrCell`]): the same contract over an
//!    opaque pointer-sized word, with bit-pattern `add`/`and`/`or`/`xor`
//!    for tagged-pointer manipulation.
//! 3. **Bit arrays** ([`BitField`]): a borrowed view of caller-owned words
//!    as a dense array of atomic flags with `test_and_set` /
//!    `test_and_reset`.
//! 4. **Backend seam** ([`backend`]): the lock-freedom capability query and
//!    the idempotent `init`/`shutdown` pair an emulated backend would fill.
//!
//! ## Example
//!
//! ```rust
//! use plinth::AtomicUint;
//!
//! let refcount = AtomicUint::new(1);
//!
//! // Acquire a reference.
//! refcount.inc();
//!
//! // Release both; the last release observes zero.
//! assert!(!refcount.dec_and_test());
//! assert!(refcount.dec_and_test());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::inline_always)]

pub mod backend;
pub mod bitfield;
pub mod cell;
pub(crate) mod loom;

pub use bitfield::BitField;
pub use cell::{AtomicInt, AtomicPtrCell, AtomicUint};

// Compile-time layout assertions: the cells must be drop-in replacements for
// the plain words they wrap.
#[cfg(not(loom))]
const _: () = {
    use core::mem;

    assert!(mem::size_of::<AtomicInt>() == mem::size_of::<isize>());
    assert!(mem::align_of::<AtomicInt>() == mem::align_of::<isize>());
    assert!(mem::size_of::<AtomicUint>() == mem::size_of::<usize>());
    assert!(mem::align_of::<AtomicUint>() == mem::align_of::<usize>());
    assert!(mem::size_of::<AtomicPtrCell<u8>>() == mem::size_of::<*mut u8>());
};
