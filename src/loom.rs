//! Atomic type selection for model checking.
//!
//! Under `--cfg loom` the cells are built on loom's permuting atomics so the
//! model tests in `tests/loom_test.rs` can exhaustively explore interleavings;
//! in ordinary builds they resolve to the hardware atomics in `core`.

#[cfg(not(loom))]
pub(crate) mod export {
    pub(crate) mod sync {
        pub(crate) mod atomic {
            pub(crate) use core::sync::atomic::AtomicIsize;
            pub(crate) use core::sync::atomic::AtomicUsize;
            pub(crate) use core::sync::atomic::Ordering;
        }
    }
}

#[cfg(loom)]
pub(crate) mod export {
    pub(crate) mod sync {
        pub(crate) mod atomic {
            pub(crate) use loom::sync::atomic::AtomicIsize;
            pub(crate) use loom::sync::atomic::AtomicUsize;
            pub(crate) use loom::sync::atomic::Ordering;
        }
    }
}

pub(crate) use self::export::*;
