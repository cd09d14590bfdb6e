//! Machine-word atomic cells.
//!
//! Every operation on these cells is sequentially consistent: all threads
//! agree on one global total order over all operations on all cells. There
//! are no per-call ordering knobs and no weak variants.
//!
//! Important:
//! - Atomic RMW operations have inherent hardware cost; what these wrappers
//!   guarantee is that the *wrapper* itself compiles away.
//! - The cells never block, never fail, and never allocate.

/// Signed machine-word cell.
pub mod int;
/// Pointer-sized opaque cell.
pub mod ptr;
/// Unsigned machine-word cell.
pub mod uint;

pub use int::AtomicInt;
pub use ptr::AtomicPtrCell;
pub use uint::AtomicUint;
