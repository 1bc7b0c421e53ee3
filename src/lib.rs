#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std
// - boxed: enables type-erased callable boxes (needs alloc)

//! # relocore
//!
//! Ownership-safe generic containers over a compile-time relocation
//! classifier, with type-erased iteration and graded callable capabilities.
//!
//! **Zero-overhead value plumbing for Rust.**
//!
//! ## Architecture
//!
//! `relocore` is built around one compile-time predicate: *can a value of
//! this type be moved by copying its bits and abandoning the source?* Types
//! that qualify carry the [`TriviallyRelocatable`] marker, derived
//! structurally from their fields or asserted by the author through an
//! `unsafe impl`. Everything above the classifier trades on that guarantee:
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Classification                                          |
//! |  - TriviallyRelocatable (marker + derive + detection)             |
//! |  - Present / Absent type-level capability flags                   |
//! |  - CallOnce / CallMut / Call graded callables                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Containers                                              |
//! |  - Maybe (optional value, take/clear/unchecked extraction)        |
//! |  - Slice / SliceMut (bounds-checked contiguous views)             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Iteration                                               |
//! |  - Iter / DoubleEnded / ExactSize pull protocol                   |
//! |  - SizedIter (function-pointer erasure, relocatable by memcpy)    |
//! |  - Enumerate, Filter adaptors                                     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Features
//!
//! - **No double-free, no use-after-move**: relocation is a byte copy whose
//!   source is never destroyed, enforced by ownership and the marker.
//! - **Zero Runtime Overhead**: classification and capability checks happen
//!   at compile time; erased dispatch is four bare function pointers.
//! - **Fail-fast or checked, caller's choice**: index operators terminate
//!   the process on misuse, `get`/`take` return [`Maybe`] instead.
//!
//! ## Quick Start
//!
//! ```
//! use relocore::prelude::*;
//!
//! let primes = [2u32, 3, 5, 7];
//! let view = Slice::from(&primes[..]);
//!
//! // Checked access returns Maybe; the index operator panics instead.
//! assert_eq!(view.get(2), some(&5));
//! assert!(view.get(9).is_none());
//!
//! // Erase the concrete iterator; the box stays movable by byte copy.
//! let mut boxed = SizedIter::<&u32, 64, _, _>::erase_back_sized(view.iter());
//! assert_eq!(boxed.next(), some(&2));
//! assert_eq!(boxed.next_back(), some(&7));
//! assert_eq!(boxed.exact_size_hint(), 2);
//! ```

// Allow `::relocore` to work inside the crate itself
extern crate self as relocore;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Classification (no dependencies)
// =============================================================================
pub mod callable;
pub mod classify;

// =============================================================================
// Layer 1: Containers
// =============================================================================
pub mod maybe;
pub mod slice;

// =============================================================================
// Layer 2: Iteration
// =============================================================================
pub mod iter;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use callable::{Call, CallMut, CallOnce};
pub use classify::{Absent, Bool, Present, TriviallyRelocatable, True};
pub use iter::{DoubleEnded, Enumerate, ExactSize, Filter, Iter, SizedIter};
pub use maybe::{Maybe, none, some};
pub use slice::{Slice, SliceMut};

#[cfg(feature = "boxed")]
pub use callable::boxed::{FnBox, FnMutBox, FnOnceBox};

// Re-export the structural-derivation proc-macro
pub use macros::TriviallyRelocatable;

/// Common items for working with the containers.
pub mod prelude {
    #[cfg(feature = "boxed")]
    pub use crate::callable::boxed::{FnBox, FnMutBox, FnOnceBox};
    pub use crate::callable::{Call, CallMut, CallOnce};
    pub use crate::classify::{TriviallyRelocatable, True};
    pub use crate::iter::{DoubleEnded, ExactSize, Iter, SizedIter};
    pub use crate::maybe::{Maybe, none, some};
    pub use crate::slice::{Slice, SliceMut};
    pub use macros::TriviallyRelocatable;
    // Note: is_trivially_relocatable! is #[macro_export] so it's at crate root
}
