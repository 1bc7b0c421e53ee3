//! Compile-time classification: relocation triviality and capability flags.
//!
//! Everything in this layer is metadata attached to *types*, not values; no
//! runtime state exists here. The relocation marker feeds the erased
//! containers (which may only store relocatable payloads), and the type-level
//! booleans carry per-container capability flags.

pub mod bool;
pub mod detect;
pub mod relocate;

pub use self::bool::{Absent, Bool, Present, True};
pub use self::detect::Detect;
pub use self::relocate::TriviallyRelocatable;
