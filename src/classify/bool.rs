//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Capability flags on erased containers are carried as type parameters
//! bounded by [`Bool`] rather than as runtime fields, so that a missing
//! capability is a missing method, not a branch.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (general type selector)
    type If<Then, Else>;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
}

/// Marker satisfied only by [`Present`].
///
/// Used as a method gate: `where Flag: True` makes an operation available
/// exactly when the capability flag was fixed to `Present` at construction.
pub trait True: Bool {}

impl True for Present {}
