//! Procedural macros for the relocore relocation classification system.
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(TriviallyRelocatable)]` | struct/enum | Structural relocation classification |
//!
//! The derive encodes the structural rule of the classifier: a value may be
//! relocated by a raw byte copy whenever every one of its constituent fields
//! may be. Opting in for a type whose fields do *not* all qualify requires a
//! manual `unsafe impl`, which is the author-asserted escape hatch.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod relocate;

/// Derive macro to implement `TriviallyRelocatable` structurally.
///
/// Emits an `unsafe impl` bounded on every field type of the struct or enum
/// also being `TriviallyRelocatable`, recursively pushing the proof
/// obligation down to the leaves.
///
/// # Usage
/// ```ignore
/// use relocore::TriviallyRelocatable;
///
/// #[derive(TriviallyRelocatable)]
/// struct Cursor {
///     offset: usize,
///     line: u32,
/// }
///
/// // Generic types are bounded per field:
/// #[derive(TriviallyRelocatable)]
/// struct Pair<T> {
///     first: T,
///     second: T,
/// }
/// // expands to: unsafe impl<T> TriviallyRelocatable for Pair<T>
/// //             where T: TriviallyRelocatable {}
/// ```
///
/// Unions are rejected: the active field of a union is not knowable from its
/// declaration, so classification must be asserted manually.
#[proc_macro_derive(TriviallyRelocatable)]
pub fn derive_trivially_relocatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    relocate::expand_derive_trivially_relocatable(input).into()
}
