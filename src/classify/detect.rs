//! Autoref-based trait detection machinery.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time detection of the relocation marker on concrete types.
//!
//! ## How it works
//!
//! 1. A fallback trait carries `const IS_TRIVIALLY_RELOCATABLE: bool = false`
//! 2. The fallback is implemented for `Detect<X>` for all X
//! 3. An inherent const `IS_TRIVIALLY_RELOCATABLE = true` exists for
//!    `Detect<X>` where `X: TriviallyRelocatable`
//!
//! When resolving `Detect::<Concrete>::IS_TRIVIALLY_RELOCATABLE`, the
//! compiler finds the inherent const (true) when the marker is implemented
//! and the trait const (false) otherwise.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`; there, use the
//! `TriviallyRelocatable` bound directly.

use core::marker::PhantomData;

use super::relocate::TriviallyRelocatable;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

// =============================================================================
// Marker Detection (generated)
// =============================================================================

/// Generate fallback trait + inherent const for a detectable trait.
macro_rules! impl_detect {
    ($Trait:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const [<IS_ $Trait:snake:upper>]: bool = false; }
            impl<T> [<$Trait Fallback>] for Detect<T> {}
            impl<T: $Trait> Detect<T> { pub const [<IS_ $Trait:snake:upper>]: bool = true; }
        }
    };
}

impl_detect!(TriviallyRelocatable);

/// Evaluate the relocation classifier for a concrete type, yielding a `bool`
/// usable in const contexts.
///
/// True when the type either carries a `TriviallyRelocatable` impl
/// (declared or derived), or has no drop glue at all: a type whose
/// destructor is compiler-trivial down to its leaves already moves by plain
/// bit copy, so it qualifies structurally without an impl.
///
/// # Usage
/// ```
/// use relocore::is_trivially_relocatable;
///
/// const _: () = assert!(is_trivially_relocatable!(u64));
/// const _: () = assert!(is_trivially_relocatable!((u8, char)));
///
/// struct Plain;
/// const _: () = assert!(is_trivially_relocatable!(Plain));
///
/// struct Guarded;
/// impl Drop for Guarded { fn drop(&mut self) {} }
/// assert!(!is_trivially_relocatable!(Guarded));
/// ```
#[macro_export]
macro_rules! is_trivially_relocatable {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::classify::detect::TriviallyRelocatableFallback as _;
        $crate::classify::detect::Detect::<$t>::IS_TRIVIALLY_RELOCATABLE
            || !::core::mem::needs_drop::<$t>()
    }};
}
