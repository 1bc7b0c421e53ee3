//! Graded callable capabilities.
//!
//! A callable offers one of three invocation guarantees, forming a strict
//! subtyping lattice:
//!
//! ```text
//! Call  ⊆  CallMut  ⊆  CallOnce
//! (repeatable-const) (repeatable-mutating) (single-call)
//! ```
//!
//! The supertrait chain *is* the lattice: anything graded [`Call`] is
//! accepted wherever [`CallMut`] or [`CallOnce`] is required, never the
//! reverse. Generic code should demand the weakest grade it can live with.
//!
//! Blanket impls below classify every closure and fn item at its strongest
//! grade automatically, for argument tuples of up to six elements.
//!
//! A single-call-only callable is rejected at compile time where a
//! repeatable grade is required:
//!
//! ```compile_fail
//! use relocore::callable::CallMut;
//!
//! fn run_twice<F: CallMut<(), Output = ()>>(mut f: F) {
//!     f.call_mut(());
//!     f.call_mut(());
//! }
//!
//! let s = String::from("consumed");
//! run_twice(move || drop(s));
//! ```

#[cfg(feature = "boxed")]
pub mod boxed;

// =============================================================================
// Capability Grades
// =============================================================================

/// Single-call grade: invocable exactly once, consuming the callable.
pub trait CallOnce<Args> {
    type Output;

    fn call_once(self, args: Args) -> Self::Output;
}

/// Repeatable-mutating grade: invocable any number of times through a
/// mutable reference. Implies [`CallOnce`].
pub trait CallMut<Args>: CallOnce<Args> {
    fn call_mut(&mut self, args: Args) -> Self::Output;
}

/// Repeatable-const grade: invocable any number of times through a shared
/// reference, without observable mutation. Implies [`CallMut`].
pub trait Call<Args>: CallMut<Args> {
    fn call(&self, args: Args) -> Self::Output;
}

// =============================================================================
// Classification of language callables
// =============================================================================

macro_rules! impl_call_grades {
    ($(($A:ident, $a:ident)),*) => {
        impl<Func, R $(, $A)*> CallOnce<($($A,)*)> for Func
        where
            Func: FnOnce($($A),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn call_once(self, ($($a,)*): ($($A,)*)) -> R {
                self($($a),*)
            }
        }

        impl<Func, R $(, $A)*> CallMut<($($A,)*)> for Func
        where
            Func: FnMut($($A),*) -> R,
        {
            #[inline(always)]
            fn call_mut(&mut self, ($($a,)*): ($($A,)*)) -> R {
                self($($a),*)
            }
        }

        impl<Func, R $(, $A)*> Call<($($A,)*)> for Func
        where
            Func: Fn($($A),*) -> R,
        {
            #[inline(always)]
            fn call(&self, ($($a,)*): ($($A,)*)) -> R {
                self($($a),*)
            }
        }
    };
}

impl_call_grades!();
impl_call_grades!((A0, a0));
impl_call_grades!((A0, a0), (A1, a1));
impl_call_grades!((A0, a0), (A1, a1), (A2, a2));
impl_call_grades!((A0, a0), (A1, a1), (A2, a2), (A3, a3));
impl_call_grades!((A0, a0), (A1, a1), (A2, a2), (A3, a3), (A4, a4));
impl_call_grades!((A0, a0), (A1, a1), (A2, a2), (A3, a3), (A4, a4), (A5, a5));
