//! The optional-value container.
//!
//! [`Maybe`] holds zero or one value of `T`, with explicit move-out
//! (`take`), destroy-in-place (`clear`), and checked/unchecked extraction.
//! Extraction that cannot be honored is a programmer-logic violation and
//! terminates the process; callers that expect absence branch on the
//! checked accessors instead.
//!
//! The presence discriminant shares the payload's storage whenever the
//! payload type has a statically invalid bit pattern to spare (references,
//! `NonNull`, the erased containers' function pointers), so `Maybe<&T>` is
//! the size of a bare pointer. This is a layout compaction only; the state
//! machine is identical for every payload type.

use crate::callable::CallOnce;
use crate::classify::TriviallyRelocatable;

/// A container holding either one value of `T` or nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Holding no value.
    None,
    /// Holding a value.
    Some(T),
}

/// Construct a [`Maybe`] holding the given value.
#[inline]
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// Construct a [`Maybe`] holding no value.
#[inline]
pub fn none<T>() -> Maybe<T> {
    Maybe::None
}

impl<T> Maybe<T> {
    /// Construct a `Maybe` holding the given value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// Construct a `Maybe` holding no value.
    #[inline]
    pub const fn none() -> Self {
        Maybe::None
    }

    /// Construct a `Maybe` holding the default value of `T`.
    #[inline]
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Maybe::Some(T::default())
    }

    /// Returns whether a value is currently held.
    ///
    /// If so, it can be extracted with [`unwrap`](Self::unwrap) or
    /// [`expect`](Self::expect), or moved out with [`take`](Self::take).
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns whether the container is currently empty.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Extract the held value, panicking with `msg` when empty.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => panic!("{}", msg),
        }
    }

    /// Extract the held value, panicking when empty.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => panic!("called `unwrap()` on an empty `Maybe`"),
        }
    }

    /// Extract the held value without checking for presence.
    ///
    /// # Safety
    ///
    /// The container must hold a value. Calling this on an empty `Maybe` is
    /// undefined behavior; this exists for call sites that have already
    /// proven presence and cannot afford the branch.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Extract the held value, or `fallback` when empty.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback,
        }
    }

    /// Extract the held value, or the default value of `T` when empty.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or(T::default())
    }

    /// Move the held value out, leaving the container empty.
    ///
    /// Returns a new `Maybe` holding whatever this one held; an empty
    /// container is left unchanged and returns empty. The state transition
    /// is a single replacement, so no intermediate state is observable.
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        core::mem::replace(self, Maybe::None)
    }

    /// Destroy the held value, if any, leaving the container empty.
    #[inline]
    pub fn clear(&mut self) {
        *self = Maybe::None;
    }

    /// Project to a `Maybe` of a shared reference to the held value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Project to a `Maybe` of a mutable reference to the held value.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Transform the held value with a single-call callable.
    #[inline]
    pub fn map<F>(self, op: F) -> Maybe<F::Output>
    where
        F: CallOnce<(T,)>,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(op.call_once((value,))),
            Maybe::None => Maybe::None,
        }
    }
}

// Presence plus a relocatable payload relocates as one unit.
unsafe impl<T: TriviallyRelocatable> TriviallyRelocatable for Maybe<T> {}
