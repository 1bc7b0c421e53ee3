//! The pull-based iteration protocol.
//!
//! A concrete iterator exposes `next() -> Maybe<Item>`; the optional
//! capabilities (reverse consumption, an exactly-knowable remaining count)
//! are separate traits, so requiring one is a compile-time constraint
//! rather than a runtime branch.
//!
//! ## Exhaustion
//!
//! `next` returns [`Maybe::Some`] until the source is exhausted and
//! [`Maybe::None`] from then on: once an iterator has reported exhaustion,
//! every further `next` call must report it again. Iterators are not
//! required to be restartable.

pub mod enumerate;
pub mod filter;
pub mod sized_iter;

pub use self::enumerate::Enumerate;
pub use self::filter::Filter;
pub use self::sized_iter::SizedIter;

use crate::callable::CallMut;
use crate::maybe::Maybe;

// =============================================================================
// Protocol
// =============================================================================

/// The pull contract: ask for the next item, get a [`Maybe`].
pub trait Iter {
    type Item;

    /// Pull the next item, or [`Maybe::None`] once exhausted.
    fn next(&mut self) -> Maybe<Self::Item>;

    /// Consume the iterator, counting the items it yields.
    #[inline]
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut n = 0;
        while self.next().is_some() {
            n += 1;
        }
        n
    }

    /// Whether every yielded item satisfies the predicate.
    ///
    /// Stops pulling at the first failure.
    #[inline]
    fn all<P>(&mut self, mut pred: P) -> bool
    where
        Self: Sized,
        P: CallMut<(Self::Item,), Output = bool>,
    {
        loop {
            match self.next() {
                Maybe::Some(item) => {
                    if !pred.call_mut((item,)) {
                        return false;
                    }
                }
                Maybe::None => return true,
            }
        }
    }

    /// Whether any yielded item satisfies the predicate.
    ///
    /// Stops pulling at the first success.
    #[inline]
    fn any<P>(&mut self, mut pred: P) -> bool
    where
        Self: Sized,
        P: CallMut<(Self::Item,), Output = bool>,
    {
        loop {
            match self.next() {
                Maybe::Some(item) => {
                    if pred.call_mut((item,)) {
                        return true;
                    }
                }
                Maybe::None => return false,
            }
        }
    }

    /// Pair each item with its position, counting from zero.
    #[inline]
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Keep only the items the predicate accepts.
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: for<'a> CallMut<(&'a Self::Item,), Output = bool>,
    {
        Filter::new(self, pred)
    }
}

/// Capability: the iterator also supports consuming items from the back.
///
/// Front and back consumption share one pool of items; `next` and
/// `next_back` never yield the same element twice.
pub trait DoubleEnded: Iter {
    /// Pull the next item from the back, or [`Maybe::None`] once exhausted.
    fn next_back(&mut self) -> Maybe<Self::Item>;
}

/// Capability: the number of remaining items is exactly knowable in
/// constant time.
pub trait ExactSize: Iter {
    /// The exact number of items `next` will still yield.
    fn exact_size_hint(&self) -> usize;
}
