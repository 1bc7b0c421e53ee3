//! Property-based tests.
//!
//! Invariant checks over generated operation sequences and indices.

use proptest::collection::vec;
use proptest::prelude::*;

use relocore::maybe::Maybe;
use relocore::slice::Slice;

// =============================================================================
// Operation model
// =============================================================================

/// One mutation of an optional-value container.
#[derive(Debug, Clone)]
enum Op {
    Fill(u32),
    Take,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u32>().prop_map(Op::Fill),
        Just(Op::Take),
        Just(Op::Clear),
    ]
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// After any operation sequence, `is_some` reflects exactly whether a
    /// value is held, and `take` on an empty container is a no-op
    /// returning empty.
    #[test]
    fn maybe_state_tracks_operations(ops in vec(op_strategy(), 0..64)) {
        let mut subject: Maybe<u32> = Maybe::none();
        let mut model: Option<u32> = None;

        for op in ops {
            match op {
                Op::Fill(v) => {
                    subject = Maybe::some(v);
                    model = Some(v);
                }
                Op::Take => {
                    let taken = subject.take();
                    let expected = model.take();
                    prop_assert_eq!(taken.is_some(), expected.is_some());
                    if let (Maybe::Some(a), Some(b)) = (taken, expected) {
                        prop_assert_eq!(a, b);
                    }
                    prop_assert!(subject.is_none());
                }
                Op::Clear => {
                    subject.clear();
                    model = None;
                }
            }
            prop_assert_eq!(subject.is_some(), model.is_some());
            prop_assert_eq!(subject.is_none(), model.is_none());
        }

        // Emptied containers stay inert under take.
        subject.clear();
        prop_assert_eq!(subject.take(), Maybe::None);
        prop_assert!(subject.is_none());
    }

    /// Unwrapping returns exactly the stored value.
    #[test]
    fn maybe_unwrap_roundtrip(v in any::<u32>()) {
        prop_assert_eq!(Maybe::some(v).unwrap(), v);
    }

    /// `get` answers for every index: a reference inside the bounds,
    /// nothing outside, probed well past the end.
    #[test]
    fn slice_get_matches_bounds(data in vec(any::<u32>(), 0..32), probe in 0usize..96) {
        let view = Slice::from(&data[..]);
        prop_assert_eq!(view.len(), data.len());

        let got = view.get(probe);
        if probe < data.len() {
            prop_assert_eq!(got, Maybe::Some(&data[probe]));
        } else {
            prop_assert_eq!(got, Maybe::None);
        }
    }

    /// Iteration yields the viewed elements in order, then stays exhausted.
    #[test]
    fn slice_iteration_matches_source(data in vec(any::<u32>(), 0..32)) {
        use relocore::iter::Iter;

        let view = Slice::from(&data[..]);
        let mut iter = view.iter();
        let mut seen = Vec::new();
        while let Maybe::Some(v) = iter.next() {
            seen.push(*v);
        }
        prop_assert_eq!(&seen, &data);
        prop_assert_eq!(iter.next(), Maybe::None);
    }
}
