//! Tests for the Maybe optional-value container.
//!
//! State machine: `{None, Some(T)}`, exactly one state at any time; the
//! held value is destroyed exactly once, whether by extraction or by drop.

use std::sync::atomic::{AtomicUsize, Ordering};

use relocore::maybe::{Maybe, none, some};

/// Bumps a counter when dropped.
struct Tally<'a>(&'a AtomicUsize);

impl Drop for Tally<'_> {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Construction and queries
// =============================================================================

#[test]
fn test_some_none_queries() {
    let filled = Maybe::some(7u32);
    assert!(filled.is_some());
    assert!(!filled.is_none());

    let empty: Maybe<u32> = Maybe::none();
    assert!(empty.is_none());
    assert!(!empty.is_some());
}

#[test]
fn test_free_function_constructors() {
    assert_eq!(some(3i64), Maybe::Some(3i64));
    assert_eq!(none::<i64>(), Maybe::None);
}

#[test]
fn test_with_default() {
    assert_eq!(Maybe::<u32>::with_default(), some(0u32));
    assert_eq!(Maybe::<String>::with_default(), some(String::new()));
}

#[test]
fn test_match_on_state() {
    let described = match some(12u8) {
        Maybe::Some(v) => v + 1,
        Maybe::None => 0,
    };
    assert_eq!(described, 13);
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn test_unwrap_roundtrip() {
    assert_eq!(some(41).unwrap(), 41);
    assert_eq!(some("text").unwrap(), "text");
}

#[test]
#[should_panic(expected = "called `unwrap()` on an empty `Maybe`")]
fn test_unwrap_empty_panics() {
    none::<u32>().unwrap();
}

#[test]
#[should_panic(expected = "queue head missing")]
fn test_expect_empty_panics_with_message() {
    none::<u32>().expect("queue head missing");
}

#[test]
fn test_expect_present() {
    assert_eq!(some(5).expect("present"), 5);
}

#[test]
fn test_unwrap_unchecked() {
    let filled = some(9u16);
    // Presence proven by the line above.
    assert_eq!(unsafe { filled.unwrap_unchecked() }, 9);
}

#[test]
fn test_unwrap_or() {
    assert_eq!(some(2).unwrap_or(8), 2);
    assert_eq!(none::<i32>().unwrap_or(8), 8);
    assert_eq!(none::<i32>().unwrap_or_default(), 0);
}

// =============================================================================
// take / clear
// =============================================================================

#[test]
fn test_take_moves_value_out() {
    let mut slot = some(10u32);
    let taken = slot.take();
    assert_eq!(taken, some(10));
    assert!(slot.is_none());
}

#[test]
fn test_take_empty_is_noop() {
    let mut slot: Maybe<u32> = none();
    assert_eq!(slot.take(), Maybe::None);
    assert!(slot.is_none());
}

#[test]
fn test_take_then_refill() {
    let mut slot = some(1u8);
    let _ = slot.take();
    slot = some(2);
    assert_eq!(slot.take(), some(2));
}

#[test]
fn test_clear_destroys_value() {
    let drops = AtomicUsize::new(0);
    let mut slot = some(Tally(&drops));
    slot.clear();
    assert!(slot.is_none());
    assert_eq!(drops.load(Ordering::SeqCst), 1);
    // Dropping the now-empty container must not touch the counter again.
    drop(slot);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_clear_empty_is_noop() {
    let mut slot: Maybe<Tally<'_>> = none();
    slot.clear();
    assert!(slot.is_none());
}

// =============================================================================
// Destruction discipline
// =============================================================================

#[test]
fn test_drop_runs_exactly_once() {
    let drops = AtomicUsize::new(0);
    {
        let _slot = some(Tally(&drops));
    }
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_taken_value_drops_once() {
    let drops = AtomicUsize::new(0);
    let mut slot = some(Tally(&drops));
    let taken = slot.take();
    assert_eq!(drops.load(Ordering::SeqCst), 0);
    drop(taken);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
    drop(slot);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_empty_drop_runs_nothing() {
    let drops = AtomicUsize::new(0);
    {
        let _slot: Maybe<Tally<'_>> = none();
    }
    assert_eq!(drops.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Projections and transforms
// =============================================================================

#[test]
fn test_as_ref_as_mut() {
    let mut slot = some(30u32);
    assert_eq!(slot.as_ref(), some(&30));
    if let Maybe::Some(v) = slot.as_mut() {
        *v = 31;
    }
    assert_eq!(slot, some(31));
    assert_eq!(none::<u32>().as_ref(), Maybe::None);
}

#[test]
fn test_map() {
    assert_eq!(some(4u32).map(|v: u32| v * 3), some(12));
    assert_eq!(none::<u32>().map(|v: u32| v * 3), Maybe::None);
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_never_value_compaction() {
    // Payloads with a reserved invalid pattern absorb the discriminant.
    assert_eq!(size_of::<Maybe<&u32>>(), size_of::<&u32>());
    assert_eq!(
        size_of::<Maybe<core::ptr::NonNull<u8>>>(),
        size_of::<core::ptr::NonNull<u8>>()
    );
}
