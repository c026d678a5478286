//! Reference predicates for [`BoxSlice::find_first`](crate::BoxSlice::find_first)
//! and [`BoxSlice::find_all`](crate::BoxSlice::find_all).
//!
//! Searches accept any `FnMut(&mut ValueBox) -> bool`. A predicate receives the
//! box mutably and may change it; both predicates here *open* every box they
//! test, whether or not it matches. A search therefore leaves a trail of opened
//! boxes behind it, in scan order.

use crate::cell::ValueBox;

/// Opens `b` and returns `true` if its value is below zero.
pub fn is_negative(b: &mut ValueBox) -> bool {
    b.open() < 0.0
}

/// Opens `b` and returns `true` if its value is above zero.
pub fn is_positive(b: &mut ValueBox) -> bool {
    b.open() > 0.0
}
