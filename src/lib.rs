//! # `boxslice` - boxes that remember whether they were read
//!
//! A [`ValueBox`] holds an `f64` and a flag telling whether the value was
//! *opened* (read) since it was last *filled* (written). A [`BoxSlice`] owns a
//! fixed number of boxes, each in its own heap allocation, and answers bulk
//! questions about them: are they all closed, how many are opened, which is the
//! first (or every) box matching a predicate.
//!
//! ## Ownership model
//!
//! Slots are [`BoxCell`]s: boxes stored in a [`GhostCell`] and gated by a
//! branded, zero-sized [`GhostToken`]. The slice hands out shared references
//! to its slots, so a search result can alias the slots it matched, while every
//! fill or open still needs `&mut GhostToken<'brand>`. Aliasing is free;
//! mutation stays exclusive.
//!
//! ## Searching mutates
//!
//! Predicates are `FnMut(&mut ValueBox) -> bool` and may change the box they
//! inspect. The reference predicates [`predicate::is_negative`] and
//! [`predicate::is_positive`] open each box they test, so a search marks the
//! boxes it visited as opened, in index order.
//!
//! ## Programming errors
//!
//! Creating over a populated slice panics. Out-of-range indices and failed
//! searches are not errors; they return `None` (or an empty `Vec`).
//!
//! ## Example
//!
//! ```rust
//! use boxslice::{predicate::is_negative, BoxSlice, GhostToken};
//!
//! GhostToken::new(|mut token| {
//!     let boxes = BoxSlice::with_length(4);
//!     for (slot, value) in boxes.iter().zip([0.0, 2.0, -2.0, 1.0]) {
//!         slot.fill(&mut token, value);
//!     }
//!     assert_eq!(boxes.count_closed(&token), 4);
//!
//!     for found in boxes.find_all(&mut token, is_negative) {
//!         found.fill(&mut token, 0.0);
//!     }
//!     assert_eq!(boxes.count_closed(&token), 1);
//!     assert_eq!(boxes.open_all(&mut token), vec![0.0, 2.0, 0.0, 1.0]);
//! });
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod cell;
pub mod collections;
pub mod predicate;
pub mod token;

pub use cell::{BoxCell, BoxState, GhostCell, ValueBox};
pub use collections::{BoxCounts, BoxSlice};
pub use token::GhostToken;

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // The brand adds nothing to a slot.
    assert!(mem::size_of::<BoxCell<'static>>() == mem::size_of::<ValueBox>());
    assert!(mem::align_of::<BoxCell<'static>>() == mem::align_of::<ValueBox>());

    // A box is one `f64` plus its flag, padded to the `f64` alignment.
    assert!(mem::size_of::<ValueBox>() == 2 * mem::size_of::<f64>());

    // A slice is exactly its owning `Vec` of slot pointers.
    assert!(mem::size_of::<BoxSlice<'static>>() == mem::size_of::<Vec<Box<ValueBox>>>());
};
