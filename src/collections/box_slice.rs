//! `BoxSlice` - a fixed-length collection of individually owned boxes.
//!
//! Design:
//! - The slice owns a `Vec<Box<BoxCell<'brand>>>`: one heap allocation per
//!   slot, so every slot has its own identity and address for the lifetime of
//!   the slice, and no two slots alias.
//! - Structural changes (`create`, `destroy`) go through `&mut self`.
//! - Box access is token-gated. Shared reads take `&GhostToken<'brand>`; fills,
//!   opens, and searches take `&mut GhostToken<'brand>`.
//!
//! Because slots are handed out as `&BoxCell`, a search result aliases the
//! slots it matched, and filling through the result is visible through
//! [`BoxSlice::get`].

use core::fmt;

use crate::cell::{BoxCell, ValueBox};
use crate::collections::BoxCounts;
use crate::trace::{debug_event, trace_event};
use crate::GhostToken;

/// A fixed-length slice of token-gated boxes.
pub struct BoxSlice<'brand> {
    // One allocation per slot keeps slot addresses distinct and stable.
    #[allow(clippy::vec_box)]
    boxes: Vec<Box<BoxCell<'brand>>>,
}

impl<'brand> BoxSlice<'brand> {
    /// Creates an empty slice with no backing allocation.
    pub const fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Creates a slice of `length` closed, zero-valued boxes.
    pub fn with_length(length: usize) -> Self {
        let mut slice = Self::new();
        slice.create(length);
        slice
    }

    /// Allocates `length` independently owned boxes, each zero-valued and closed.
    ///
    /// # Panics
    ///
    /// Panics if the slice already holds boxes. Creating over a populated
    /// slice is a double-initialization bug; call [`destroy`](Self::destroy)
    /// first.
    pub fn create(&mut self, length: usize) {
        assert!(
            self.boxes.is_empty(),
            "BoxSlice::create on a populated slice (length {})",
            self.boxes.len()
        );

        let mut boxes = Vec::with_capacity(length);
        boxes.extend((0..length).map(|_| Box::new(BoxCell::default())));
        self.boxes = boxes;

        debug_event!(length, "created box slice");
    }

    /// Releases every box, then the backing buffer. The slice is empty afterwards
    /// and may be created again.
    ///
    /// Destroying an empty slice does nothing.
    pub fn destroy(&mut self) {
        debug_event!(length = self.boxes.len(), "destroying box slice");
        // Vec drops its elements front to back before freeing the buffer.
        drop(core::mem::take(&mut self.boxes));
    }

    /// Number of boxes.
    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` if the slice holds no boxes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Returns the box at `index`, or `None` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&BoxCell<'brand>> {
        self.boxes.get(index).map(|slot| &**slot)
    }

    /// Iterates over the boxes in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &BoxCell<'brand>> + DoubleEndedIterator {
        self.boxes.iter().map(|slot| &**slot)
    }

    /// Returns `true` if no box is opened. Vacuously true for an empty slice.
    pub fn all_closed(&self, token: &GhostToken<'brand>) -> bool {
        self.iter().all(|slot| slot.is_closed(token))
    }

    /// Returns `true` if every box is opened. Vacuously true for an empty slice.
    pub fn all_opened(&self, token: &GhostToken<'brand>) -> bool {
        self.iter().all(|slot| slot.is_opened(token))
    }

    /// Number of closed boxes.
    pub fn count_closed(&self, token: &GhostToken<'brand>) -> usize {
        self.iter().filter(|slot| slot.is_closed(token)).count()
    }

    /// Number of opened boxes.
    pub fn count_opened(&self, token: &GhostToken<'brand>) -> usize {
        self.iter().filter(|slot| slot.is_opened(token)).count()
    }

    /// Closed and opened counts in a single pass.
    pub fn counts(&self, token: &GhostToken<'brand>) -> BoxCounts {
        let opened = self.count_opened(token);
        BoxCounts {
            length: self.len(),
            closed: self.len() - opened,
            opened,
        }
    }

    /// Returns the first box, in index order, for which `predicate` returns `true`.
    ///
    /// The predicate gets each box mutably and may change it; the reference
    /// predicates open every box they test. Testing stops at the first match,
    /// so boxes after it are left untouched.
    pub fn find_first<'a, F>(
        &'a self,
        token: &mut GhostToken<'brand>,
        mut predicate: F,
    ) -> Option<&'a BoxCell<'brand>>
    where
        F: FnMut(&mut ValueBox) -> bool,
    {
        let found = self.iter().find(|slot| predicate(slot.borrow_mut(token)));
        trace_event!(length = self.len(), found = found.is_some(), "find_first scan");
        found
    }

    /// Tests every box in index order and returns the matches in the order found.
    ///
    /// The returned references point at the slice's own boxes: filling a match
    /// fills the box in the slice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxslice::{predicate::is_negative, BoxSlice, GhostToken};
    ///
    /// GhostToken::new(|mut token| {
    ///     let boxes = BoxSlice::with_length(3);
    ///     boxes.get(1).unwrap().fill(&mut token, -4.0);
    ///
    ///     let matches = boxes.find_all(&mut token, is_negative);
    ///     assert_eq!(matches.len(), 1);
    ///     matches[0].fill(&mut token, 0.0);
    ///
    ///     assert_eq!(boxes.get(1).unwrap().open(&mut token), 0.0);
    /// });
    /// ```
    pub fn find_all<'a, F>(
        &'a self,
        token: &mut GhostToken<'brand>,
        predicate: F,
    ) -> Vec<&'a BoxCell<'brand>>
    where
        F: FnMut(&mut ValueBox) -> bool,
    {
        let mut matches = Vec::new();
        self.find_all_into(token, predicate, &mut matches);
        matches
    }

    /// Like [`find_all`](Self::find_all), writing into a caller-owned buffer.
    ///
    /// `matches` is cleared and then grown to hold at least `len()` entries, so
    /// it can never be too small. Returns the number of matches; every entry in
    /// `matches` afterwards is a match, in index order.
    pub fn find_all_into<'a, F>(
        &'a self,
        token: &mut GhostToken<'brand>,
        mut predicate: F,
        matches: &mut Vec<&'a BoxCell<'brand>>,
    ) -> usize
    where
        F: FnMut(&mut ValueBox) -> bool,
    {
        matches.clear();
        matches.reserve(self.len());

        for slot in self.iter() {
            if predicate(slot.borrow_mut(token)) {
                matches.push(slot);
            }
        }

        trace_event!(length = self.len(), matches = matches.len(), "find_all scan");
        matches.len()
    }

    /// Opens every box in index order and returns the values.
    pub fn open_all(&self, token: &mut GhostToken<'brand>) -> Vec<f64> {
        self.iter().map(|slot| slot.open(token)).collect()
    }
}

impl Default for BoxSlice<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoxSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Contents are token-gated; only the shape is printable.
        f.debug_struct("BoxSlice")
            .field("length", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{is_negative, is_positive};

    fn filled<'brand>(token: &mut GhostToken<'brand>, values: &[f64]) -> BoxSlice<'brand> {
        let slice = BoxSlice::with_length(values.len());
        for (slot, &value) in slice.iter().zip(values) {
            slot.fill(token, value);
        }
        slice
    }

    #[test]
    fn new_slice_is_empty_and_unallocated() {
        let slice = BoxSlice::new();
        assert!(slice.is_empty());
        assert_eq!(slice.boxes.capacity(), 0);
        assert!(slice.get(0).is_none());
    }

    #[test]
    fn create_zero_fills_every_slot() {
        GhostToken::new(|mut token| {
            let slice = BoxSlice::with_length(5);
            assert_eq!(slice.len(), 5);
            assert!(slice.all_closed(&token));
            for slot in slice.iter() {
                assert_eq!(slot.open(&mut token), 0.0);
            }
        });
    }

    #[test]
    #[should_panic(expected = "populated slice")]
    fn create_twice_panics() {
        let mut slice = BoxSlice::with_length(2);
        slice.create(3);
    }

    #[test]
    fn destroy_then_recreate() {
        let mut slice = BoxSlice::with_length(4);
        slice.destroy();
        assert_eq!(slice.len(), 0);
        assert_eq!(slice.boxes.capacity(), 0);
        slice.destroy();
        slice.create(2);
        assert_eq!(slice.len(), 2);
    }

    #[test]
    fn find_first_stops_at_first_match() {
        GhostToken::new(|mut token| {
            let slice = filled(&mut token, &[0.0, 3.0, -1.0, 5.0]);
            let hit = slice.find_first(&mut token, is_positive).unwrap();
            assert!(core::ptr::eq(hit, slice.get(1).unwrap()));
            assert_eq!(slice.count_opened(&token), 2);
            assert!(slice.get(2).unwrap().is_closed(&token));
            assert!(slice.get(3).unwrap().is_closed(&token));
        });
    }

    #[test]
    fn find_all_into_replaces_previous_contents() {
        GhostToken::new(|mut token| {
            let slice = filled(&mut token, &[-1.0, 2.0, -3.0]);
            let mut matches = Vec::new();
            assert_eq!(slice.find_all_into(&mut token, is_positive, &mut matches), 1);
            assert_eq!(slice.find_all_into(&mut token, is_negative, &mut matches), 2);
            assert_eq!(matches.len(), 2);
            assert!(matches.capacity() >= slice.len());
            assert!(core::ptr::eq(matches[0], slice.get(0).unwrap()));
            assert!(core::ptr::eq(matches[1], slice.get(2).unwrap()));
        });
    }

    #[test]
    fn default_is_an_empty_slice() {
        let slice = BoxSlice::default();
        assert!(slice.is_empty());
        assert_eq!(slice.boxes.capacity(), 0);
    }

    #[test]
    fn debug_prints_length_only() {
        let slice = BoxSlice::with_length(3);
        assert_eq!(format!("{slice:?}"), "BoxSlice { length: 3, .. }");
    }
}
