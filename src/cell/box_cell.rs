//! `BoxCell` - one token-gated slot of a [`BoxSlice`](crate::BoxSlice).

use crate::cell::{BoxState, GhostCell, ValueBox};
use crate::GhostToken;

/// A [`ValueBox`] stored in a [`GhostCell`].
///
/// Slots are handed out as shared references, so several references may point
/// at the same box. Filling and opening take `&mut GhostToken<'brand>`.
pub type BoxCell<'brand> = GhostCell<'brand, ValueBox>;

impl<'brand> GhostCell<'brand, ValueBox> {
    /// Creates a closed slot holding `value`.
    #[inline]
    pub const fn filled(value: f64) -> Self {
        Self::new(ValueBox::new(value))
    }

    /// Stores `value` and closes the box.
    #[inline]
    pub fn fill(&self, token: &mut GhostToken<'brand>, value: f64) {
        self.borrow_mut(token).fill(value);
    }

    /// Opens the box and returns its value.
    #[inline]
    pub fn open(&self, token: &mut GhostToken<'brand>) -> f64 {
        self.borrow_mut(token).open()
    }

    /// Returns `true` if the value was read since the last fill.
    #[inline]
    pub fn is_opened(&self, token: &GhostToken<'brand>) -> bool {
        self.borrow(token).is_opened()
    }

    /// Returns `true` if the value was not read since the last fill.
    #[inline]
    pub fn is_closed(&self, token: &GhostToken<'brand>) -> bool {
        self.borrow(token).is_closed()
    }

    /// Current state of the read flag.
    #[inline]
    pub fn state(&self, token: &GhostToken<'brand>) -> BoxState {
        self.borrow(token).state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_then_open_round_trips() {
        GhostToken::new(|mut token| {
            let slot = BoxCell::filled(8.0);
            assert!(slot.is_closed(&token));
            slot.fill(&mut token, -1.5);
            assert_eq!(slot.open(&mut token), -1.5);
            assert_eq!(slot.state(&token), BoxState::Opened);
        });
    }

    #[test]
    fn alias_fill_recloses_box() {
        GhostToken::new(|mut token| {
            let slot = BoxCell::default();
            let alias = &slot;
            slot.open(&mut token);
            alias.fill(&mut token, 3.0);
            assert!(slot.is_closed(&token));
        });
    }
}
