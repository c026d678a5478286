//! `GhostCell` - interior mutability gated by a branded token.
//!
//! A shared `&GhostCell<'brand, T>` can be handed out many times (slots of a
//! slice, matches of a search). Reading goes through `&GhostToken<'brand>`,
//! writing through `&mut GhostToken<'brand>`; the token's linearity is what
//! keeps those writes exclusive.

use core::cell::UnsafeCell;

use crate::token::InvariantLifetime;
use crate::GhostToken;

/// A cell whose contents are only reachable with a token of the same brand.
#[repr(transparent)]
pub struct GhostCell<'brand, T: ?Sized> {
    _brand: InvariantLifetime<'brand>,
    value: UnsafeCell<T>,
}

impl<'brand, T> GhostCell<'brand, T> {
    /// Creates a new cell holding `value`.
    pub const fn new(value: T) -> Self {
        Self {
            _brand: InvariantLifetime::new(),
            value: UnsafeCell::new(value),
        }
    }
}

impl<'brand, T: ?Sized> GhostCell<'brand, T> {
    /// Borrows the contents immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a T {
        // SAFETY: safe code cannot hold `&mut T` while `&GhostToken<'brand>` is live.
        unsafe { &*self.value.get() }
    }

    /// Borrows the contents mutably.
    #[inline(always)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut T {
        // SAFETY: `&mut GhostToken<'brand>` is unique, so no other borrow of any
        // cell of this brand can be live.
        unsafe { &mut *self.value.get() }
    }
}

impl<T: Default> Default for GhostCell<'_, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// SAFETY: moving the cell does not grant access to its contents; access is token-gated.
unsafe impl<'brand, T: ?Sized + Send> Send for GhostCell<'brand, T> {}
// SAFETY: the only shared access is `&T` behind `&GhostToken`, thread-safe iff `T: Sync`.
unsafe impl<'brand, T: ?Sized + Send + Sync> Sync for GhostCell<'brand, T> {}
