//! `GhostToken` - the permission that gates every box in a slice.
//!
//! A token is zero-sized and branded with a fresh lifetime by
//! [`GhostToken::new`]. Every [`BoxCell`](crate::BoxCell) created under that
//! brand can only be read through `&GhostToken<'brand>` and only be filled or
//! opened through `&mut GhostToken<'brand>`.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is **not** `Copy`/`Clone`. Since every mutation of a
//! box takes `&mut GhostToken<'brand>`, Rust's borrow rules guarantee that at
//! most one box of a brand is being mutated at any time, even when several
//! shared references (for example the result of
//! [`BoxSlice::find_all`](crate::BoxSlice::find_all)) alias the same slot.

/// Invariant lifetime marker used for branding.
pub mod invariant;
/// Macro for opening token scopes.
pub mod macros;

pub use invariant::InvariantLifetime;

/// A zero-sized, linear capability for one brand of box cells.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a fresh brand and runs `f` with its token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxslice::{BoxSlice, GhostToken};
    ///
    /// let opened = GhostToken::new(|mut token| {
    ///     let boxes = BoxSlice::with_length(2);
    ///     boxes.get(0).unwrap().fill(&mut token, 3.5);
    ///     boxes.get(0).unwrap().open(&mut token);
    ///     boxes.count_opened(&token)
    /// });
    /// assert_eq!(opened, 1);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }

    /// Opens a nested, independent brand from inside an existing scope.
    ///
    /// Cells of the outer brand are unreachable through the inner token.
    #[inline(always)]
    pub fn with_scoped<F, R>(&self, f: F) -> R
    where
        F: for<'sub> FnOnce(GhostToken<'sub>) -> R,
    {
        Self::new(f)
    }
}
