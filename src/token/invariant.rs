use core::marker::PhantomData;

/// A marker that is invariant in its lifetime parameter `'id`.
///
/// Brands must not shrink or grow through subtyping, otherwise two slices
/// opened under different tokens could be unified under one brand.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new invariant lifetime marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
