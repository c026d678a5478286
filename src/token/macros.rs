/// Opens a token scope with slightly lighter syntax than [`GhostToken::new`].
///
/// ```rust
/// use boxslice::{scope, BoxSlice};
///
/// let closed = scope!(|token| {
///     let boxes = BoxSlice::with_length(3);
///     boxes.count_closed(&token)
/// });
/// assert_eq!(closed, 3);
/// ```
///
/// A nested brand can be opened from an existing token:
///
/// ```rust
/// use boxslice::scope;
///
/// scope!(|outer| {
///     let inner = scope!(|sub| in outer { 7 });
///     assert_eq!(inner, 7);
/// });
/// ```
///
/// [`GhostToken::new`]: crate::GhostToken::new
#[macro_export]
macro_rules! scope {
    (|mut $token:ident| $body:block) => {
        $crate::GhostToken::new(|mut $token| $body)
    };
    (|$sub_token:ident| in $token:ident $body:block) => {
        $token.with_scoped(|$sub_token| $body)
    };
    (|$token:ident| $body:block) => {
        $crate::GhostToken::new(|$token| $body)
    };
}

#[cfg(test)]
mod tests {
    use crate::{BoxSlice, GhostToken};

    #[test]
    fn scope_returns_body_value() {
        let res = scope!(|token| {
            let _ = &token;
            10
        });
        assert_eq!(res, 10);
    }

    #[test]
    fn scope_mut_token_can_fill() {
        let value = scope!(|mut token| {
            let boxes = BoxSlice::with_length(1);
            let slot = boxes.get(0).unwrap();
            slot.fill(&mut token, 4.0);
            slot.open(&mut token)
        });
        assert_eq!(value, 4.0);
    }

    #[test]
    fn nested_scope_is_independent() {
        GhostToken::new(|token| {
            let res = scope!(|sub| in token {
                let _ = &sub;
                20
            });
            assert_eq!(res, 20);
        });
    }
}
