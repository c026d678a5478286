//! State transitions of a single box, bare and behind a token.

use boxslice::{BoxCell, BoxState, BoxSlice, GhostToken, ValueBox};

#[test]
fn test_fill_open_round_trip() {
    for value in [0.0, -0.0, 1.5, -2.0, f64::MAX, f64::MIN_POSITIVE, f64::INFINITY] {
        let mut b = ValueBox::default();
        b.fill(value);
        assert!(b.is_closed());
        assert_eq!(b.open().to_bits(), value.to_bits());
        assert!(b.is_opened());
    }
}

#[test]
fn test_transitions_from_either_state() {
    let mut b = ValueBox::new(1.0);
    b.fill(2.0);
    assert_eq!(b.state(), BoxState::Closed);
    b.open();
    b.open();
    assert_eq!(b.state(), BoxState::Opened);
    b.fill(3.0);
    assert_eq!(b.state(), BoxState::Closed);
}

#[test]
fn test_cell_open_twice_returns_same_value() {
    GhostToken::new(|mut token| {
        let cell = BoxCell::filled(42.0);
        assert_eq!(cell.open(&mut token), 42.0);
        assert_eq!(cell.open(&mut token), 42.0);
        assert!(cell.is_opened(&token));
    });
}

#[test]
fn test_fresh_slot_equals_filled_zero() {
    GhostToken::new(|mut token| {
        let boxes = BoxSlice::with_length(2);
        boxes.get(1).unwrap().fill(&mut token, 0.0);
        let fresh = *boxes.get(0).unwrap().borrow(&token);
        let filled = *boxes.get(1).unwrap().borrow(&token);
        assert_eq!(fresh, filled);
        assert_eq!(fresh, ValueBox::new(0.0));
    });
}
