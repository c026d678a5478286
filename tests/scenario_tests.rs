//! The four-box walkthrough: fill, search with an opening predicate, refill, open.

use boxslice::predicate::is_negative;
use boxslice::{BoxCounts, BoxSlice, GhostToken};

#[test]
fn test_negative_refill_scenario() {
    GhostToken::new(|mut token| {
        let mut boxes = BoxSlice::new();
        boxes.create(4);
        for (index, value) in [0.0, 2.0, -2.0, 1.0].into_iter().enumerate() {
            boxes.get(index).unwrap().fill(&mut token, value);
        }
        assert_eq!(boxes.count_closed(&token), 4);
        assert_eq!(boxes.count_opened(&token), 0);

        let mut matches = Vec::with_capacity(4);
        let found = boxes.find_all_into(&mut token, is_negative, &mut matches);
        assert_eq!(found, 1);
        assert!(std::ptr::eq(matches[0], boxes.get(2).unwrap()));

        // Every tested box was opened, matched or not.
        assert_eq!(boxes.count_opened(&token), 4);
        assert_eq!(boxes.count_closed(&token), 0);

        for slot in &matches {
            slot.fill(&mut token, 0.0);
        }
        assert_eq!(
            boxes.counts(&token),
            BoxCounts {
                length: 4,
                closed: 1,
                opened: 3
            }
        );
        assert!(boxes.get(2).unwrap().is_closed(&token));

        assert_eq!(boxes.open_all(&mut token), vec![0.0, 2.0, 0.0, 1.0]);
        assert_eq!(boxes.count_closed(&token), 0);
        assert_eq!(boxes.count_opened(&token), 4);

        boxes.destroy();
        assert_eq!(boxes.len(), 0);
    });
}
