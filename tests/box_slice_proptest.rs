use boxslice::predicate::{is_negative, is_positive};
use boxslice::{BoxSlice, GhostToken};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Fill(usize, i8),
    Open(usize),
    FindFirstNegative,
    FindAllPositive,
}

// Plain model: (value, opened) per slot.
fn model_open(model: &mut [(f64, bool)], index: usize) -> f64 {
    model[index].1 = true;
    model[index].0
}

proptest! {
    #[test]
    fn test_box_slice_matches_model(
        length in 0usize..12,
        ops in proptest::collection::vec(
            prop_oneof![
                (any::<usize>(), any::<i8>()).prop_map(|(i, v)| Operation::Fill(i, v)),
                any::<usize>().prop_map(Operation::Open),
                Just(Operation::FindFirstNegative),
                Just(Operation::FindAllPositive),
            ],
            1..64
        )
    ) {
        let mut model = vec![(0.0_f64, false); length];

        GhostToken::new(|mut token| {
            let boxes = BoxSlice::with_length(length);

            for op in ops {
                match op {
                    Operation::Fill(i, v) => {
                        let value = f64::from(v);
                        match boxes.get(i % (length + 1)) {
                            Some(slot) => {
                                slot.fill(&mut token, value);
                                model[i % (length + 1)] = (value, false);
                            }
                            None => assert_eq!(i % (length + 1), length),
                        }
                    }
                    Operation::Open(i) => {
                        if length > 0 {
                            let index = i % length;
                            let got = boxes.get(index).unwrap().open(&mut token);
                            assert_eq!(got, model_open(&mut model, index));
                        }
                    }
                    Operation::FindFirstNegative => {
                        let mut expected = None;
                        for index in 0..length {
                            if model_open(&mut model, index) < 0.0 {
                                expected = Some(index);
                                break;
                            }
                        }
                        let found = boxes.find_first(&mut token, is_negative);
                        match (found, expected) {
                            (Some(slot), Some(index)) => {
                                assert!(std::ptr::eq(slot, boxes.get(index).unwrap()));
                            }
                            (None, None) => {}
                            (found, expected) => {
                                panic!("find_first mismatch: {:?} vs {:?}", found.is_some(), expected);
                            }
                        }
                    }
                    Operation::FindAllPositive => {
                        let expected: Vec<usize> = (0..length)
                            .filter(|&index| model_open(&mut model, index) > 0.0)
                            .collect();
                        let found = boxes.find_all(&mut token, is_positive);
                        assert_eq!(found.len(), expected.len());
                        for (slot, index) in found.iter().zip(expected) {
                            assert!(std::ptr::eq(*slot, boxes.get(index).unwrap()));
                        }
                    }
                }

                let opened = model.iter().filter(|(_, opened)| *opened).count();
                assert_eq!(boxes.count_opened(&token), opened);
                assert_eq!(boxes.count_closed(&token), length - opened);
                assert_eq!(boxes.all_closed(&token), opened == 0);
                assert_eq!(boxes.all_opened(&token), opened == length);
            }
        });
    }
}
