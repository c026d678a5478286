//! `BoxCounts` - a closed/opened tally of a slice.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Closed and opened counts taken in one pass over a [`BoxSlice`](crate::BoxSlice).
///
/// `closed + opened == length` always holds for counts produced by the slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxCounts {
    /// Number of slots in the slice.
    pub length: usize,
    /// Boxes not read since their last fill.
    pub closed: usize,
    /// Boxes read since their last fill.
    pub opened: usize,
}

impl BoxCounts {
    /// `true` when there are no opened boxes (vacuously true when empty).
    pub const fn all_closed(&self) -> bool {
        self.opened == 0
    }

    /// `true` when there are no closed boxes (vacuously true when empty).
    pub const fn all_opened(&self) -> bool {
        self.closed == 0
    }
}

impl fmt::Display for BoxCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "closed_boxes: {}, opened_boxes: {}",
            self.closed, self.opened
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counts_are_both_all() {
        let counts = BoxCounts::default();
        assert!(counts.all_closed());
        assert!(counts.all_opened());
    }

    #[test]
    fn display_and_json() {
        let counts = BoxCounts {
            length: 4,
            closed: 1,
            opened: 3,
        };
        assert_eq!(counts.to_string(), "closed_boxes: 1, opened_boxes: 3");
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["opened"], 3);
        let back: BoxCounts = serde_json::from_value(json).unwrap();
        assert_eq!(back, counts);
    }
}
