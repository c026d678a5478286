//! Collections of token-gated boxes.
//!
//! - `box_slice`: [`BoxSlice`], a fixed-length slice of individually owned boxes.
//! - `counts`: [`BoxCounts`], a serializable closed/opened tally.

pub mod box_slice;
pub mod counts;

pub use box_slice::BoxSlice;
pub use counts::BoxCounts;
