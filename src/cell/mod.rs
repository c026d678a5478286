//! Cells: the token-gated storage primitive and the box that lives in it.
//!
//! - `ghost_cell`: [`GhostCell`], interior mutability gated by a [`GhostToken`](crate::GhostToken).
//! - `value_box`: [`ValueBox`], a value plus its read-since-write flag.
//! - `box_cell`: [`BoxCell`], a `GhostCell<ValueBox>` with token-gated fill/open.

pub mod box_cell;
pub mod ghost_cell;
pub mod value_box;

pub use box_cell::BoxCell;
pub use ghost_cell::GhostCell;
pub use value_box::{BoxState, ValueBox};
