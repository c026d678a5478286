//! `ValueBox` - a value paired with a "read since last write" flag.
//!
//! A box is *closed* after every [`fill`](ValueBox::fill) and *opened* by every
//! [`open`](ValueBox::open). Both transitions are legal from either state, so
//! there is no terminal state and no error path.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The two observable states of a box's read flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxState {
    /// Filled and not read since.
    Closed,
    /// Read at least once since the last fill.
    Opened,
}

impl fmt::Display for BoxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxState::Closed => f.write_str("closed"),
            BoxState::Opened => f.write_str("opened"),
        }
    }
}

/// A single `f64` with a flag recording whether it was read since it was written.
///
/// The default box holds `0.0` and is closed, which is exactly what
/// `ValueBox::new(0.0)` produces: a never-filled box and a box filled with
/// zero cannot be told apart.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValueBox {
    value: f64,
    opened: bool,
}

impl ValueBox {
    /// Creates a closed box holding `value`.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            opened: false,
        }
    }

    /// Stores `value` and closes the box. Any previous value is discarded.
    #[inline]
    pub fn fill(&mut self, value: f64) {
        self.value = value;
        self.opened = false;
    }

    /// Opens the box and returns its value.
    ///
    /// Opening an already opened box returns the same value and leaves it opened.
    #[inline]
    pub fn open(&mut self) -> f64 {
        self.opened = true;
        self.value
    }

    /// Returns `true` if the value was read since the last fill.
    #[inline]
    pub const fn is_opened(&self) -> bool {
        self.opened
    }

    /// Returns `true` if the value was not read since the last fill.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        !self.opened
    }

    /// Current state of the read flag.
    #[inline]
    pub const fn state(&self) -> BoxState {
        if self.opened {
            BoxState::Opened
        } else {
            BoxState::Closed
        }
    }
}

impl From<f64> for ValueBox {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
