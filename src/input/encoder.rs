//! Rotary Encoder Handler
//!
//! Converts A-channel rising edges into tuning requests. Direction comes
//! from the B channel sampled at the edge: B still low means A leads, i.e.
//! clockwise rotation.
//!
//! An accepted edge opens a debounce window; edges inside it are ignored
//! apart from refreshing the B sample. That bounds the request rate to
//! roughly 20 per second at the default 50 ms. Spinning faster drops the
//! edges that fall inside a window but keeps producing requests.

use super::debounce::EdgeLatch;
use crate::radio::status::{StatusFlag, StatusRegister};
use crate::types::Direction;

/// Encoder A/B edge handler
pub struct EncoderInput {
    latch: EdgeLatch,
}

impl EncoderInput {
    /// Create with the given debounce interval
    #[must_use]
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            latch: EdgeLatch::new(debounce_ms),
        }
    }

    /// Rising edge on channel A; `b_high` is channel B's level at the edge
    pub fn on_edge(&self, now_ms: u32, b_high: bool) {
        self.latch.record(now_ms, b_high);
    }

    /// Settle a pending edge into exactly one of `GoUp`/`GoDown`
    pub fn resolve(&self, now_ms: u32, status: &StatusRegister) -> Option<Direction> {
        let b_high = self.latch.settle(now_ms)?;
        let direction = Self::direction(b_high);
        status.set(match direction {
            Direction::Up => StatusFlag::GoUp,
            Direction::Down => StatusFlag::GoDown,
        });
        debug!("encoder {}", direction);
        Some(direction)
    }

    /// Rotation direction for a B-channel level sampled on A's rising edge
    #[must_use]
    pub const fn direction(b_high: bool) -> Direction {
        if b_high {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Check whether an edge is waiting to settle
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.latch.is_pending()
    }
}
