//! Push Button Handler
//!
//! Each settled press flips auto/manual mode. Bounce within the debounce
//! window collapses into one toggle.

use super::debounce::EdgeLatch;
use crate::radio::status::{StatusFlag, StatusRegister};
use crate::types::TuningMode;

/// Encoder push button edge handler
pub struct ButtonInput {
    latch: EdgeLatch,
}

impl ButtonInput {
    /// Create with the given debounce interval
    #[must_use]
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            latch: EdgeLatch::new(debounce_ms),
        }
    }

    /// Rising edge on the switch line
    pub fn on_edge(&self, now_ms: u32) {
        self.latch.record(now_ms, true);
    }

    /// Settle a pending press into an auto-mode toggle, returning the new mode
    pub fn resolve(&self, now_ms: u32, status: &StatusRegister) -> Option<TuningMode> {
        self.latch.settle(now_ms)?;
        let mode = TuningMode::from_auto(status.toggle(StatusFlag::AutoMode));
        info!("tuning mode {}", mode);
        Some(mode)
    }

    /// Check whether a press is waiting to settle
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.latch.is_pending()
    }
}
