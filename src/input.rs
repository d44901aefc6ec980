//! Input Handling
//!
//! Edge handlers for the rotary encoder and its push button.
//!
//! Handlers run in edge-triggered context and only record the edge. The main
//! loop later calls [`PanelInputs::resolve`], which turns an edge into a
//! status flag once its debounce window has elapsed.

pub mod button;
pub mod debounce;
pub mod encoder;

use button::ButtonInput;
use encoder::EncoderInput;

use crate::radio::status::StatusRegister;

/// Everything the edge handlers share with the main loop
pub struct PanelInputs {
    /// Flags consumed by the tuning controller
    pub status: StatusRegister,
    /// Encoder A-channel edges
    pub encoder: EncoderInput,
    /// Push button edges
    pub button: ButtonInput,
}

impl PanelInputs {
    /// Create with no pending edges and the given startup mode
    #[must_use]
    pub const fn new(auto_mode: bool, debounce_ms: u32) -> Self {
        Self {
            status: StatusRegister::with_auto_mode(auto_mode),
            encoder: EncoderInput::new(debounce_ms),
            button: ButtonInput::new(debounce_ms),
        }
    }

    /// Turn settled edges into status flags
    pub fn resolve(&self, now_ms: u32) {
        self.encoder.resolve(now_ms, &self.status);
        self.button.resolve(now_ms, &self.status);
    }
}

impl Default for PanelInputs {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_AUTO_MODE, crate::config::DEBOUNCE_MS)
    }
}
