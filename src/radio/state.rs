//! Tuning State
//!
//! Frequency and search direction owned by the tuning controller.
//! Implements immutable state transitions for predictable behavior.

use crate::types::{Direction, Frequency};

/// Controller-owned tuning state (immutable)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TuningState {
    /// Current frequency on the dial
    frequency: Frequency,
    /// Direction of the running search, None when idle
    search_direction: Option<Direction>,
}

impl TuningState {
    /// Create an idle state at `frequency`
    #[must_use]
    pub const fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            search_direction: None,
        }
    }

    /// Get current frequency
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Get the running search direction
    #[must_use]
    pub const fn search_direction(&self) -> Option<Direction> {
        self.search_direction
    }

    /// Check if a search direction is recorded
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.search_direction.is_some()
    }

    /// Set frequency (returns new state)
    #[must_use]
    pub const fn with_frequency(self, frequency: Frequency) -> Self {
        Self { frequency, ..self }
    }

    /// Step 0.1 MHz in `direction` (returns None at the band edge)
    #[must_use]
    pub const fn stepped(self, direction: Direction) -> Option<Self> {
        match self.frequency.step(direction) {
            Some(frequency) => Some(Self { frequency, ..self }),
            None => None,
        }
    }

    /// Record a search start (returns new state)
    #[must_use]
    pub const fn searching(self, direction: Direction) -> Self {
        Self {
            search_direction: Some(direction),
            ..self
        }
    }

    /// Drop the search direction (returns new state)
    #[must_use]
    pub const fn idle(self) -> Self {
        Self {
            search_direction: None,
            ..self
        }
    }
}

impl Default for TuningState {
    fn default() -> Self {
        Self::new(crate::config::default_frequency())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TuningState {
    fn format(&self, f: defmt::Formatter) {
        match self.search_direction {
            Some(direction) => defmt::write!(f, "Tuning({}, search {})", self.frequency, direction),
            None => defmt::write!(f, "Tuning({})", self.frequency),
        }
    }
}
