//! FM Receiver Front Panel Firmware Library
//!
//! This library provides the control and presentation logic for a manually
//! tunable FM receiver: a rotary encoder with push button, a 16x2 character
//! LCD and a TEA5767 tuner, all hanging off an STM32G474.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Tuning Controller  │  Display Presenter  │  Dial Scale      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      INPUT LAYER                             │
//! │  Status Register  │  Encoder Handler  │  Button Handler      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  I2C  │  TEA5767 Tuner  │  HD44780 LCD  │  EXTI              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Handlers set, controller clears**: input handlers only ever set flags
//!   in the shared [`radio::status::StatusRegister`]; the controller reads and
//!   clears them with single atomic operations
//! - **Non-blocking debounce**: edges are latched with a timestamp and resolved
//!   from the main loop, never by busy-waiting in handler context
//! - **Type-driven design**: [`types::Frequency`] cannot leave the FM band
//! - **Hardware behind traits**: the controller only sees [`radio::tuner::Tuner`]
//!   and [`ui::CharacterDisplay`], so it runs against fakes on the host
//! - **Explicit error handling**: all fallible operations return `Result`

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

#[macro_use]
mod fmt;

/// Hardware Abstraction Layer
///
/// Bus wrappers shared by the peripheral drivers.
pub mod hal;

/// Peripheral Drivers
///
/// Drivers for the external ICs (TEA5767 tuner, HD44780 LCD backpack).
pub mod drivers;

/// Input Handling
///
/// Edge latching and debounce for the rotary encoder and its push button.
pub mod input;

/// Radio Control Logic
///
/// Status flags, tuning state and the per-iteration tuning controller.
pub mod radio;

/// User Interface
///
/// Character display abstraction, dial scale and the display presenter.
pub mod ui;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Common traits
    pub use crate::radio::tuner::Tuner;
    pub use crate::ui::CharacterDisplay;
    pub use embedded_hal::i2c::I2c;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
