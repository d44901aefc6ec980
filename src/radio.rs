//! Radio Control Logic
//!
//! Status flags, tuning state and the tuning/search state machine.
//! Implements the functional core of the front panel.

pub mod controller;
pub mod state;
pub mod status;
pub mod tuner;
