//! Hardware Abstraction Layer
//!
//! Bus wrappers over the `embedded-hal` traits. Drivers are written against
//! these rather than the STM32 HAL so they also run against host fakes.

pub mod i2c;
