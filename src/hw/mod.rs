// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Board Support
//!
//! RP2040 wrappers for the peripherals the firmware touches. Modules that name `rp2040-hal`
//! types only build for the bare-metal target; the rest are plain `embedded-hal` and are tested
//! on the host.
//!
//! ## Modules
//!
//! - [`led`] - Status LED.
//! - [`adc`] - Potentiometer sampling and 12 to 16-bit widening.
//! - `pins` - Pico pin assignment (target only).
//! - `usart` - UART0 debug port and `log` backend (target only).

pub mod adc;
pub mod led;

#[cfg(target_os = "none")]
pub mod pins;
#[cfg(target_os = "none")]
pub mod usart;

pub use led::Led;

#[cfg(target_os = "none")]
pub use adc::Potentiometers;
#[cfg(target_os = "none")]
pub use pins::BoardPins;
#[cfg(target_os = "none")]
pub use usart::{UartLogger, Usart};
