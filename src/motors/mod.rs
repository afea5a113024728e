// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motor State
//!
//! Per-motor direction and speed state that sits above the H-bridge drivers in `drivers`.
//!
//! ## Modules
//!
//! - [`direction`] - Direction and heading enums, direction-to-signal mapping.
//! - [`motor_state`] - Toggle state machine and speed command for one motor.

pub mod direction;
pub mod motor_state;

pub use direction::{Direction, Heading};
pub use motor_state::MotorDirectionState;
