// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! Drivers that sit between the `embedded-hal` pin traits and the motor state logic.
//!
//! ## Existing drivers
//!
//! - [`tb6612`] – Toshiba TB6612FNG dual H-bridge (one channel per motor, shared STBY)

pub mod tb6612;

pub use tb6612::{DriveSignals, MotorOutput, Standby, Tb6612Channel};
