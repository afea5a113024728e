// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motor Control
//!
//! Dispatch of direction toggles and speed commands to the two motors.
//!
//! ## Modules
//!
//! - [`dual_motor`] - Front/back motor pair behind one standby line.
//! - [`drive_loop`] - Main-loop iteration: button drain, deadband check, speed update.

pub mod drive_loop;
pub mod dual_motor;

pub use drive_loop::{close_enough, DriveLoop};
pub use dual_motor::{DualMotorController, SpeedCommand};
