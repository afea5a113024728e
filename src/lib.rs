// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # TwinMotor Firmware
//!
//! Firmware for a two-motor drive built on a TB6612FNG dual H-bridge and a Raspberry Pi Pico
//! (RP2040). Two potentiometers set the motor speeds and two push buttons step each motor through
//! `STOPPED -> FORWARD -> STOPPED -> BACKWARD`.
//!
//! Button edges are handled in the GPIO interrupt, which only sets flags; the main loop drains
//! them, toggles directions, and rewrites speeds.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`input`] | Button flags, debouncing, edge handlers |
//! | [`motors`] | Per-motor direction state machine and speed command |
//! | [`drivers`] | TB6612FNG channel and standby line |
//! | [`control`] | Front/back dispatch and the main-loop step |
//! | [`hw`] | RP2040 wrappers: LED, ADC, pins, UART logger |
//! | [`config`] | Pin map and tunables |
//!
//! ## Getting Started
//!
//! Run the unit tests on the host:
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Flash the board (BOOTSEL held):
//!
//! ```bash
//! cargo run --release --target thumbv6m-none-eabi
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod hw;
pub mod input;
pub mod motors;

#[cfg(test)]
mod mock;

pub use error::ConfigError;
