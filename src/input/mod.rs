// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Button input: debouncing and the interrupt/main-loop flag protocol.
//!
//! ## Modules
//!
//! - [`button`] per-button flags and identities
//! - [`debounce`] blocking level debouncer
//! - [`controller`] rising/falling edge handlers

pub mod button;
pub mod controller;
pub mod debounce;

pub use button::{ButtonState, ControlId, InputId};
pub use controller::{ButtonInputController, EdgeOutcome};
pub use debounce::Debouncer;
