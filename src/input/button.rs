// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-button flags shared between the GPIO interrupt and the main loop.
//!
//! Each flag has exactly one actor that clears it and one that sets it:
//!
//! | Flag | Set by | Cleared by |
//! | ---- | ------ | ---------- |
//! | `pending` | rising-edge handler | main loop ([`ButtonState::take_change`]) |
//! | `busy` | rising-edge handler | falling-edge handler |
//!
//! Only atomic `load`/`store` are used, which the Cortex-M0+ supports without compare-and-swap.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

/// Highest GPIO number in the RP2040's user bank.
pub const MAX_GPIO: u8 = 29;

/// Identity shared by a motor channel and the button that toggles it.
///
/// By convention this is the GPIO number of the channel's PWM output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ControlId(u8);

impl ControlId {
    pub const fn new(gpio: u8) -> Self {
        Self(gpio)
    }

    #[inline]
    pub const fn gpio(self) -> u8 {
        self.0
    }

    /// True if the identity names a real output pin.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 <= MAX_GPIO
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PWM{}", self.0)
    }
}

/// Identity of a raw button input (its GPIO number).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InputId(u8);

impl InputId {
    pub const fn new(gpio: u8) -> Self {
        Self(gpio)
    }

    #[inline]
    pub const fn gpio(self) -> u8 {
        self.0
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// State of one physical button.
pub struct ButtonState {
    input: InputId,
    control: ControlId,
    pending: AtomicBool,
    busy: AtomicBool,
}

impl ButtonState {
    /// A released button with no pending change.
    pub const fn new(input: InputId, control: ControlId) -> Self {
        Self {
            input,
            control,
            pending: AtomicBool::new(false),
            busy: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn input(&self) -> InputId {
        self.input
    }

    /// Motor this button toggles.
    #[inline]
    pub fn control(&self) -> ControlId {
        self.control
    }

    /// True if a press has been accepted and not yet consumed.
    #[inline]
    pub fn has_change(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set_change(&self, pending: bool) {
        self.pending.store(pending, Ordering::Release);
    }

    /// Consume the pending change. Main loop only.
    ///
    /// Load then store rather than `swap`: the interrupt never clears `pending`, so a press
    /// arriving between the two can only be merged into this one, never lost.
    pub fn take_change(&self) -> bool {
        let pending = self.pending.load(Ordering::Acquire);
        if pending {
            self.pending.store(false, Ordering::Release);
        }
        pending
    }

    /// True between an accepted press and its release.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::Release);
    }
}

impl fmt::Debug for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonState")
            .field("input", &self.input)
            .field("control", &self.control)
            .field("pending", &self.has_change())
            .field("busy", &self.is_busy())
            .finish()
    }
}
