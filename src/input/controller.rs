// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Edge handlers for the direction buttons.
//!
//! The handlers are called from the GPIO interrupt with the raw input identity and pin that
//! fired. They only touch [`ButtonState`] flags; the main loop drains the flags and performs the
//! actual direction toggles.
//!
//! All methods take `&self`, so the controller can live in a `static` shared with the interrupt.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, PinState};

use crate::input::button::{ButtonState, ControlId, InputId};
use crate::input::debounce::Debouncer;

/// What an edge handler did with an interrupt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EdgeOutcome {
    /// Press accepted; a change is now pending for this control.
    Pressed(ControlId),
    /// Rising edge while the button is still held from an earlier press.
    Held(ControlId),
    /// Release observed; the button is no longer busy.
    Released(ControlId),
    /// The debounced level did not match the edge direction.
    Bounced(ControlId),
    /// The input is not bound to any button.
    Unresolved,
}

/// Fixed set of `N` buttons, each bound to one motor control identity.
pub struct ButtonInputController<const N: usize> {
    buttons: [ButtonState; N],
    debouncer: Debouncer,
}

impl<const N: usize> ButtonInputController<N> {
    pub const fn new(buttons: [ButtonState; N], debouncer: Debouncer) -> Self {
        Self { buttons, debouncer }
    }

    /// Map a raw input to its button, if one is bound.
    pub fn resolve(&self, input: InputId) -> Option<&ButtonState> {
        self.buttons.iter().find(|b| b.input() == input)
    }

    /// Button bound to a motor control identity.
    pub fn button(&self, control: ControlId) -> Option<&ButtonState> {
        self.buttons.iter().find(|b| b.control() == control)
    }

    pub fn buttons(&self) -> impl Iterator<Item = &ButtonState> {
        self.buttons.iter()
    }

    #[inline]
    pub fn debouncer(&self) -> Debouncer {
        self.debouncer
    }

    /// Handle a low-to-high transition on `input`.
    ///
    /// Blocks for the debounce window. A press is only queued if the button is not already
    /// busy, so a held or chattering button queues a single toggle.
    pub fn on_rising_edge<P, D>(&self, input: InputId, pin: &mut P, delay: &mut D) -> EdgeOutcome
    where
        P: InputPin,
        D: DelayNs,
    {
        let level = self.debouncer.settle(pin, delay);

        let Some(button) = self.resolve(input) else {
            log::debug!("rising edge on unbound {}", input);
            return EdgeOutcome::Unresolved;
        };
        let control = button.control();

        if level == PinState::Low {
            log::debug!("{} settled low after rising edge", input);
            return EdgeOutcome::Bounced(control);
        }

        if button.is_busy() {
            return EdgeOutcome::Held(control);
        }

        button.set_change(true);
        button.set_busy(true);
        EdgeOutcome::Pressed(control)
    }

    /// Handle a high-to-low transition on `input`.
    ///
    /// Clearing `busy` is idempotent, so repeated falling edges during a release are harmless.
    pub fn on_falling_edge<P, D>(&self, input: InputId, pin: &mut P, delay: &mut D) -> EdgeOutcome
    where
        P: InputPin,
        D: DelayNs,
    {
        let Some(button) = self.resolve(input) else {
            log::debug!("falling edge on unbound {}", input);
            return EdgeOutcome::Unresolved;
        };
        let control = button.control();

        if self.debouncer.settle(pin, delay) == PinState::High {
            return EdgeOutcome::Bounced(control);
        }

        button.set_busy(false);
        EdgeOutcome::Released(control)
    }

    /// Consume every pending change, calling `f` with the control identity of each.
    ///
    /// Returns how many changes were consumed. Presses that arrived since the last drain are
    /// merged: each button contributes at most one.
    pub fn drain_changes<F>(&self, mut f: F) -> usize
    where
        F: FnMut(ControlId),
    {
        let mut count = 0;
        for button in &self.buttons {
            if button.take_change() {
                f(button.control());
                count += 1;
            }
        }
        count
    }
}
