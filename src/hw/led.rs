// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status LED that remembers its wiring polarity.

use embedded_hal::digital::{OutputPin, PinState};

/// Pin level that turns the LED on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    #[inline]
    fn level(self, on: bool) -> PinState {
        match self {
            ActiveLevel::High => PinState::from(on),
            ActiveLevel::Low => PinState::from(!on),
        }
    }
}

pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Wrap `pin` and switch the LED off.
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut led = Self {
            pin,
            active,
            is_on: true,
        };
        led.set(false);
        led
    }

    /// On-board Pico LED (GPIO25) is wired active high.
    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    pub fn set(&mut self, on: bool) {
        self.pin.set_state(self.active.level(on)).ok();
        self.is_on = on;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingPin;

    #[test]
    fn starts_off_for_either_polarity() {
        assert!(!Led::active_high(RecordingPin::high()).free().is_set_high());
        assert!(Led::active_low(RecordingPin::default()).free().is_set_high());
    }

    #[test]
    fn active_low_inverts() {
        let mut led = Led::active_low(RecordingPin::default());
        led.on();
        assert!(led.is_on());
        assert!(!led.free().is_set_high());
    }
}
