// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Construction-time configuration errors.
//!
//! Only startup can fail. Once the controllers are built, bad identities are ignored and
//! out-of-range speeds are masked, so nothing at runtime returns these.

use core::fmt;

/// Why a board configuration or motor channel was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// GPIO number outside the RP2040's bank 0 (0..=29).
    InvalidPin { pin: u8 },
    /// The same GPIO is assigned to two signals.
    DuplicatePin { pin: u8 },
    /// A potentiometer is assigned to a GPIO without an ADC input.
    NotAnalogPin { pin: u8 },
    /// A zero-length debounce window would accept the first (possibly bouncing) sample.
    ZeroDebounceWindow,
    /// PWM frequency is zero or too low for a 16-bit wrap value at the system clock.
    InvalidPwmFrequency { hz: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPin { pin } => write!(f, "GPIO{} does not exist", pin),
            ConfigError::DuplicatePin { pin } => write!(f, "GPIO{} assigned more than once", pin),
            ConfigError::NotAnalogPin { pin } => write!(f, "GPIO{} has no ADC input", pin),
            ConfigError::ZeroDebounceWindow => write!(f, "debounce window must be non-zero"),
            ConfigError::InvalidPwmFrequency { hz } => {
                write!(f, "PWM frequency {} Hz is out of range", hz)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_pin() {
        let msg = std::format!("{}", ConfigError::DuplicatePin { pin: 17 });
        assert_eq!(msg, "GPIO17 assigned more than once");
    }
}
