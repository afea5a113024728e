// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board configuration: pin assignments and tunables.
//!
//! The GPIO numbers here double as the identities the firmware passes alongside each pin handle.
//! `main.rs` wires the matching typed pins from `hw::pins`; keep the two in step when rewiring.
//!
//! ## Raspberry Pi Pico wiring
//!
//! | Signal | GPIO |
//! | ------ | ---- |
//! | PWMA / AIN1 / AIN2 (front) | 4 / 5 / 6 |
//! | PWMB / BIN1 / BIN2 (back) | 8 / 9 / 10 |
//! | STBY | 15 |
//! | Front / back button | 17 / 16 |
//! | Front / back potentiometer | 27 / 26 |
//! | Status LED | 25 |

use log::LevelFilter;

use crate::error::ConfigError;
use crate::input::button::MAX_GPIO;
use crate::input::{ButtonState, ControlId, InputId};

/// First GPIO with an ADC input.
pub const FIRST_ADC_GPIO: u8 = 26;

/// Pico on-board crystal.
pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Debug UART baud rate.
pub const UART_BAUD: u32 = 115_200;

/// One H-bridge channel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MotorPins {
    pub pwm: u8,
    pub in1: u8,
    pub in2: u8,
}

impl MotorPins {
    /// Control identity for this channel and its button.
    #[inline]
    pub const fn control(&self) -> ControlId {
        ControlId::new(self.pwm)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DriveConfig {
    pub front: MotorPins,
    pub back: MotorPins,
    pub standby: u8,
    pub front_button: u8,
    pub back_button: u8,
    pub front_pot: u8,
    pub back_pot: u8,
    pub led: u8,

    /// Debounce window, in milliseconds.
    pub debounce_ms: u32,
    pub pwm_frequency_hz: u32,
    /// Potentiometer change (16-bit units) that triggers a speed rewrite.
    pub speed_deadband: u16,
    pub loop_period_ms: u32,
    pub log_level: LevelFilter,
}

/// Raspberry Pi Pico driving one TB6612FNG module.
pub const PICO: DriveConfig = DriveConfig {
    front: MotorPins {
        pwm: 4,
        in1: 5,
        in2: 6,
    },
    back: MotorPins {
        pwm: 8,
        in1: 9,
        in2: 10,
    },
    standby: 15,
    front_button: 17,
    back_button: 16,
    front_pot: 27,
    back_pot: 26,
    led: 25,
    debounce_ms: 50,
    pwm_frequency_hz: 10_000,
    speed_deadband: 1000,
    loop_period_ms: 1000,
    log_level: LevelFilter::Info,
};

impl DriveConfig {
    /// Button table for the input controller, front first.
    pub const fn buttons(&self) -> [ButtonState; 2] {
        [
            ButtonState::new(InputId::new(self.front_button), self.front.control()),
            ButtonState::new(InputId::new(self.back_button), self.back.control()),
        ]
    }

    fn pins(&self) -> [u8; 11] {
        [
            self.front.pwm,
            self.front.in1,
            self.front.in2,
            self.back.pwm,
            self.back.in1,
            self.back.in2,
            self.standby,
            self.front_button,
            self.back_button,
            self.front_pot,
            self.back_pot,
        ]
    }

    /// Check every pin exists, is used once, and that tunables are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.pins();
        for (i, &pin) in pins.iter().chain(core::iter::once(&self.led)).enumerate() {
            if pin > MAX_GPIO {
                return Err(ConfigError::InvalidPin { pin });
            }
            if pins[..i.min(pins.len())].contains(&pin) {
                return Err(ConfigError::DuplicatePin { pin });
            }
        }

        for pot in [self.front_pot, self.back_pot] {
            if pot < FIRST_ADC_GPIO {
                return Err(ConfigError::NotAnalogPin { pin: pot });
            }
        }

        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounceWindow);
        }
        if self.pwm_frequency_hz == 0 {
            return Err(ConfigError::InvalidPwmFrequency {
                hz: self.pwm_frequency_hz,
            });
        }
        Ok(())
    }

    /// PWM wrap value giving `pwm_frequency_hz` at `sys_hz` with a divider of 1.
    pub fn pwm_top(&self, sys_hz: u32) -> Result<u16, ConfigError> {
        let err = ConfigError::InvalidPwmFrequency {
            hz: self.pwm_frequency_hz,
        };
        let periods = sys_hz.checked_div(self.pwm_frequency_hz).ok_or(err)?;
        periods
            .checked_sub(1)
            .and_then(|top| u16::try_from(top).ok())
            .filter(|&top| top > 0)
            .ok_or(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pico_config_is_valid() {
        assert_eq!(PICO.validate(), Ok(()));
    }

    #[test]
    fn buttons_follow_their_motors() {
        let [front, back] = PICO.buttons();
        assert_eq!(front.input(), InputId::new(17));
        assert_eq!(front.control(), ControlId::new(4));
        assert_eq!(back.input(), InputId::new(16));
        assert_eq!(back.control(), ControlId::new(8));
    }

    #[test]
    fn rejects_missing_gpio() {
        let mut cfg = PICO;
        cfg.back.in2 = 30;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidPin { pin: 30 }));
    }

    #[test]
    fn rejects_shared_pins() {
        let mut cfg = PICO;
        cfg.back_button = cfg.front_button;
        assert_eq!(cfg.validate(), Err(ConfigError::DuplicatePin { pin: 17 }));

        let mut cfg = PICO;
        cfg.led = cfg.standby;
        assert_eq!(cfg.validate(), Err(ConfigError::DuplicatePin { pin: 15 }));
    }

    #[test]
    fn rejects_digital_pot_pin() {
        let mut cfg = PICO;
        cfg.front_pot = 20;
        assert_eq!(cfg.validate(), Err(ConfigError::NotAnalogPin { pin: 20 }));
    }

    #[test]
    fn rejects_zero_tunables() {
        let mut cfg = PICO;
        cfg.debounce_ms = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDebounceWindow));

        let mut cfg = PICO;
        cfg.pwm_frequency_hz = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidPwmFrequency { hz: 0 }));
    }

    #[test]
    fn pwm_top_at_125_mhz() {
        assert_eq!(PICO.pwm_top(125_000_000), Ok(12_499));
    }

    #[test]
    fn pwm_top_must_fit_16_bits() {
        let mut cfg = PICO;
        cfg.pwm_frequency_hz = 100;
        assert!(cfg.pwm_top(125_000_000).is_err());

        cfg.pwm_frequency_hz = 0;
        assert!(cfg.pwm_top(125_000_000).is_err());
    }
}
