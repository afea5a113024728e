// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver for one channel of a Toshiba TB6612FNG dual H-bridge, plus its shared standby line.
//!
//! Truth table for one channel (STBY high):
//!
//! | IN1 | IN2 | PWM | Output |
//! | --- | --- | --- | ------ |
//! | L   | H   | duty | CCW (forward) |
//! | H   | L   | duty | CW (backward) |
//! | L   | L   | x   | stop (coast) |
//!
//! Both channels share one STBY pin; holding it low disables the whole module.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Levels for the two direction inputs and the speed magnitude of one channel.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DriveSignals {
    pub in1: bool,
    pub in2: bool,
    /// 0..=65535, full scale regardless of the PWM slice's TOP value.
    pub magnitude: u16,
}

impl DriveSignals {
    /// Both direction inputs low, zero duty.
    pub const STOP: Self = Self {
        in1: false,
        in2: false,
        magnitude: 0,
    };
}

/// Sink for a motor channel's signals.
pub trait MotorOutput {
    fn apply(&mut self, signals: DriveSignals);
}

/// One TB6612FNG channel: AIN1/AIN2/PWMA or BIN1/BIN2/PWMB.
pub struct Tb6612Channel<IN1, IN2, PWM> {
    in1: IN1,
    in2: IN2,
    pwm: PWM,
}

impl<IN1, IN2, PWM> Tb6612Channel<IN1, IN2, PWM>
where
    IN1: OutputPin,
    IN2: OutputPin,
    PWM: SetDutyCycle,
{
    /// Take the channel's pins and leave it stopped.
    pub fn new(in1: IN1, in2: IN2, pwm: PWM) -> Self {
        let mut channel = Self { in1, in2, pwm };
        channel.apply(DriveSignals::STOP);
        channel
    }

    pub fn free(self) -> (IN1, IN2, PWM) {
        (self.in1, self.in2, self.pwm)
    }
}

impl<IN1, IN2, PWM> MotorOutput for Tb6612Channel<IN1, IN2, PWM>
where
    IN1: OutputPin,
    IN2: OutputPin,
    PWM: SetDutyCycle,
{
    fn apply(&mut self, signals: DriveSignals) {
        // Duty first so a direction change never briefly runs at the old speed.
        self.pwm.set_duty_cycle_fraction(signals.magnitude, u16::MAX).ok();
        self.in1.set_state(signals.in1.into()).ok();
        self.in2.set_state(signals.in2.into()).ok();
    }
}

/// Shared STBY line. Low on construction; the motor controller enables it.
pub struct Standby<PIN: OutputPin> {
    pin: PIN,
    enabled: bool,
}

impl<PIN: OutputPin> Standby<PIN> {
    pub fn new(mut pin: PIN) -> Self {
        pin.set_low().ok();
        Self {
            pin,
            enabled: false,
        }
    }

    /// Drive STBY high so both channels follow their inputs.
    pub fn enable(&mut self) {
        self.pin.set_high().ok();
        self.enabled = true;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{RecordingPin, RecordingPwm};

    #[test]
    fn new_channel_is_stopped() {
        let ch = Tb6612Channel::new(
            RecordingPin::high(),
            RecordingPin::high(),
            RecordingPwm::default(),
        );
        let (in1, in2, pwm) = ch.free();
        assert!(!in1.is_set_high());
        assert!(!in2.is_set_high());
        assert_eq!(pwm.duty(), 0);
    }

    #[test]
    fn magnitude_scales_to_pwm_top() {
        let mut ch = Tb6612Channel::new(
            RecordingPin::default(),
            RecordingPin::default(),
            RecordingPwm::with_max(12_499),
        );
        ch.apply(DriveSignals {
            in1: true,
            in2: false,
            magnitude: u16::MAX,
        });
        let (in1, in2, pwm) = ch.free();
        assert!(in1.is_set_high());
        assert!(!in2.is_set_high());
        assert_eq!(pwm.duty(), 12_499);
    }

    #[test]
    fn standby_starts_low_until_enabled() {
        let mut stby = Standby::new(RecordingPin::high());
        assert!(!stby.is_enabled());
        stby.enable();
        assert!(stby.is_enabled());
        assert!(stby.free().is_set_high());
    }
}
