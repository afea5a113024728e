// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `embedded-hal` test doubles shared by the unit tests.

use core::convert::Infallible;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, InputPin, OutputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};

/// Output pin that remembers its level.
#[derive(Debug, Default)]
pub struct RecordingPin {
    high: bool,
}

impl RecordingPin {
    pub fn high() -> Self {
        Self { high: true }
    }

    pub fn is_set_high(&self) -> bool {
        self.high
    }
}

impl PinErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        Ok(())
    }
}

/// PWM channel that records the last duty written.
#[derive(Debug)]
pub struct RecordingPwm {
    max: u16,
    duty: u16,
}

impl RecordingPwm {
    pub fn with_max(max: u16) -> Self {
        // Non-zero so construction visibly resets it.
        Self { max, duty: max }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }
}

impl Default for RecordingPwm {
    fn default() -> Self {
        Self::with_max(u16::MAX)
    }
}

impl PwmErrorType for RecordingPwm {
    type Error = Infallible;
}

impl SetDutyCycle for RecordingPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        self.duty = duty;
        Ok(())
    }
}

/// Input pin that plays back a script of levels, then holds the last one.
#[derive(Debug)]
pub struct ScriptedInput {
    script: Vec<bool>,
    reads: usize,
}

impl ScriptedInput {
    pub fn new(script: &[bool]) -> Self {
        assert!(!script.is_empty());
        Self {
            script: script.to_vec(),
            reads: 0,
        }
    }

    pub fn steady(level: bool) -> Self {
        Self::new(&[level])
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl PinErrorType for ScriptedInput {
    type Error = Infallible;
}

impl InputPin for ScriptedInput {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        let i = self.reads.min(self.script.len() - 1);
        self.reads += 1;
        Ok(self.script[i])
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

/// Delay that only counts how long it was asked to wait.
#[derive(Debug, Default)]
pub struct CountingDelay {
    ns: u64,
}

impl CountingDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.ns / 1_000_000
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns += u64::from(ns);
    }
}
