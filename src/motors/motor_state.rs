// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Direction state machine and speed command for one motor.
//!
//! Toggling cycles `STOPPED -> FORWARD -> STOPPED -> BACKWARD -> STOPPED -> ...`. A toggle out
//! of `STOPPED` resumes opposite to the last running heading; any other toggle stops.
//!
//! Toggling only changes state. Nothing reaches the hardware until the next
//! [`MotorDirectionState::set_speed`].

use crate::drivers::{DriveSignals, MotorOutput};
use crate::error::ConfigError;
use crate::input::ControlId;
use crate::motors::direction::{Direction, Heading};

pub struct MotorDirectionState<O: MotorOutput> {
    id: ControlId,
    output: O,
    current: Direction,
    previous: Heading,
    speed: u16,
    signals: DriveSignals,
}

impl<O: MotorOutput> MotorDirectionState<O> {
    /// Bind `output` to the control identity `id`.
    ///
    /// Starts stopped with a previous heading of backward, so the first toggle goes forward.
    /// Fails if `id` does not name a real output pin.
    pub fn new(id: ControlId, output: O) -> Result<Self, ConfigError> {
        if !id.is_valid() {
            return Err(ConfigError::InvalidPin { pin: id.gpio() });
        }
        Ok(Self {
            id,
            output,
            current: Direction::Stopped,
            previous: Heading::Backward,
            speed: 0,
            signals: DriveSignals::STOP,
        })
    }

    /// True if this motor is addressed by `id`.
    #[inline]
    pub fn uses(&self, id: ControlId) -> bool {
        self.id == id
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.current
    }

    /// Last running heading.
    #[inline]
    pub fn previous(&self) -> Heading {
        self.previous
    }

    /// Direction the next toggle would enter.
    pub fn next_direction(&self) -> Direction {
        match self.current.heading() {
            None => self.previous.reversed().into(),
            Some(_) => Direction::Stopped,
        }
    }

    /// Advance the toggle cycle and return the new direction.
    pub fn toggle_direction(&mut self) -> Direction {
        if let Some(heading) = self.current.heading() {
            self.previous = heading;
        }
        self.current = self.next_direction();
        self.current
    }

    /// Commanded speed, as last passed to [`MotorDirectionState::set_speed`] after masking.
    #[inline]
    pub fn speed(&self) -> u16 {
        self.speed
    }

    /// Store a speed command and drive the output.
    ///
    /// `magnitude` is truncated to its low 16 bits (not saturated). While stopped, the driven
    /// magnitude is zero but the command is still remembered.
    pub fn set_speed(&mut self, magnitude: u32) {
        self.speed = (magnitude & 0xFFFF) as u16;
        self.signals = self.current.signals(self.speed);
        self.output.apply(self.signals);
    }

    /// Signals most recently driven.
    #[inline]
    pub fn signals(&self) -> DriveSignals {
        self.signals
    }

    #[inline]
    pub fn signal1(&self) -> bool {
        self.signals.in1
    }

    #[inline]
    pub fn signal2(&self) -> bool {
        self.signals.in2
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::Tb6612Channel;
    use crate::mock::{RecordingPin, RecordingPwm};

    /// Captures every write.
    #[derive(Default)]
    struct Recorder {
        last: Option<DriveSignals>,
        writes: usize,
    }

    impl MotorOutput for Recorder {
        fn apply(&mut self, signals: DriveSignals) {
            self.last = Some(signals);
            self.writes += 1;
        }
    }

    fn motor() -> MotorDirectionState<Recorder> {
        MotorDirectionState::new(ControlId::new(4), Recorder::default()).unwrap()
    }

    #[test]
    fn toggle_cycle_repeats() {
        let mut m = motor();
        assert_eq!(m.direction(), Direction::Stopped);

        let expected = [
            Direction::Forward,
            Direction::Stopped,
            Direction::Backward,
            Direction::Stopped,
        ];
        for _ in 0..3 {
            for want in expected {
                assert_eq!(m.next_direction(), want);
                assert_eq!(m.toggle_direction(), want);
            }
        }
    }

    #[test]
    fn previous_is_never_stopped() {
        let mut m = motor();
        assert_eq!(m.previous(), Heading::Backward);
        m.toggle_direction();
        m.toggle_direction();
        assert_eq!(m.previous(), Heading::Forward);
    }

    #[test]
    fn toggle_does_not_write_output() {
        let mut m = motor();
        m.toggle_direction();
        assert_eq!(m.output().writes, 0);
    }

    #[test]
    fn speed_is_masked_not_saturated() {
        let mut m = motor();
        m.toggle_direction();

        m.set_speed(65_536 + 1234);
        assert_eq!(m.speed(), 1234);
        assert_eq!(m.signals().magnitude, 1234);

        m.set_speed(70_000);
        assert_eq!(m.speed(), 4_464);

        m.set_speed(u32::MAX);
        assert_eq!(m.speed(), u16::MAX);
    }

    #[test]
    fn stopped_drives_zero() {
        let mut m = motor();
        m.set_speed(40_000);
        assert_eq!(m.speed(), 40_000);
        assert_eq!(m.output().last, Some(DriveSignals::STOP));
    }

    #[test]
    fn forward_then_stop_then_speed_is_idle() {
        let mut m = motor();
        m.toggle_direction();
        m.toggle_direction();
        m.set_speed(1000);
        assert_eq!((m.signal1(), m.signal2(), m.signals().magnitude), (false, false, 0));
    }

    #[test]
    fn backward_drives_in1() {
        let mut m = motor();
        m.toggle_direction();
        m.toggle_direction();
        m.toggle_direction();
        m.set_speed(300);
        assert_eq!(
            m.output().last,
            Some(DriveSignals {
                in1: true,
                in2: false,
                magnitude: 300
            })
        );
    }

    #[test]
    fn invalid_identity_is_rejected() {
        let err = MotorDirectionState::new(ControlId::new(40), Recorder::default()).err();
        assert_eq!(err, Some(ConfigError::InvalidPin { pin: 40 }));
    }

    #[test]
    fn drives_a_tb6612_channel() {
        let ch = Tb6612Channel::new(
            RecordingPin::default(),
            RecordingPin::default(),
            RecordingPwm::default(),
        );
        let mut m = MotorDirectionState::new(ControlId::new(4), ch).unwrap();
        m.toggle_direction();
        m.set_speed(500);

        let (in1, in2, pwm) = m.output.free();
        assert!(!in1.is_set_high());
        assert!(in2.is_set_high());
        assert_eq!(pwm.duty(), 500);
    }
}
