// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One iteration of the main polling loop.
//!
//! Drains button presses into direction toggles, then rewrites motor speeds from the
//! potentiometers when something changed. Small potentiometer drift inside the deadband does not
//! cause a write.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut drive = DriveLoop::new(config.speed_deadband);
//!
//! loop {
//!     let (front, back) = pots.read();
//!     drive.step(&BUTTONS, &mut motors, front, back);
//!     timer.delay_ms(config.loop_period_ms);
//! }
//! ```

use embedded_hal::digital::OutputPin;

use crate::control::dual_motor::{DualMotorController, SpeedCommand};
use crate::drivers::MotorOutput;
use crate::input::ButtonInputController;

/// Default potentiometer deadband in 16-bit speed units.
pub const DEFAULT_DEADBAND: u16 = 1000;

/// Returns true if `a` and `b` are within `delta` of each other.
#[inline]
pub fn close_enough(a: u16, b: u16, delta: u16) -> bool {
    a.abs_diff(b) <= delta
}

#[derive(Debug)]
pub struct DriveLoop {
    deadband: u16,
    updates: u32,
}

impl DriveLoop {
    pub fn new(deadband: u16) -> Self {
        Self {
            deadband,
            updates: 0,
        }
    }

    /// Run one iteration with fresh potentiometer samples.
    ///
    /// Returns true if speeds were written to the motors.
    pub fn step<const N: usize, S, F, B>(
        &mut self,
        buttons: &ButtonInputController<N>,
        motors: &mut DualMotorController<S, F, B>,
        front_sample: u16,
        back_sample: u16,
    ) -> bool
    where
        S: OutputPin,
        F: MotorOutput,
        B: MotorOutput,
    {
        let toggled = buttons.drain_changes(|id| {
            motors.toggle_direction(id);
        });

        let drifted = |commanded: Option<u16>, sample: u16| {
            commanded.is_some_and(|speed| !close_enough(speed, sample, self.deadband))
        };
        let front_moved = drifted(motors.front().map(|m| m.speed()), front_sample);
        let back_moved = drifted(motors.back().map(|m| m.speed()), back_sample);

        if toggled == 0 && !front_moved && !back_moved {
            return false;
        }

        motors.change_speed(SpeedCommand {
            speed: None,
            front: Some(u32::from(front_sample)),
            back: Some(u32::from(back_sample)),
        });
        self.updates = self.updates.wrapping_add(1);
        log::debug!("speed update #{}: front={} back={}", self.updates, front_sample, back_sample);
        true
    }

    /// Number of speed writes so far.
    #[inline]
    pub fn updates(&self) -> u32 {
        self.updates
    }
}

impl Default for DriveLoop {
    fn default() -> Self {
        Self::new(DEFAULT_DEADBAND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{DriveSignals, Standby};
    use crate::input::{ButtonState, ControlId, Debouncer, InputId};
    use crate::mock::RecordingPin;
    use crate::motors::{Direction, MotorDirectionState};

    const FRONT: ControlId = ControlId::new(4);
    const BACK: ControlId = ControlId::new(8);

    #[derive(Default)]
    struct Recorder {
        last: Option<DriveSignals>,
    }

    impl MotorOutput for Recorder {
        fn apply(&mut self, signals: DriveSignals) {
            self.last = Some(signals);
        }
    }

    fn buttons() -> ButtonInputController<2> {
        ButtonInputController::new(
            [
                ButtonState::new(InputId::new(17), FRONT),
                ButtonState::new(InputId::new(16), BACK),
            ],
            Debouncer::default(),
        )
    }

    fn motors() -> DualMotorController<RecordingPin, Recorder, Recorder> {
        DualMotorController::new(
            Standby::new(RecordingPin::default()),
            Some(MotorDirectionState::new(FRONT, Recorder::default()).unwrap()),
            Some(MotorDirectionState::new(BACK, Recorder::default()).unwrap()),
        )
    }

    #[test]
    fn close_enough_is_inclusive() {
        assert!(close_enough(5000, 6000, 1000));
        assert!(close_enough(6000, 5000, 1000));
        assert!(!close_enough(5000, 6001, 1000));
    }

    #[test]
    fn idle_loop_writes_nothing() {
        let b = buttons();
        let mut m = motors();
        let mut drive = DriveLoop::default();

        assert!(!drive.step(&b, &mut m, 800, 0));
        assert_eq!(drive.updates(), 0);
    }

    #[test]
    fn pending_press_toggles_and_writes() {
        let b = buttons();
        let mut m = motors();
        let mut drive = DriveLoop::default();
        b.button(FRONT).unwrap().set_change(true);

        assert!(drive.step(&b, &mut m, 300, 200));

        assert_eq!(m.direction_of(FRONT), Some(Direction::Forward));
        assert_eq!(m.direction_of(BACK), Some(Direction::Stopped));
        assert_eq!(m.front().unwrap().signals().magnitude, 300);
        assert_eq!(m.back().unwrap().speed(), 200);
        assert!(!b.button(FRONT).unwrap().has_change());
    }

    #[test]
    fn drift_beyond_deadband_writes() {
        let b = buttons();
        let mut m = motors();
        let mut drive = DriveLoop::new(1000);

        assert!(drive.step(&b, &mut m, 0, 1001));
        assert_eq!(m.speed_of(BACK), Some(1001));

        assert!(!drive.step(&b, &mut m, 0, 1500));
        assert_eq!(m.speed_of(BACK), Some(1001));
    }

    #[test]
    fn busy_button_does_not_block_drain() {
        let b = buttons();
        let mut m = motors();
        let mut drive = DriveLoop::default();
        let front = b.button(FRONT).unwrap();
        front.set_change(true);
        front.set_busy(true);

        drive.step(&b, &mut m, 0, 0);

        assert_eq!(m.direction_of(FRONT), Some(Direction::Forward));
        assert!(front.is_busy());
    }
}
