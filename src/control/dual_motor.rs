// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-motor controller sharing one TB6612FNG standby line.
//!
//! Motors sit in fixed front and back slots, either of which may be empty. Operations addressed
//! to an identity with no motor do nothing.
//!
//! ```ignore
//! let mut motors = DualMotorController::new(standby, Some(front), Some(back));
//! motors.toggle_direction(front_id);
//! motors.change_speed(SpeedCommand::all(20_000).with_back(5_000));
//! ```

use embedded_hal::digital::OutputPin;

use crate::drivers::{MotorOutput, Standby};
use crate::input::ControlId;
use crate::motors::{Direction, MotorDirectionState};

/// Default speed plus optional per-motor overrides.
///
/// A slot without an override takes the default; with neither, the speed is 0.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SpeedCommand {
    pub speed: Option<u32>,
    pub front: Option<u32>,
    pub back: Option<u32>,
}

impl SpeedCommand {
    /// Same speed for both motors.
    pub const fn all(speed: u32) -> Self {
        Self {
            speed: Some(speed),
            front: None,
            back: None,
        }
    }

    pub const fn with_front(mut self, speed: u32) -> Self {
        self.front = Some(speed);
        self
    }

    pub const fn with_back(mut self, speed: u32) -> Self {
        self.back = Some(speed);
        self
    }

    /// Effective `(front, back)` speeds.
    pub fn resolve(&self) -> (u32, u32) {
        let default = self.speed.unwrap_or(0);
        (self.front.unwrap_or(default), self.back.unwrap_or(default))
    }
}

/// Which slot a control identity lives in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Slot {
    Front,
    Back,
}

pub struct DualMotorController<S, F, B>
where
    S: OutputPin,
    F: MotorOutput,
    B: MotorOutput,
{
    standby: Standby<S>,
    front: Option<MotorDirectionState<F>>,
    back: Option<MotorDirectionState<B>>,
}

impl<S, F, B> DualMotorController<S, F, B>
where
    S: OutputPin,
    F: MotorOutput,
    B: MotorOutput,
{
    /// Take ownership of the motors and enable the H-bridge.
    pub fn new(
        mut standby: Standby<S>,
        front: Option<MotorDirectionState<F>>,
        back: Option<MotorDirectionState<B>>,
    ) -> Self {
        standby.enable();
        Self {
            standby,
            front,
            back,
        }
    }

    /// Slot of the motor addressed by `id`. Front wins if both claim it.
    fn slot(&self, id: ControlId) -> Option<Slot> {
        if self.front.as_ref().is_some_and(|m| m.uses(id)) {
            Some(Slot::Front)
        } else if self.back.as_ref().is_some_and(|m| m.uses(id)) {
            Some(Slot::Back)
        } else {
            None
        }
    }

    /// Advance the direction cycle of the motor addressed by `id`.
    ///
    /// Returns the new direction, or `None` if no motor uses `id`.
    pub fn toggle_direction(&mut self, id: ControlId) -> Option<Direction> {
        let direction = match self.slot(id) {
            Some(Slot::Front) => self.front.as_mut()?.toggle_direction(),
            Some(Slot::Back) => self.back.as_mut()?.toggle_direction(),
            None => {
                log::debug!("toggle for unknown {}", id);
                return None;
            }
        };

        log::info!("toggle direction on motor {}: {}", id, direction);
        Some(direction)
    }

    /// Write a speed to the motor addressed by `id`. Masked to 16 bits.
    pub fn set_speed(&mut self, id: ControlId, magnitude: u32) {
        match self.slot(id) {
            Some(Slot::Front) => self.front.iter_mut().for_each(|m| m.set_speed(magnitude)),
            Some(Slot::Back) => self.back.iter_mut().for_each(|m| m.set_speed(magnitude)),
            None => {}
        }
    }

    /// Write speeds to every configured motor.
    pub fn change_speed(&mut self, cmd: SpeedCommand) {
        let (front, back) = cmd.resolve();
        if let Some(m) = self.front.as_mut() {
            m.set_speed(front);
        }
        if let Some(m) = self.back.as_mut() {
            m.set_speed(back);
        }
    }

    pub fn direction_of(&self, id: ControlId) -> Option<Direction> {
        match self.slot(id)? {
            Slot::Front => self.front.as_ref().map(|m| m.direction()),
            Slot::Back => self.back.as_ref().map(|m| m.direction()),
        }
    }

    /// Commanded speed of the motor addressed by `id`.
    pub fn speed_of(&self, id: ControlId) -> Option<u16> {
        match self.slot(id)? {
            Slot::Front => self.front.as_ref().map(|m| m.speed()),
            Slot::Back => self.back.as_ref().map(|m| m.speed()),
        }
    }

    #[inline]
    pub fn front(&self) -> Option<&MotorDirectionState<F>> {
        self.front.as_ref()
    }

    #[inline]
    pub fn back(&self) -> Option<&MotorDirectionState<B>> {
        self.back.as_ref()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.standby.is_enabled()
    }
}
