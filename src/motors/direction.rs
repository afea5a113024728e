// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor direction and its toggle cycle.

use core::fmt;

use crate::drivers::DriveSignals;

/// Commanded direction of one motor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Stopped,
    Forward,
    Backward,
}

/// A non-stopped direction. Remembers where to resume after a stop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Heading {
    Forward,
    Backward,
}

impl Heading {
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Heading::Forward => Heading::Backward,
            Heading::Backward => Heading::Forward,
        }
    }
}

impl From<Heading> for Direction {
    fn from(h: Heading) -> Self {
        match h {
            Heading::Forward => Direction::Forward,
            Heading::Backward => Direction::Backward,
        }
    }
}

impl Direction {
    /// The running heading, or `None` when stopped.
    pub const fn heading(self) -> Option<Heading> {
        match self {
            Direction::Stopped => None,
            Direction::Forward => Some(Heading::Forward),
            Direction::Backward => Some(Heading::Backward),
        }
    }

    /// Signals to drive for this direction at `magnitude`. Stopped always drives zero.
    pub const fn signals(self, magnitude: u16) -> DriveSignals {
        match self {
            Direction::Forward => DriveSignals {
                in1: false,
                in2: true,
                magnitude,
            },
            Direction::Backward => DriveSignals {
                in1: true,
                in2: false,
                magnitude,
            },
            Direction::Stopped => DriveSignals::STOP,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Stopped => "STOPPED",
            Direction::Forward => "FORWARD",
            Direction::Backward => "BACKWARD",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_ignores_magnitude() {
        assert_eq!(Direction::Stopped.signals(40_000), DriveSignals::STOP);
    }

    #[test]
    fn forward_and_backward_lines() {
        let f = Direction::Forward.signals(300);
        assert_eq!((f.in1, f.in2, f.magnitude), (false, true, 300));
        let b = Direction::Backward.signals(300);
        assert_eq!((b.in1, b.in2, b.magnitude), (true, false, 300));
    }
}
