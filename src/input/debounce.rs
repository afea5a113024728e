// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking debouncer for mechanical switches.
//!
//! Polls a level once per millisecond and returns it once it has held for `window`
//! consecutive samples. Any change restarts the count. There is no timeout.
//!
//! Worst-case latency: a clean edge costs `window` ms plus `window + 1` reads. Every bounce
//! restarts the window, so the call returns `window` ms after the last bounce. This runs inside
//! the GPIO interrupt handler, which is blocked for that long.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, PinState};

/// Default stabilization window in milliseconds.
pub const DEFAULT_WINDOW_MS: u32 = 50;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Debouncer {
    window_ms: u32,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self { window_ms }
    }

    #[inline]
    pub const fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Wait until `pin` is stable and return its level. Read errors sample as low.
    pub fn settle<P, D>(&self, pin: &mut P, delay: &mut D) -> PinState
    where
        P: InputPin,
        D: DelayNs,
    {
        self.settle_with(|| pin.is_high().unwrap_or(false), delay)
    }

    /// Same as [`Debouncer::settle`] with an arbitrary level source.
    pub fn settle_with<R, D>(&self, mut read: R, delay: &mut D) -> PinState
    where
        R: FnMut() -> bool,
        D: DelayNs,
    {
        let mut candidate = read();
        let mut stable = 0;

        while stable < self.window_ms {
            delay.delay_ms(1);
            let level = read();
            if level == candidate {
                stable += 1;
            } else {
                candidate = level;
                stable = 0;
            }
        }

        PinState::from(candidate)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS)
    }
}
