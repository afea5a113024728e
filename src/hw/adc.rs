// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Potentiometer sampling on the RP2040's 12-bit ADC.
//!
//! Speed commands are 16-bit, so raw conversions are widened with [`widen_12bit`] before they
//! leave this module.

/// Stretch a 12-bit sample to the full 16-bit range (0 -> 0, 4095 -> 65535).
#[inline]
pub const fn widen_12bit(raw: u16) -> u16 {
    let raw = raw & 0x0FFF;
    (raw << 4) | (raw >> 8)
}

#[cfg(target_os = "none")]
pub use board::Potentiometers;

#[cfg(target_os = "none")]
mod board {
    use rp2040_hal::adc::{Adc, AdcPin};

    use super::widen_12bit;
    use crate::hw::pins::{PotPinBack, PotPinFront};

    /// ADC plus the two speed potentiometers.
    pub struct Potentiometers {
        adc: Adc,
        front: AdcPin<PotPinFront>,
        back: AdcPin<PotPinBack>,
    }

    impl Potentiometers {
        pub fn new(adc: Adc, front: AdcPin<PotPinFront>, back: AdcPin<PotPinBack>) -> Self {
            Self { adc, front, back }
        }

        /// Blocking read of both wipers as `(front, back)` 16-bit speeds.
        ///
        /// A failed conversion reads as 0.
        pub fn read(&mut self) -> (u16, u16) {
            let front = self.adc.read(&mut self.front).unwrap_or(0);
            let back = self.adc.read(&mut self.back).unwrap_or(0);
            (widen_12bit(front), widen_12bit(back))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_hits_both_ends() {
        assert_eq!(widen_12bit(0), 0);
        assert_eq!(widen_12bit(4095), u16::MAX);
    }

    #[test]
    fn widen_is_monotonic_at_midscale() {
        assert_eq!(widen_12bit(0x800), 0x8008);
        assert!(widen_12bit(0x801) > widen_12bit(0x800));
    }
}
