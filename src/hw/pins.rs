// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the Raspberry Pi Pico driving a TB6612FNG module.
//!
//! GPIO numbers must match [`crate::config::PICO`], which carries the same assignments as
//! runtime identities.

use rp2040_hal::gpio::{
    bank0::{Gpio0, Gpio1, Gpio26, Gpio27, Gpio4, Gpio8},
    DynPinId, FunctionNull, FunctionSioInput, FunctionSioOutput, FunctionUart, Pin, Pins,
    PullDown, PullNone,
};

/// Push-pull output with its pin number erased so both motors share one type.
pub type OutPin = Pin<DynPinId, FunctionSioOutput, PullDown>;
/// Pull-down button input.
pub type ButtonPin = Pin<DynPinId, FunctionSioInput, PullDown>;
pub type PotPinFront = Pin<Gpio27, FunctionSioInput, PullNone>;
pub type PotPinBack = Pin<Gpio26, FunctionSioInput, PullNone>;
pub type UartTx = Pin<Gpio0, FunctionUart, PullDown>;
pub type UartRx = Pin<Gpio1, FunctionUart, PullDown>;

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let raw = Pins::new(pac.IO_BANK0, pac.PADS_BANK0, sio.gpio_bank0, &mut pac.RESETS);
/// let pins = BoardPins::new(raw);
/// ```
pub struct BoardPins {
    pub led: OutPin,
    pub uart0: Uart0Pins,
    pub front: FrontMotorPins,
    pub back: BackMotorPins,
    pub standby: OutPin,
    pub buttons: ButtonPins,
    pub pots: PotPins,
}

/// Debug UART
pub struct Uart0Pins {
    pub tx: UartTx,
    pub rx: UartRx,
}

/// Channel A: PWMA on PWM slice 2 channel A
pub struct FrontMotorPins {
    pub pwm: Pin<Gpio4, FunctionNull, PullDown>,
    pub in1: OutPin,
    pub in2: OutPin,
}

/// Channel B: PWMB on PWM slice 4 channel A
pub struct BackMotorPins {
    pub pwm: Pin<Gpio8, FunctionNull, PullDown>,
    pub in1: OutPin,
    pub in2: OutPin,
}

pub struct ButtonPins {
    pub front: ButtonPin,
    pub back: ButtonPin,
}

pub struct PotPins {
    pub front: PotPinFront,
    pub back: PotPinBack,
}

impl BoardPins {
    pub fn new(pins: Pins) -> Self {
        Self {
            led: pins.gpio25.into_push_pull_output().into_dyn_pin(),

            uart0: Uart0Pins {
                tx: pins.gpio0.into_function(),
                rx: pins.gpio1.into_function(),
            },

            front: FrontMotorPins {
                pwm: pins.gpio4,
                in1: pins.gpio5.into_push_pull_output().into_dyn_pin(),
                in2: pins.gpio6.into_push_pull_output().into_dyn_pin(),
            },

            back: BackMotorPins {
                pwm: pins.gpio8,
                in1: pins.gpio9.into_push_pull_output().into_dyn_pin(),
                in2: pins.gpio10.into_push_pull_output().into_dyn_pin(),
            },

            standby: pins.gpio15.into_push_pull_output().into_dyn_pin(),

            buttons: ButtonPins {
                front: pins.gpio17.into_pull_down_input().into_dyn_pin(),
                back: pins.gpio16.into_pull_down_input().into_dyn_pin(),
            },

            pots: PotPins {
                front: pins.gpio27.into_floating_input(),
                back: pins.gpio26.into_floating_input(),
            },
        }
    }
}
