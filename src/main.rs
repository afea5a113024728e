// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! RP2040 entry point.
//!
//! Brings up clocks, the debug UART, both H-bridge channels and the potentiometers, arms the
//! button edge interrupts, then runs the polling loop forever. Any startup failure halts before
//! the loop starts.
//!
//! Host builds get an empty `main` so `cargo test` can build the workspace.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(not(target_os = "none"))]
fn main() {}

#[cfg(target_os = "none")]
mod firmware {
    use core::cell::RefCell;

    use critical_section::Mutex;
    use embedded_hal::delay::DelayNs;
    use panic_halt as _;

    use rp2040_hal::{
        self as hal,
        adc::AdcPin,
        clocks::init_clocks_and_plls,
        fugit::RateExtU32,
        gpio::{Interrupt, Pins},
        pac::{self, interrupt},
        pwm::Slices,
        uart::{DataBits, StopBits, UartConfig, UartPeripheral},
        Adc, Clock, Sio, Timer, Watchdog,
    };

    use twinmotor::config::{PICO, UART_BAUD, XTAL_FREQ_HZ};
    use twinmotor::control::{DriveLoop, DualMotorController};
    use twinmotor::drivers::{Standby, Tb6612Channel};
    use twinmotor::hw::pins::ButtonPin;
    use twinmotor::hw::{BoardPins, Led, Potentiometers, UartLogger, Usart};
    use twinmotor::input::{ButtonInputController, Debouncer, EdgeOutcome, InputId};
    use twinmotor::motors::MotorDirectionState;

    /// Second stage bootloader for the Pico's W25Q080 flash.
    #[link_section = ".boot2"]
    #[used]
    pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

    static BUTTONS: ButtonInputController<2> =
        ButtonInputController::new(PICO.buttons(), Debouncer::new(PICO.debounce_ms));

    /// What the GPIO interrupt needs besides the flags.
    struct IrqContext {
        buttons: [(InputId, ButtonPin); 2],
        timer: Timer,
    }

    static IRQ_CONTEXT: Mutex<RefCell<Option<IrqContext>>> = Mutex::new(RefCell::new(None));

    fn halt() -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    #[hal::entry]
    fn main() -> ! {
        let Some(mut pac) = pac::Peripherals::take() else {
            halt()
        };

        // Clocks
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let Ok(clocks) = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        ) else {
            halt()
        };

        // GPIO
        let sio = Sio::new(pac.SIO);
        let pins = BoardPins::new(Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        ));

        // UART0 (DBG)
        let uart_cfg = UartConfig::new(UART_BAUD.Hz(), DataBits::Eight, None, StopBits::One);
        let uart_pins = (pins.uart0.tx, pins.uart0.rx);
        let Ok(uart) = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
            .enable(uart_cfg, clocks.peripheral_clock.freq())
        else {
            halt()
        };
        // SAFETY: single call, GPIO interrupt still masked.
        unsafe { UartLogger::install(Usart::new(uart), PICO.log_level) };

        if let Err(e) = PICO.validate() {
            log::error!("bad configuration: {}", e);
            halt();
        }

        let sys_hz = clocks.system_clock.freq().to_Hz();
        let top = match PICO.pwm_top(sys_hz) {
            Ok(top) => top,
            Err(e) => {
                log::error!("{}", e);
                halt()
            }
        };

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

        // PWM: slice 2 for PWMA, slice 4 for PWMB
        let mut slices = Slices::new(pac.PWM, &mut pac.RESETS);
        slices.pwm2.set_top(top);
        slices.pwm2.enable();
        slices.pwm4.set_top(top);
        slices.pwm4.enable();
        let mut front_pwm = slices.pwm2.channel_a;
        front_pwm.output_to(pins.front.pwm);
        let mut back_pwm = slices.pwm4.channel_a;
        back_pwm.output_to(pins.back.pwm);

        // Motors
        let front = MotorDirectionState::new(
            PICO.front.control(),
            Tb6612Channel::new(pins.front.in1, pins.front.in2, front_pwm),
        );
        let back = MotorDirectionState::new(
            PICO.back.control(),
            Tb6612Channel::new(pins.back.in1, pins.back.in2, back_pwm),
        );
        let (front, back) = match (front, back) {
            (Ok(front), Ok(back)) => (front, back),
            (Err(e), _) | (_, Err(e)) => {
                log::error!("motor setup: {}", e);
                halt()
            }
        };
        let mut motors =
            DualMotorController::new(Standby::new(pins.standby), Some(front), Some(back));

        // Potentiometers
        let adc = Adc::new(pac.ADC, &mut pac.RESETS);
        let (Ok(front_pot), Ok(back_pot)) =
            (AdcPin::new(pins.pots.front), AdcPin::new(pins.pots.back))
        else {
            log::error!("potentiometer pins are not ADC inputs");
            halt()
        };
        let mut pots = Potentiometers::new(adc, front_pot, back_pot);

        // Buttons
        let front_button = pins.buttons.front;
        let back_button = pins.buttons.back;
        for pin in [&front_button, &back_button] {
            pin.set_interrupt_enabled(Interrupt::EdgeHigh, true);
            pin.set_interrupt_enabled(Interrupt::EdgeLow, true);
        }
        critical_section::with(|cs| {
            IRQ_CONTEXT.borrow_ref_mut(cs).replace(IrqContext {
                buttons: [
                    (InputId::new(PICO.front_button), front_button),
                    (InputId::new(PICO.back_button), back_button),
                ],
                timer,
            });
        });
        // SAFETY: the handler only touches IRQ_CONTEXT and BUTTONS, both initialized.
        unsafe { pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0) };

        let mut led = Led::active_high(pins.led);
        led.on();
        log::info!(
            "twinmotor up: sys {} Hz, PWM top {}, debounce {} ms",
            sys_hz,
            top,
            BUTTONS.debouncer().window_ms()
        );

        let mut drive = DriveLoop::new(PICO.speed_deadband);
        loop {
            let (front, back) = pots.read();
            drive.step(&BUTTONS, &mut motors, front, back);
            timer.delay_ms(PICO.loop_period_ms);
        }
    }

    #[interrupt]
    fn IO_IRQ_BANK0() {
        // Debouncing blocks for tens of milliseconds, so hold the lock only to move the context.
        let Some(mut ctx) = critical_section::with(|cs| IRQ_CONTEXT.borrow_ref_mut(cs).take())
        else {
            return;
        };

        let timer = &mut ctx.timer;
        for (input, pin) in ctx.buttons.iter_mut() {
            if pin.interrupt_status(Interrupt::EdgeHigh) {
                pin.clear_interrupt(Interrupt::EdgeHigh);
                let outcome = BUTTONS.on_rising_edge(*input, pin, timer);
                if let EdgeOutcome::Pressed(id) = outcome {
                    log::debug!("press on {} for motor {}", input, id);
                }
            }
            if pin.interrupt_status(Interrupt::EdgeLow) {
                pin.clear_interrupt(Interrupt::EdgeLow);
                BUTTONS.on_falling_edge(*input, pin, timer);
            }
        }

        critical_section::with(|cs| {
            IRQ_CONTEXT.borrow_ref_mut(cs).replace(ctx);
        });
    }
}
