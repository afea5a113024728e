// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! UART0 debug port and the `log` backend that writes to it.
//!
//! Lines are `[LEVEL] target: message` with CRLF endings. The port sits behind a
//! `critical_section::Mutex` because the GPIO interrupt logs too.
//!
//! To access the terminal on the host machine, connect a 3.3 V USB-serial adapter to GPIO0/GPIO1
//! and use
//! ```text
//! $ screen /dev/ttyUSB0 115200
//! ```

use core::cell::RefCell;
use core::fmt::{self, Write};

use critical_section::Mutex;
use log::{LevelFilter, Log, Metadata, Record};
use rp2040_hal::pac::UART0;
use rp2040_hal::uart::{Enabled, UartPeripheral};

use crate::hw::pins::{UartRx, UartTx};

pub type DebugUart = UartPeripheral<Enabled, UART0, (UartTx, UartRx)>;

pub struct Usart {
    uart: DebugUart,
}

impl Usart {
    pub fn new(uart: DebugUart) -> Self {
        Self { uart }
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.uart.write_full_blocking(s.as_bytes());
    }
}

impl fmt::Write for Usart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}

/// `log` backend over [`Usart`].
pub struct UartLogger {
    port: Mutex<RefCell<Option<Usart>>>,
}

static LOGGER: UartLogger = UartLogger {
    port: Mutex::new(RefCell::new(None)),
};

impl UartLogger {
    /// Hand `usart` to the global logger and install it.
    ///
    /// # Safety
    ///
    /// Must be called once, before interrupts that log are unmasked. The Cortex-M0+ has no
    /// compare-and-swap, so the logger is installed with the racy `log` setters.
    pub unsafe fn install(usart: Usart, level: LevelFilter) {
        critical_section::with(|cs| {
            LOGGER.port.borrow_ref_mut(cs).replace(usart);
        });
        // Only fails if a logger is already installed, which leaves that one in place.
        let _ = log::set_logger_racy(&LOGGER);
        log::set_max_level_racy(level);
    }
}

impl Log for UartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        critical_section::with(|cs| {
            if let Some(port) = self.port.borrow_ref_mut(cs).as_mut() {
                let _ = write!(
                    port,
                    "[{}] {}: {}\r\n",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        });
    }

    fn flush(&self) {}
}
