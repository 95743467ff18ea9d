/*++

Licensed under the Apache-2.0 license.

File Name:

    wdt.rs

Abstract:

    File contains API for programming the Independent and Window Watchdog
    Timers around the RAM test.

--*/

use crate::memory_layout::{IWDG_ORG, WWDG_ORG};

/// IWDG key register offset
const IWDG_KR_OFFSET: u32 = 0x00;

/// IWDG prescaler register offset
const IWDG_PR_OFFSET: u32 = 0x04;

/// WWDG control register offset
const WWDG_CR_OFFSET: u32 = 0x00;

/// IWDG key unlocking the prescaler register for writes
const IWDG_KEY_ACCESS: u32 = 0x55;

/// IWDG key reloading the countdown
const IWDG_KEY_REFRESH: u32 = 0xAA;

/// IWDG prescaler divider /64; stretches the countdown period safely past the
/// worst-case duration of a full-RAM test
const IWDG_PRESCALER_DIV64: u32 = 0x04;

bitfield::bitfield! {
    #[derive(PartialEq, Eq, Clone, Copy)]
    /// Window watchdog control register
    pub struct WwdgCr(u32);

    /// Activation bit
    pub wdga, set_wdga: 7;

    /// Downcounter value
    pub u32, counter, set_counter: 6, 0;
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "riscv", target_arch = "riscv32"))] {
        /// # Safety
        ///
        /// `addr` must be a valid watchdog register address on the target.
        unsafe fn write_reg(addr: u32, val: u32) {
            core::ptr::write_volatile(addr as *mut u32, val);
        }
    } else {
        /// Off-target builds have no watchdog peripherals; keepalive is a
        /// no-op.
        unsafe fn write_reg(_addr: u32, _val: u32) {}
    }
}

/// Watchdog Timer keepalive
pub enum Wdt {}

impl Wdt {
    /// Reconfigure the watchdog timers for the duration of the RAM test.
    ///
    /// In case the IWDG and WWDG are enabled at reset, slow the IWDG
    /// prescaler and reload both counters so neither can time out while the
    /// test sweeps the full span. Must be called before the first memory
    /// write.
    pub fn configure() {
        unsafe {
            write_reg(IWDG_ORG + IWDG_KR_OFFSET, IWDG_KEY_ACCESS);
            write_reg(IWDG_ORG + IWDG_PR_OFFSET, IWDG_PRESCALER_DIV64);
            write_reg(IWDG_ORG + IWDG_KR_OFFSET, IWDG_KEY_REFRESH);
            write_reg(WWDG_ORG + WWDG_CR_OFFSET, Self::wwdg_reload().0);
        }
    }

    /// Reload both watchdog counters.
    ///
    /// Called once more near the end of the test so the remaining startup
    /// code inherits a freshly wound timer.
    pub fn refresh() {
        unsafe {
            write_reg(IWDG_ORG + IWDG_KR_OFFSET, IWDG_KEY_REFRESH);
            write_reg(WWDG_ORG + WWDG_CR_OFFSET, Self::wwdg_reload().0);
        }
    }

    /// WWDG control value: counter wound to its maximum. The activation bit
    /// is left clear; writing 0 to it has no effect once the watchdog runs.
    fn wwdg_reload() -> WwdgCr {
        let mut cr = WwdgCr(0);
        cr.set_counter(0x7F);
        cr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wwdg_reload_value() {
        let cr = Wdt::wwdg_reload();
        assert!(!cr.wdga());
        assert_eq!(cr.counter(), 0x7F);
        assert_eq!(cr.0, 0x7F);
    }
}
