/*++

Licensed under the Apache-2.0 license.

File Name:

    rom_env.rs

Abstract:

    File contains the ROM implementation of the RAM test environment.

Environment:

    ROM

--*/

use ramtest_drivers::{DirectRam, FatalReset, Wdt};
use ramtest_selftest::TestEnv;

/// Test environment over the real hardware: physical RAM, the watchdog
/// timers, and the illegal-instruction reset.
pub struct RomEnv {
    _priv: (),
}

impl RomEnv {
    /// # Safety
    ///
    /// The caller must be the only code executing on the device, and the
    /// addresses handed to this environment must lie inside physical RAM
    /// holding no live program state.
    pub unsafe fn new() -> Self {
        Self { _priv: () }
    }
}

impl TestEnv for RomEnv {
    fn read(&mut self, addr: u32) -> u8 {
        // Safety: addresses come from a validated RamSpan; see RomEnv::new.
        unsafe { DirectRam::read_byte(addr) }
    }

    fn write(&mut self, addr: u32, val: u8) {
        // Safety: addresses come from a validated RamSpan; see RomEnv::new.
        unsafe { DirectRam::write_byte(addr, val) }
    }

    fn keepalive(&mut self) {
        Wdt::refresh();
    }

    fn fatal(&mut self) -> ! {
        FatalReset::trigger()
    }
}
