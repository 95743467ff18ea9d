/*++

Licensed under the Apache-2.0 license.

File Name:

    reset.rs

Abstract:

    File contains the reset-on-failure primitive.

--*/

/// Fail-safe reset control
pub enum FatalReset {}

impl FatalReset {
    /// Force a hardware reset by executing an architecturally illegal
    /// instruction.
    ///
    /// This is the sole failure action of the RAM test: once a verification
    /// mismatch has been observed, no value held in the failing memory (an
    /// error code, a saved stack) can be trusted, so nothing is reported and
    /// nothing is restored. The processor faults on the illegal encoding and
    /// performs a hardware-level reset; from outside the device this is
    /// indistinguishable from an unexpected reboot.
    ///
    /// # Returns
    ///
    /// This method does not return
    pub fn trigger() -> ! {
        #[cfg(all(feature = "riscv", target_arch = "riscv32"))]
        unsafe {
            // `unimp` is guaranteed to raise an illegal-instruction
            // exception on every RISC-V implementation.
            core::arch::asm!("unimp", options(noreturn));
        }

        // Host builds have no reset line to pull; park forever. Test
        // environments never reach this path, they simulate the reset in
        // their TestEnv implementation instead.
        #[cfg(not(all(feature = "riscv", target_arch = "riscv32")))]
        loop {
            core::hint::spin_loop();
        }
    }
}
