/*++

Licensed under the Apache-2.0 license.

File Name:

    ram_access.rs

Abstract:

    File contains raw volatile access to the physical RAM under test.

--*/

/// Direct physical RAM access.
///
/// Every access goes through a volatile pointer so the compiler can neither
/// elide nor reorder the read/write sequences the test algorithms depend on.
pub enum DirectRam {}

impl DirectRam {
    /// Read a byte from physical address `addr`.
    ///
    /// # Safety
    ///
    /// `addr` must be a valid, byte-readable RAM address on the target.
    #[inline(always)]
    pub unsafe fn read_byte(addr: u32) -> u8 {
        core::ptr::read_volatile(addr as *const u8)
    }

    /// Write a byte to physical address `addr`.
    ///
    /// # Safety
    ///
    /// `addr` must be a valid, byte-writable RAM address on the target, and
    /// must not hold live program state (the caller owns the whole span).
    #[inline(always)]
    pub unsafe fn write_byte(addr: u32, val: u8) {
        core::ptr::write_volatile(addr as *mut u8, val);
    }
}
