/*++

Licensed under the Apache-2.0 license.

File Name:

    print.rs

Abstract:

    File contains support routines and macros to print from the ROM.

--*/

use core::convert::Infallible;
use ufmt::uWrite;

#[derive(Default)]
pub struct RomPrinter;

impl uWrite for RomPrinter {
    type Error = Infallible;

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(not(feature = "std"))]
    #[inline(never)]
    fn write_str(&mut self, _str: &str) -> Result<(), Self::Error> {
        #[cfg(feature = "emu")]
        for b in _str.bytes() {
            // Emulator test-bench character output register.
            const STDOUT: *mut u32 = 0x4000_00C8 as *mut u32;
            unsafe { core::ptr::write_volatile(STDOUT, b as u32) };
        }
        Ok(())
    }

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(feature = "std")]
    fn write_str(&mut self, str: &str) -> Result<(), Self::Error> {
        print!("{str}");
        Ok(())
    }
}

#[macro_export]
macro_rules! cprint {
    ($($tt:tt)*) => {{
        let _ = ufmt::uwrite!(&mut $crate::print::RomPrinter::default(), $($tt)*);
    }}
}

#[macro_export]
macro_rules! cprintln {
    ($($tt:tt)*) => {{
        let _ = ufmt::uwriteln!(&mut $crate::print::RomPrinter::default(), $($tt)*);
    }}
}
