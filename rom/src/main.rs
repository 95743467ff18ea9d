/*++

Licensed under the Apache-2.0 license.

File Name:

    main.rs

Abstract:

    File contains main entry point for the startup RAM test ROM.

Environment:

    ROM

--*/

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(feature = "std"), no_main)]

use ramtest_drivers::{FatalReset, RamSpan, Wdt};

#[cfg(all(not(feature = "std"), feature = "riscv"))]
core::arch::global_asm!(include_str!("start.S"));

mod print;
mod rom_env;

use rom_env::RomEnv;

#[cfg(feature = "std")]
pub fn main() {}

const BANNER: &str = r#"
Running startup RAM test ...
"#;

/// Invocation hook: the first code reached after `start.S` parks the boot
/// stack in boot-scratch RAM, strictly before `.data`/`.bss` initialization.
/// Returns into `launch_next_stage` on a pass; never returns on a failure.
#[no_mangle]
pub extern "C" fn rom_entry() -> ! {
    cprintln!("{}", BANNER);

    // Keep the watchdog timers from expiring mid-sweep.
    Wdt::configure();

    let span = match RamSpan::from_layout() {
        Ok(span) => span,
        Err(e) => handle_fatal_error(e.into()),
    };

    // Safety: nothing else runs yet; the test owns the whole span.
    let mut env = unsafe { RomEnv::new() };

    #[cfg(feature = "checkerboard")]
    {
        cprintln!("[test] Checkerboard over {} bytes", span.len() as u32);
        ramtest_selftest::CheckerboardTest::new(span).execute(&mut env);
    }
    #[cfg(all(not(feature = "checkerboard"), feature = "march-c-minus"))]
    {
        cprintln!("[test] March-C (minus) over {} bytes", span.len() as u32);
        ramtest_selftest::MarchCMinusTest::new(span).execute(&mut env);
    }
    #[cfg(all(not(feature = "checkerboard"), not(feature = "march-c-minus")))]
    {
        cprintln!("[test] March-C over {} bytes", span.len() as u32);
        ramtest_selftest::MarchCTest::new(span).execute(&mut env);
    }

    Wdt::refresh();

    cprintln!("[exit] RAM test passed");
    launch_next_stage()
}

/// Hand control to the next stage of device startup.
fn launch_next_stage() -> ! {
    #[cfg(all(not(feature = "std"), feature = "riscv"))]
    {
        // Function is defined in start.S
        extern "C" {
            fn exit_rom() -> !;
        }
        unsafe { exit_rom() }
    }

    #[cfg(any(feature = "std", not(feature = "riscv")))]
    loop {
        core::hint::spin_loop();
    }
}

/// Configuration-time failures (an invalid span) are handled the same way as
/// a memory fault: nothing to report to, so reset. The code is printed on
/// emulator builds only.
fn handle_fatal_error(_code: u32) -> ! {
    cprintln!("ROM Fatal Error: 0x{:08X}", _code);
    FatalReset::trigger()
}

#[panic_handler]
#[inline(never)]
#[cfg(not(feature = "std"))]
fn rom_panic(_: &core::panic::PanicInfo) -> ! {
    cprintln!("Panic!!");
    FatalReset::trigger()
}
