/*++

Licensed under the Apache-2.0 license.

File Name:

    memory_layout.rs

Abstract:

    The file contains the layout of memory. The constants defined
    in this file define the memory layout.

--*/

//
// Memory Addresses
//
pub const RAM_ORG: u32 = 0x2000_0000;
pub const BSRAM_ORG: u32 = 0x2004_0000;
pub const IWDG_ORG: u32 = 0x4000_3000;
pub const WWDG_ORG: u32 = 0x4000_2C00;

//
// Memory Sizes In Bytes
//
pub const RAM_SIZE: u32 = 4 * 1024;
pub const BSRAM_SIZE: u32 = 1024;

/// Last byte of the RAM span under test (inclusive).
pub const RAM_END: u32 = RAM_ORG + RAM_SIZE - 1;

/// Top of the boot stack. The boot-scratch RAM is separate from the tested
/// span; the startup code parks the stack here so the test may destroy the
/// whole of main RAM.
pub const BSRAM_STACK_TOP: u32 = BSRAM_ORG + BSRAM_SIZE;

#[test]
#[allow(clippy::assertions_on_constants)]
fn mem_layout_test_ram() {
    assert!(RAM_SIZE > 0);
    assert_eq!(RAM_END - RAM_ORG + 1, RAM_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mem_layout_test_bsram_disjoint() {
    // The boot stack must live outside the span under test.
    assert!(BSRAM_ORG > RAM_END || BSRAM_ORG + BSRAM_SIZE <= RAM_ORG);
}
