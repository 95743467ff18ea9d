/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the startup RAM self-tests.

--*/

#![no_std]

mod checkerboard;
mod env;
mod march_c;

pub use checkerboard::CheckerboardTest;
pub use env::TestEnv;
pub use march_c::{MarchCMinusTest, MarchCTest};
pub use ramtest_drivers::RamSpan;
