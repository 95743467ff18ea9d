/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the RAM test driver library.

--*/

#![cfg_attr(not(test), no_std)]

mod error;
pub mod memory_layout;
mod ram_access;
mod reset;
mod span;
pub mod wdt;

pub use error::{RamTestError, RamTestResult};
pub use ram_access::DirectRam;
pub use reset::FatalReset;
pub use span::RamSpan;
pub use wdt::Wdt;
