/*++

Licensed under the Apache-2.0 license.

File Name:

    env.rs

Abstract:

    File contains the environment trait handed to the RAM self-tests.

--*/

/// Environment the RAM self-tests run against.
///
/// On the target this is physical RAM, the watchdog timers and the
/// illegal-instruction reset; on the host it is a modeled span whose "reset"
/// is a catchable abort. The algorithms themselves never branch on which one
/// they were given.
pub trait TestEnv {
    /// Read the byte at `addr`.
    fn read(&mut self, addr: u32) -> u8;

    /// Write `val` to the byte at `addr`.
    fn write(&mut self, addr: u32, val: u8);

    /// Reload any active watchdog timers. Called at test entry and again
    /// just before the success exit.
    fn keepalive(&mut self) {}

    /// Irrecoverable-fault action taken on a verification mismatch.
    ///
    /// Must not return: after a mismatch no value held in the span (or
    /// derived from it) is trustworthy, so the only correct continuation is
    /// a hardware reset (or its simulation).
    fn fatal(&mut self) -> !;
}
