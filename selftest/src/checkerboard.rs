/*++

Licensed under the Apache-2.0 license.

File Name:

    checkerboard.rs

Abstract:

    File contains the Checkerboard RAM test.

--*/

use crate::env::TestEnv;
use ramtest_drivers::RamSpan;

/// First checkerboard pattern (0b0101_0101).
pub const PATTERN_FIRST: u8 = 0x55;

/// Second checkerboard pattern (0b1010_1010), the complement of the first.
pub const PATTERN_SECOND: u8 = 0xAA;

/// Checkerboard RAM test.
///
/// Two full write+verify passes over the span, first with 0x55 and then with
/// its complement 0xAA, so that every cell is driven to both logic values and
/// adjacent cells always hold differing bits. Covers stuck-at faults and
/// gross bridging between neighbours; cheaper but weaker than March-C.
#[derive(Debug, Copy, Clone)]
pub struct CheckerboardTest {
    span: RamSpan,
}

impl CheckerboardTest {
    pub fn new(span: RamSpan) -> Self {
        Self { span }
    }

    /// Execute the test. Destroys the entire span; on success the span is
    /// left filled with 0xAA, the pattern of the second and final write
    /// pass.
    ///
    /// On a verification mismatch `env.fatal()` is taken immediately and
    /// this function does not return.
    pub fn execute<E: TestEnv>(&self, env: &mut E) {
        env.keepalive();

        let mut pattern = PATTERN_FIRST;
        loop {
            // Fill the entire span with the pattern, descending.
            let mut addr = self.span.end();
            loop {
                env.write(addr, pattern);
                if addr == self.span.start() {
                    break;
                }
                addr -= 1;
            }

            // Read back every byte and compare to the pattern, descending.
            let mut addr = self.span.end();
            loop {
                if env.read(addr) != pattern {
                    env.fatal();
                }
                if addr == self.span.start() {
                    break;
                }
                addr -= 1;
            }

            // Invert the pattern. When bit 7 is set it became 0xAA, so go
            // back for the second pass; once it inverts back to 0x55 both
            // passes are done.
            pattern = !pattern;
            if pattern & 0x80 == 0 {
                break;
            }
        }

        env.keepalive();
    }
}
