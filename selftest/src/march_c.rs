/*++

Licensed under the Apache-2.0 license.

File Name:

    march_c.rs

Abstract:

    File contains the March-C RAM test and its reduced "minus" variant.

--*/

use crate::env::TestEnv;
use ramtest_drivers::RamSpan;

/// All-zeroes cell value.
const ZEROES: u8 = 0x00;

/// All-ones cell value.
const ONES: u8 = 0xFF;

/// Full seven-phase March-C RAM test.
///
/// Ordered directional sweeps give coverage of stuck-at, transition and
/// coupling faults plus a share of address-decoder faults:
///
/// 1. descending: write zeroes
/// 2. ascending:  read zeroes, write ones
/// 3. ascending:  read ones, write zeroes, re-verify
/// 4. descending: read zeroes
/// 5. descending: read zeroes, write ones
/// 6. descending: read ones, write zeroes, re-verify
/// 7. ascending:  read zeroes
///
/// The sweep directions of phases 2, 3, 5, 6 and 7 are load-bearing; phases
/// 1 and 4 are direction-insensitive and sweep descending here.
#[derive(Debug, Copy, Clone)]
pub struct MarchCTest {
    span: RamSpan,
}

impl MarchCTest {
    pub fn new(span: RamSpan) -> Self {
        Self { span }
    }

    /// Execute the test. Destroys the entire span; on success it is left
    /// all-zero. On a verification mismatch `env.fatal()` is taken
    /// immediately and this function does not return.
    pub fn execute<E: TestEnv>(&self, env: &mut E) {
        execute_phases(self.span, env, true);
    }
}

/// March-C "minus" variant.
///
/// Identical to [`MarchCTest`] except that phase 4 (the descending
/// read-zeroes sweep) is skipped, trading a small amount of address-decoder
/// fault coverage for one fewer full sweep of the span.
#[derive(Debug, Copy, Clone)]
pub struct MarchCMinusTest {
    span: RamSpan,
}

impl MarchCMinusTest {
    pub fn new(span: RamSpan) -> Self {
        Self { span }
    }

    /// Execute the test. See [`MarchCTest::execute`].
    pub fn execute<E: TestEnv>(&self, env: &mut E) {
        execute_phases(self.span, env, false);
    }
}

fn execute_phases<E: TestEnv>(span: RamSpan, env: &mut E, full: bool) {
    env.keepalive();

    // Phase 1: write zeroes, descending (order not important here).
    sweep_desc(span, env, |env, addr| {
        env.write(addr, ZEROES);
    });

    // Phase 2: read zeroes, write ones, ascending. The ones are written by
    // inverting the just-verified zeroes value.
    sweep_asc(span, env, |env, addr| {
        verify_invert(env, addr, ZEROES, false);
    });

    // Phase 3: read ones, write zeroes, ascending. The written result is
    // independently re-verified rather than trusting the inversion to have
    // taken effect.
    sweep_asc(span, env, |env, addr| {
        verify_invert(env, addr, ONES, true);
    });

    if full {
        // Phase 4: read zeroes, descending (order not important here).
        sweep_desc(span, env, |env, addr| {
            verify(env, addr, ZEROES);
        });
    }

    // Phase 5: read zeroes, write ones, descending.
    sweep_desc(span, env, |env, addr| {
        verify_invert(env, addr, ZEROES, false);
    });

    // Phase 6: read ones, write zeroes, descending, re-verifying the result.
    sweep_desc(span, env, |env, addr| {
        verify_invert(env, addr, ONES, true);
    });

    // Phase 7: read zeroes, ascending.
    sweep_asc(span, env, |env, addr| {
        verify(env, addr, ZEROES);
    });

    env.keepalive();
}

/// Sweep the span ascending from `start` to `end` inclusive. The bound
/// comparison happens before the cursor steps, so the cursor can never wrap
/// past either end of the address space.
fn sweep_asc<E: TestEnv>(span: RamSpan, env: &mut E, mut op: impl FnMut(&mut E, u32)) {
    let mut addr = span.start();
    loop {
        op(env, addr);
        if addr == span.end() {
            break;
        }
        addr += 1;
    }
}

/// Sweep the span descending from `end` to `start` inclusive.
fn sweep_desc<E: TestEnv>(span: RamSpan, env: &mut E, mut op: impl FnMut(&mut E, u32)) {
    let mut addr = span.end();
    loop {
        op(env, addr);
        if addr == span.start() {
            break;
        }
        addr -= 1;
    }
}

/// Read `addr` and fail the test unless it holds `expected`.
fn verify<E: TestEnv>(env: &mut E, addr: u32, expected: u8) {
    if env.read(addr) != expected {
        env.fatal();
    }
}

/// Read `addr`, fail unless it holds `expected`, then write the complement
/// back. With `reverify` the cell is read once more and the test fails
/// unless the inversion actually took effect.
fn verify_invert<E: TestEnv>(env: &mut E, addr: u32, expected: u8, reverify: bool) {
    let val = env.read(addr);
    if val != expected {
        env.fatal();
    }
    env.write(addr, !val);
    if reverify && env.read(addr) != !expected {
        env.fatal();
    }
}
