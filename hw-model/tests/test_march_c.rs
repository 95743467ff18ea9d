// Licensed under the Apache-2.0 license

use ramtest_hw_model::{run_test, Access, AccessKind, ModelRam, Outcome, RamSpan};
use ramtest_selftest::{MarchCMinusTest, MarchCTest};

const BASE: u32 = 0x2000_0000;

const ZEROES: u8 = 0x00;
const ONES: u8 = 0xFF;

fn span(len: u32) -> RamSpan {
    RamSpan::new(BASE, BASE + len - 1).unwrap()
}

fn run_full(ram: &mut ModelRam) -> Outcome {
    let test = MarchCTest::new(ram.span());
    run_test(ram, |env| test.execute(env))
}

fn run_minus(ram: &mut ModelRam) -> Outcome {
    let test = MarchCMinusTest::new(ram.span());
    run_test(ram, |env| test.execute(env))
}

/// Accesses performed per cell in each of the seven phases.
const PHASE_ACCESSES: [usize; 7] = [1, 2, 3, 1, 2, 3, 1];

/// Expected access trace of the full seven-phase test over `span`.
fn expected_full_trace(span: RamSpan) -> Vec<Access> {
    let asc = || span.start()..=span.end();
    let desc = || (span.start()..=span.end()).rev();
    let mut trace = Vec::new();
    // Phase 1: write zeroes, descending.
    for addr in desc() {
        trace.push(Access::write(addr, ZEROES));
    }
    // Phase 2: read zeroes, write ones, ascending.
    for addr in asc() {
        trace.push(Access::read(addr, ZEROES));
        trace.push(Access::write(addr, ONES));
    }
    // Phase 3: read ones, write zeroes, re-verify, ascending.
    for addr in asc() {
        trace.push(Access::read(addr, ONES));
        trace.push(Access::write(addr, ZEROES));
        trace.push(Access::read(addr, ZEROES));
    }
    // Phase 4: read zeroes, descending.
    for addr in desc() {
        trace.push(Access::read(addr, ZEROES));
    }
    // Phase 5: read zeroes, write ones, descending.
    for addr in desc() {
        trace.push(Access::read(addr, ZEROES));
        trace.push(Access::write(addr, ONES));
    }
    // Phase 6: read ones, write zeroes, re-verify, descending.
    for addr in desc() {
        trace.push(Access::read(addr, ONES));
        trace.push(Access::write(addr, ZEROES));
        trace.push(Access::read(addr, ZEROES));
    }
    // Phase 7: read zeroes, ascending.
    for addr in asc() {
        trace.push(Access::read(addr, ZEROES));
    }
    trace
}

#[test]
fn test_fault_free_pass() {
    for len in [1u32, 2, 3, 4, 16, 256] {
        let mut ram = ModelRam::new(span(len));
        assert_eq!(run_full(&mut ram), Outcome::Pass, "len={len}");
        assert!(ram.contents().iter().all(|&b| b == ZEROES));
        assert_eq!(ram.log().len(), 13 * len as usize);
        assert_eq!(ram.keepalives(), 2);

        let mut ram = ModelRam::new(span(len));
        assert_eq!(run_minus(&mut ram), Outcome::Pass, "len={len} (minus)");
        assert!(ram.contents().iter().all(|&b| b == ZEROES));
        assert_eq!(ram.log().len(), 12 * len as usize);
        assert_eq!(ram.keepalives(), 2);
    }
}

#[test]
fn test_concrete_four_byte_trace() {
    // The 4-byte scenario: phase-by-phase write/read sequence and final
    // all-zero contents.
    let mut ram = ModelRam::new(span(4));
    assert_eq!(run_full(&mut ram), Outcome::Pass);
    assert_eq!(ram.log(), expected_full_trace(span(4)).as_slice());
    assert_eq!(ram.contents(), &[ZEROES; 4]);
}

#[test]
fn test_minus_omits_exactly_phase_4() {
    let len = 4usize;
    let mut full_ram = ModelRam::new(span(len as u32));
    assert_eq!(run_full(&mut full_ram), Outcome::Pass);

    let mut minus_ram = ModelRam::new(span(len as u32));
    assert_eq!(run_minus(&mut minus_ram), Outcome::Pass);

    // Drop the phase-4 block (one read per cell, after phases 1-3) from the
    // full trace; what remains must be the minus trace, access for access.
    let phase4_start = len * (PHASE_ACCESSES[0] + PHASE_ACCESSES[1] + PHASE_ACCESSES[2]);
    let mut expected = full_ram.log().to_vec();
    expected.drain(phase4_start..phase4_start + len);
    assert_eq!(minus_ram.log(), expected.as_slice());
}

#[test]
fn test_phase_directions() {
    let len = 8usize;
    let mut ram = ModelRam::new(span(len as u32));
    assert_eq!(run_full(&mut ram), Outcome::Pass);

    let mut log = ram.log();
    for (phase, &per_cell) in PHASE_ACCESSES.iter().enumerate() {
        let (block, rest) = log.split_at(per_cell * len);
        log = rest;

        // One cell at a time; first touch of each cell sets the visit order.
        let mut visited = Vec::new();
        for access in block {
            if visited.last() != Some(&access.addr) {
                visited.push(access.addr);
            }
        }
        assert_eq!(visited.len(), len, "phase {}", phase + 1);

        let ascending = matches!(phase + 1, 2 | 3 | 7);
        if ascending {
            assert_eq!(visited[0], BASE, "phase {}", phase + 1);
            assert!(visited.windows(2).all(|w| w[1] == w[0] + 1));
        } else {
            assert_eq!(visited[0], BASE + len as u32 - 1, "phase {}", phase + 1);
            assert!(visited.windows(2).all(|w| w[1] == w[0] - 1));
        }
    }
    assert!(log.is_empty());
}

#[test]
fn test_stuck_cell_resets_in_phase_2() {
    let len = 8u32;
    let stuck_addr = BASE + 2;
    let mut ram = ModelRam::new(span(len));
    ram.set_stuck(stuck_addr, 0x40);

    assert_eq!(run_full(&mut ram), Outcome::Reset);

    // Phase 1 writes never read the cell; phase 2 reaches it third in
    // ascending order (two read+write pairs before it) and stops on the
    // first read.
    let expected_accesses = len as usize + 2 * 2 + 1;
    assert_eq!(ram.log().len(), expected_accesses);
    assert_eq!(ram.log().last(), Some(&Access::read(stuck_addr, 0x40)));
    assert_eq!(ram.keepalives(), 1);
}

#[test]
fn test_corruption_resets_in_phase_3() {
    let len = 4u32;
    let victim = BASE + 3;
    let mut ram = ModelRam::new(span(len));
    // Phases 1 and 2 make 12 accesses; phase 3 handles the first three cells
    // in 9 more. Corrupt the last cell right before phase 3 reads it.
    ram.corrupt_after(21, victim, 0x77);

    assert_eq!(run_full(&mut ram), Outcome::Reset);
    assert_eq!(ram.log().len(), 22);
    assert_eq!(ram.log().last(), Some(&Access::read(victim, 0x77)));
}

#[test]
fn test_reverify_catches_failed_inversion() {
    let len = 4u32;
    let victim = BASE + 1;
    let mut ram = ModelRam::new(span(len));
    // In phase 3 the second cell is read (access 16), inverted to zero
    // (access 17) and re-read (access 18). Corrupt between the write and the
    // re-read: only the independent re-verification can catch this.
    ram.corrupt_after(17, victim, 0x08);

    assert_eq!(run_full(&mut ram), Outcome::Reset);
    assert_eq!(ram.log().len(), 18);
    assert_eq!(ram.log().last(), Some(&Access::read(victim, 0x08)));
    assert_eq!(ram.log()[16], Access::write(victim, ZEROES));
}

#[test]
fn test_zero_accesses_after_reset() {
    let len = 8u32;
    let mut ram = ModelRam::new(span(len));
    ram.set_stuck(BASE, 0x01);
    assert_eq!(run_full(&mut ram), Outcome::Reset);

    // Phase 1 writes the whole span; the very first phase-2 read hits the
    // stuck cell. Early exit means not a single access after it.
    assert_eq!(ram.log().len(), len as usize + 1);
    assert_eq!(
        ram.log().last().map(|a| a.kind),
        Some(AccessKind::Read),
        "test must stop on the failing read"
    );
}

#[test]
fn test_idempotent() {
    for run in [run_full as fn(&mut ModelRam) -> Outcome, run_minus] {
        let mut ram = ModelRam::new(span(16));
        assert_eq!(run(&mut ram), Outcome::Pass);
        let first_log = ram.take_log();
        let first_contents = ram.contents().to_vec();

        assert_eq!(run(&mut ram), Outcome::Pass);
        assert_eq!(ram.log(), first_log.as_slice());
        assert_eq!(ram.contents(), first_contents.as_slice());
    }
}
