/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains a host-side model of the RAM span under test. The real
    constraints (physical RAM, a processor reset) cannot be reproduced on the
    host, so the span is modeled as an addressable byte vector and the reset
    action as a catchable abort signal.

--*/

use std::collections::HashMap;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

use ramtest_selftest::TestEnv;

pub use ramtest_drivers::RamSpan;

/// Kind of a modeled memory access.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AccessKind {
    Read,
    Write,
}

/// One logged access: for reads, `val` is the value the test observed; for
/// writes, the value the test stored.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Access {
    pub kind: AccessKind,
    pub addr: u32,
    pub val: u8,
}

impl Access {
    pub fn read(addr: u32, val: u8) -> Self {
        Self {
            kind: AccessKind::Read,
            addr,
            val,
        }
    }

    pub fn write(addr: u32, val: u8) -> Self {
        Self {
            kind: AccessKind::Write,
            addr,
            val,
        }
    }
}

/// Access fault in the modeled span
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AccessError {
    /// Access outside the modeled span. Always a bug in the algorithm under
    /// test, never injected.
    OutOfSpan { addr: u32 },
}

/// Outcome of a modeled test run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The algorithm returned; control would go back to the startup hook.
    Pass,

    /// The algorithm took the fatal-reset action.
    Reset,
}

/// Panic payload standing in for the hardware reset. Raised by
/// [`ModelEnv::fatal`] and caught by [`run_test`].
pub struct SimulatedReset;

struct Corruption {
    after_accesses: usize,
    addr: u32,
    val: u8,
}

/// Modeled RAM span with fault injection and an access log.
pub struct ModelRam {
    span: RamSpan,
    data: Vec<u8>,
    log: Vec<Access>,
    stuck: HashMap<u32, u8>,
    pending: Option<Corruption>,
    keepalives: usize,
}

impl ModelRam {
    /// Create a fault-free model of `span`, pre-filled with power-up junk so
    /// the algorithms cannot accidentally rely on initial contents.
    pub fn new(span: RamSpan) -> Self {
        let data = (span.start()..=span.end())
            .map(|addr| (addr ^ (addr >> 8)) as u8 ^ 0xA5)
            .collect();
        Self {
            span,
            data,
            log: Vec::new(),
            stuck: HashMap::new(),
            pending: None,
            keepalives: 0,
        }
    }

    pub fn span(&self) -> RamSpan {
        self.span
    }

    /// Read the byte at `addr`, recording the access. A stuck cell yields
    /// its forced value no matter what was written.
    pub fn read(&mut self, addr: u32) -> Result<u8, AccessError> {
        self.apply_pending_corruption();
        let offset = self.offset(addr)?;
        let val = match self.stuck.get(&addr) {
            Some(&forced) => forced,
            None => self.data[offset],
        };
        self.log.push(Access::read(addr, val));
        Ok(val)
    }

    /// Write `val` to the byte at `addr`, recording the access.
    pub fn write(&mut self, addr: u32, val: u8) -> Result<(), AccessError> {
        self.apply_pending_corruption();
        let offset = self.offset(addr)?;
        self.data[offset] = val;
        self.log.push(Access::write(addr, val));
        Ok(())
    }

    /// Force every read of `addr` to observe `val` (stuck cell).
    pub fn set_stuck(&mut self, addr: u32, val: u8) {
        self.stuck.insert(addr, val);
    }

    /// Flip the backing byte at `addr` to `val` immediately, without logging.
    pub fn corrupt(&mut self, addr: u32, val: u8) {
        let offset = self.offset(addr).expect("corrupt addr outside span");
        self.data[offset] = val;
    }

    /// Flip the backing byte at `addr` to `val` once `after_accesses` total
    /// accesses (reads + writes) have been performed.
    pub fn corrupt_after(&mut self, after_accesses: usize, addr: u32, val: u8) {
        self.pending = Some(Corruption {
            after_accesses,
            addr,
            val,
        });
    }

    /// All accesses performed so far, in order.
    pub fn log(&self) -> &[Access] {
        &self.log
    }

    /// Drain the access log, e.g. between two runs of the same test.
    pub fn take_log(&mut self) -> Vec<Access> {
        std::mem::take(&mut self.log)
    }

    /// Current span contents, lowest address first.
    pub fn contents(&self) -> &[u8] {
        &self.data
    }

    /// Number of keepalive (watchdog refresh) calls made by the tests so far.
    pub fn keepalives(&self) -> usize {
        self.keepalives
    }

    fn apply_pending_corruption(&mut self) {
        if let Some(c) = &self.pending {
            if self.log.len() >= c.after_accesses {
                let offset = self.offset(c.addr).expect("corrupt addr outside span");
                self.data[offset] = c.val;
                self.pending = None;
            }
        }
    }

    fn offset(&self, addr: u32) -> Result<usize, AccessError> {
        if addr < self.span.start() || addr > self.span.end() {
            return Err(AccessError::OutOfSpan { addr });
        }
        Ok((addr - self.span.start()) as usize)
    }
}

/// [`TestEnv`] over a [`ModelRam`]. The fatal action is a panic with a
/// [`SimulatedReset`] payload, which [`run_test`] converts into
/// [`Outcome::Reset`]; unwinding also guarantees the "zero further
/// accesses after a detected fault" property by construction.
pub struct ModelEnv<'a> {
    ram: &'a mut ModelRam,
}

impl<'a> ModelEnv<'a> {
    pub fn new(ram: &'a mut ModelRam) -> Self {
        Self { ram }
    }
}

impl TestEnv for ModelEnv<'_> {
    fn read(&mut self, addr: u32) -> u8 {
        match self.ram.read(addr) {
            Ok(val) => val,
            Err(e) => panic!("model fault: {e:?}"),
        }
    }

    fn write(&mut self, addr: u32, val: u8) {
        if let Err(e) = self.ram.write(addr, val) {
            panic!("model fault: {e:?}");
        }
    }

    fn keepalive(&mut self) {
        self.ram.keepalives += 1;
    }

    fn fatal(&mut self) -> ! {
        std::panic::panic_any(SimulatedReset);
    }
}

/// Run a test body against the modeled span, turning the simulated reset
/// into an [`Outcome`]. Any other panic (a model fault, a failed assertion)
/// is propagated.
pub fn run_test(ram: &mut ModelRam, body: impl FnOnce(&mut ModelEnv)) -> Outcome {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut env = ModelEnv::new(ram);
        body(&mut env);
    }));
    match result {
        Ok(()) => Outcome::Pass,
        Err(payload) => {
            if payload.is::<SimulatedReset>() {
                Outcome::Reset
            } else {
                resume_unwind(payload)
            }
        }
    }
}
