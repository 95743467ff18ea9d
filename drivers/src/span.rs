/*++

Licensed under the Apache-2.0 license.

File Name:

    span.rs

Abstract:

    File contains the RamSpan type describing the contiguous byte range
    under test.

--*/

use crate::memory_layout;
use crate::{RamTestError, RamTestResult};

/// Contiguous, byte-addressable RAM range `[start, end]` (both inclusive).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RamSpan {
    start: u32,
    end: u32,
}

impl RamSpan {
    /// Create a span over `[start, end]`.
    ///
    /// # Errors
    ///
    /// * `RamTestError::DRIVER_SPAN_INVERTED` - `start` is above `end`
    /// * `RamTestError::DRIVER_SPAN_COLLIDES_WITH_BSRAM` - span overlaps the
    ///   boot-scratch RAM holding the startup stack
    pub fn new(start: u32, end: u32) -> RamTestResult<Self> {
        if start > end {
            return Err(RamTestError::DRIVER_SPAN_INVERTED);
        }
        let bsram_start = memory_layout::BSRAM_ORG;
        let bsram_end = memory_layout::BSRAM_ORG + memory_layout::BSRAM_SIZE - 1;
        if start <= bsram_end && end >= bsram_start {
            return Err(RamTestError::DRIVER_SPAN_COLLIDES_WITH_BSRAM);
        }
        Ok(Self { start, end })
    }

    /// Span covering the target device's entire main RAM.
    pub fn from_layout() -> RamTestResult<Self> {
        Self::new(memory_layout::RAM_ORG, memory_layout::RAM_END)
    }

    /// First byte address of the span.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last byte address of the span (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of bytes in the span. Always at least 1.
    pub fn len(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let span = RamSpan::new(0x2000_0000, 0x2000_0FFF).unwrap();
        assert_eq!(span.start(), 0x2000_0000);
        assert_eq!(span.end(), 0x2000_0FFF);
        assert_eq!(span.len(), 4096);
    }

    #[test]
    fn test_single_byte() {
        let span = RamSpan::new(0x2000_0000, 0x2000_0000).unwrap();
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(
            RamSpan::new(0x2000_0001, 0x2000_0000).err(),
            Some(RamTestError::DRIVER_SPAN_INVERTED)
        );
    }

    #[test]
    fn test_bsram_collision() {
        assert_eq!(
            RamSpan::new(memory_layout::BSRAM_ORG, memory_layout::BSRAM_ORG + 16).err(),
            Some(RamTestError::DRIVER_SPAN_COLLIDES_WITH_BSRAM)
        );
    }

    #[test]
    fn test_from_layout() {
        let span = RamSpan::from_layout().unwrap();
        assert_eq!(span.start(), memory_layout::RAM_ORG);
        assert_eq!(span.end(), memory_layout::RAM_END);
    }
}
