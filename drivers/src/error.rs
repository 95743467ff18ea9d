/*++

Licensed under the Apache-2.0 license.

File Name:

    error.rs

Abstract:

    File contains API used by the library for error handling

--*/

use core::num::NonZeroU32;

/// RAM Test Error Type
///
/// Carried only on the configuration path (span construction); a memory
/// verification mismatch is never represented as an error value, it is
/// converted directly into a fatal reset.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RamTestError(pub NonZeroU32);

impl RamTestError {
    /// Create a RamTestError; intended to only be used from const contexts, as
    /// we don't want runtime panics if val is zero.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("RamTestError cannot be 0"),
        }
    }

    /// Span start address is above the end address.
    pub const DRIVER_SPAN_INVERTED: RamTestError = RamTestError::new_const(0x0001_0001);

    /// Span collides with the boot-scratch RAM that holds the startup stack.
    pub const DRIVER_SPAN_COLLIDES_WITH_BSRAM: RamTestError = RamTestError::new_const(0x0001_0002);
}

impl From<RamTestError> for NonZeroU32 {
    fn from(val: RamTestError) -> Self {
        val.0
    }
}

impl From<RamTestError> for u32 {
    fn from(val: RamTestError) -> Self {
        val.0.get()
    }
}

pub type RamTestResult<T> = Result<T, RamTestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_unique() {
        let all = [
            RamTestError::DRIVER_SPAN_INVERTED,
            RamTestError::DRIVER_SPAN_COLLIDES_WITH_BSRAM,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_error_code_conversion() {
        assert_eq!(u32::from(RamTestError::DRIVER_SPAN_INVERTED), 0x0001_0001);
    }
}
