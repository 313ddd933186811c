//! Crate error type.
//!
//! The control loop itself has no failure path: actuation faults are dropped
//! by the actuator and everything else is unrepresentable. The only fallible
//! operation left is turning a raw percentage into a
//! [`BrightnessCommand`](crate::control::BrightnessCommand).

/// Errors reported by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Percentage is not one of the four supported levels (0, 20, 50, 100)
    InvalidPercentage(u8),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidPercentage(percent) => {
                write!(f, "Unsupported brightness: {percent}% (expected 0, 20, 50 or 100)")
            }
        }
    }
}

impl core::error::Error for Error {}
