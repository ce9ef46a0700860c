//! Error types for Mini2 camera communication.

use thiserror::Error;

/// Errors that can occur while talking to a Mini2 camera.
#[derive(Error, Debug)]
pub enum Error {
    /// None of the configured vendor/product pairs is attached.
    #[error("no Mini2 camera was found (searched {searched})")]
    DeviceNotFound {
        /// The `vid:pid` pairs that were searched, comma separated.
        searched: String,
    },

    /// A numeric input lies outside the range the device accepts.
    #[error("{name} out of range: {value} is not in {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// A raw byte is not a known tag of a value enumeration.
    #[error("invalid {kind} value: 0x{value:02X}")]
    InvalidValue { kind: &'static str, value: u8 },

    /// Fields that are valid alone but not together.
    #[error("invalid combination: {0}")]
    InvalidCombination(String),

    /// The operation has no device command behind it.
    #[error("{0} is not supported by the device protocol")]
    Unsupported(&'static str),

    /// USB communication error.
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),
}

impl Error {
    pub(crate) fn out_of_range(
        name: &'static str,
        value: impl Into<u32>,
        min: u32,
        max: u32,
    ) -> Self {
        Error::OutOfRange {
            name,
            value: value.into(),
            min,
            max,
        }
    }

    /// True for inputs rejected before any frame was built.
    ///
    /// These are contract failures; retrying the same call fails the same way.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange { .. } | Error::InvalidValue { .. } | Error::InvalidCombination(_)
        )
    }

    /// True when the frame was built but the transfer failed.
    ///
    /// This is the only class of error a caller may reasonably retry.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Usb(_))
    }
}

/// Result type alias for Mini2 operations.
pub type Result<T> = std::result::Result<T, Error>;
