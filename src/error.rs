// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors that can happen when working with [`Usart`].
//!
//! [`Usart`]: crate::Usart

use core::error::Error;
use core::fmt::{self, Display, Formatter};

#[cfg(doc)]
use crate::Usart;

/// The configuration fields validated by [`Config::from_raw`] and
/// [`Usart::init`].
///
/// [`Config::from_raw`]: crate::Config::from_raw
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigField {
    /// The UBRR baud divisor.
    BaudDivisor,
    /// The UCSZ1:0 character size field.
    DataBits,
    /// The UPM1:0 parity field.
    Parity,
    /// The USBS stop-bit field.
    StopBits,
}

impl Display for ConfigField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BaudDivisor => "baud divisor",
            Self::DataBits => "data bits",
            Self::Parity => "parity",
            Self::StopBits => "stop bits",
        };
        f.write_str(name)
    }
}

/// A configuration field is outside its allowed range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidConfigError {
    /// The field that failed validation.
    pub field: ConfigField,
    /// The raw value that was rejected.
    pub raw_value: u16,
}

impl Display for InvalidConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid configuration: {} value {} is out of range",
            self.field, self.raw_value
        )
    }
}

impl Error for InvalidConfigError {}

/// Errors that can happen when a [`Usart`] is initialized in [`Usart::init`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InitError {
    /// The configured baud divisor does not fit the 12-bit UBRR register
    /// pair. No registers have been reprogrammed.
    DivisorOutOfRange(u16),
}

impl Display for InitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisorOutOfRange(divisor) => {
                write!(f, "baud divisor {divisor} does not fit the UBRR registers")
            }
        }
    }
}

impl Error for InitError {}

/// The transmit buffer is not empty, so no byte can be written right now.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ByteSendError;

impl Display for ByteSendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "the transmit buffer is not empty")
    }
}

impl Error for ByteSendError {}

/// There is currently no data to read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ByteReceiveError;

impl Display for ByteReceiveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "there is no data to read")
    }
}

impl Error for ByteReceiveError {}

/// The driver has not been initialized (or the last initialization attempt
/// failed).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NotInitializedError;

impl Display for NotInitializedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "the driver is not initialized")
    }
}

impl Error for NotInitializedError {}
