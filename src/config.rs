// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for [`Usart`].
//!
//! [`Usart`]: crate::Usart

use crate::error::{ConfigField, InvalidConfigError};
use crate::spec::registers::{DataBits, Parity, StopBits};
use crate::spec::MAX_DIVISOR;

/// Configuration for [`Usart`].
///
/// The record is immutable from the driver's point of view: it is supplied
/// once by the integrator and consumed by [`Usart::init`].
///
/// Please note that sender and receiver **must agree** on the transmission
/// settings, otherwise you receive garbage.
///
/// [`Usart`]: crate::Usart
/// [`Usart::init`]: crate::Usart::init
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Config {
    // Transmission Config
    /// The UBRR baud divisor. Use [`calc_divisor`] or [`BaudRate::divisor`]
    /// to derive it from a baud rate and the CPU clock.
    ///
    /// Values beyond [`MAX_DIVISOR`] are rejected by [`Usart::init`].
    ///
    /// [`calc_divisor`]: crate::spec::calc_divisor
    /// [`BaudRate::divisor`]: crate::spec::BaudRate::divisor
    /// [`Usart::init`]: crate::Usart::init
    pub baud_divisor: u16,
    /// The character size of each transmitted and received frame.
    pub data_bits: DataBits,
    /// The parity mode to use.
    pub parity: Parity,
    /// The stop-bit count inserted by the transmitter.
    pub stop_bits: StopBits,
}

impl Config {
    /// Creates a configuration from raw field encodings, as an integrator
    /// would state them in a build-time constant.
    ///
    /// The frame fields use the raw register encodings: `data_bits` is the
    /// UCSZ1:0 value (`0..=3` for 5 to 8 bits), `parity` the UPM1:0 value
    /// (`0`, `2` or `3`; the reserved value `1` is rejected), `stop_bits` the
    /// USBS value (`0` or `1`).
    pub const fn from_raw(
        baud_divisor: u16,
        data_bits: u8,
        parity: u8,
        stop_bits: u8,
    ) -> Result<Self, InvalidConfigError> {
        if baud_divisor > MAX_DIVISOR {
            return Err(InvalidConfigError {
                field: ConfigField::BaudDivisor,
                raw_value: baud_divisor,
            });
        }
        let Some(data_bits) = DataBits::from_raw_bits(data_bits) else {
            return Err(InvalidConfigError {
                field: ConfigField::DataBits,
                raw_value: data_bits as u16,
            });
        };
        let Some(parity) = Parity::from_raw_bits(parity) else {
            return Err(InvalidConfigError {
                field: ConfigField::Parity,
                raw_value: parity as u16,
            });
        };
        let Some(stop_bits) = StopBits::from_raw_bits(stop_bits) else {
            return Err(InvalidConfigError {
                field: ConfigField::StopBits,
                raw_value: stop_bits as u16,
            });
        };

        Ok(Self {
            baud_divisor,
            data_bits,
            parity,
            stop_bits,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        // Default is a 8-N-1 connection at 9600 baud on an 8 Mhz part.
        Self {
            baud_divisor: 51,
            data_bits: DataBits::Eight,
            parity: Parity::Disabled,
            stop_bits: StopBits::One,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_accepts_valid_fields() {
        let config = Config::from_raw(51, 3, 0, 0).unwrap();
        assert_eq!(config, Config::default());

        let config = Config::from_raw(25, 2, 3, 1).unwrap();
        assert_eq!(config.data_bits, DataBits::Seven);
        assert_eq!(config.parity, Parity::Odd);
        assert_eq!(config.stop_bits, StopBits::Two);
    }

    #[test]
    fn test_from_raw_rejects_out_of_range_fields() {
        assert_eq!(
            Config::from_raw(51, 4, 0, 0),
            Err(InvalidConfigError {
                field: ConfigField::DataBits,
                raw_value: 4,
            })
        );
        assert_eq!(
            Config::from_raw(51, 3, 4, 0),
            Err(InvalidConfigError {
                field: ConfigField::Parity,
                raw_value: 4,
            })
        );
        assert_eq!(
            Config::from_raw(51, 3, 0, 2),
            Err(InvalidConfigError {
                field: ConfigField::StopBits,
                raw_value: 2,
            })
        );
        assert_eq!(
            Config::from_raw(0x1000, 3, 0, 0),
            Err(InvalidConfigError {
                field: ConfigField::BaudDivisor,
                raw_value: 0x1000,
            })
        );
    }

    #[test]
    fn test_from_raw_rejects_reserved_parity() {
        // UPM encoding 0b01 is reserved on this part.
        assert_eq!(
            Config::from_raw(51, 3, 1, 0),
            Err(InvalidConfigError {
                field: ConfigField::Parity,
                raw_value: 1,
            })
        );
    }
}
