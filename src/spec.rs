// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Constants, Register Addresses, and Register Bits.
//!
//! Models the raw low-level details as of the [datasheet], and avoids too
//! opinionated abstractions.
//!
//! [datasheet]: https://ww1.microchip.com/downloads/en/DeviceDoc/doc2503.pdf

pub use crate::spec::errors::*;

/// The largest value the 12-bit UBRR baud-rate register pair can hold.
///
/// UBRRH carries only divisor bits 11:8; the upper half of that register byte
/// holds reserved bits and [`registers::UCSRC::URSEL`], so wider divisors
/// cannot be programmed.
pub const MAX_DIVISOR: u16 = 0x0fff;

mod errors {
    use core::error::Error;
    use core::fmt::{self, Display, Formatter};

    /// Error that is returned when [`calc_divisor`] could not derive a
    /// programmable UBRR value for the requested baud rate.
    ///
    /// [`calc_divisor`]: crate::spec::calc_divisor
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Hash)]
    pub enum DivisorError {
        /// The baud rate is faster than the CPU clock allows, i.e.
        /// `f_cpu / 16 / baud_rate` is zero and the divisor would wrap below
        /// zero.
        Unreachable {
            /// The CPU clock in Hz.
            f_cpu: u32,
            /// The requested baud rate.
            baud_rate: u32,
        },
        /// The derived divisor does not fit the 12-bit UBRR register pair.
        OutOfRange {
            /// The CPU clock in Hz.
            f_cpu: u32,
            /// The requested baud rate.
            baud_rate: u32,
            /// The divisor that was derived.
            divisor: u32,
        },
    }

    impl Display for DivisorError {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            match self {
                Self::Unreachable { f_cpu, baud_rate } => {
                    write!(
                        f,
                        "baud rate is not reachable from the CPU clock: f_cpu={f_cpu}, baud_rate={baud_rate}"
                    )
                }
                Self::OutOfRange {
                    f_cpu,
                    baud_rate,
                    divisor,
                } => {
                    write!(
                        f,
                        "divisor does not fit the 12-bit UBRR registers: f_cpu={f_cpu}, baud_rate={baud_rate}, divisor={divisor}"
                    )
                }
            }
        }
    }

    impl Error for DivisorError {}
}

/// Calculates the UBRR divisor for a baud rate in normal (non-doubled) mode.
///
/// The relation is `divisor = f_cpu / 16 / baud_rate - 1`, evaluated with
/// integer division as the hardware expects.
///
/// # Arguments
/// - `f_cpu`: The CPU clock of the microcontroller in Hz.
/// - `baud_rate`: The desired baud rate.
pub const fn calc_divisor(f_cpu: u32, baud_rate: u32) -> Result<u16, DivisorError> {
    if baud_rate == 0 {
        return Err(DivisorError::Unreachable { f_cpu, baud_rate });
    }

    let quotient = f_cpu / 16 / baud_rate;
    if quotient == 0 {
        return Err(DivisorError::Unreachable { f_cpu, baud_rate });
    }

    let divisor = quotient - 1;
    if divisor > MAX_DIVISOR as u32 {
        return Err(DivisorError::OutOfRange {
            f_cpu,
            baud_rate,
            divisor,
        });
    }

    Ok(divisor as u16)
}

/// Similar to [`calc_divisor`] but with known divisor to calculate the
/// effective baud rate: `rate = f_cpu / (16 * (divisor + 1))`.
#[must_use]
pub const fn calc_baud_rate(f_cpu: u32, divisor: u16) -> u32 {
    f_cpu / (16 * (divisor as u32 + 1))
}

/// The speed of data transmission, measured in symbols per second (or bits, in
/// the case of simple UARTs).
///
/// This type is a convenient and non-ABI compatible abstraction. Use
/// [`BaudRate::divisor`] (or [`calc_divisor`]) to get the value for the UBRR
/// register pair.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaudRate {
    // List of typical baud rates.
    Baud921600,
    Baud460800,
    Baud230400,
    Baud115200,
    Baud57600,
    Baud38400,
    Baud19200,
    #[default]
    Baud9600,
    Baud4800,
    Baud2400,
    Baud1200,
    Baud300,
    Baud150,
    Baud110,
    Custom(u32),
}

impl BaudRate {
    /// Returns the value as corresponding integer.
    #[must_use]
    pub const fn to_integer(self) -> u32 {
        match self {
            Self::Baud921600 => 921600,
            Self::Baud460800 => 460800,
            Self::Baud230400 => 230400,
            Self::Baud115200 => 115200,
            Self::Baud57600 => 57600,
            Self::Baud38400 => 38400,
            Self::Baud19200 => 19200,
            Self::Baud9600 => 9600,
            Self::Baud4800 => 4800,
            Self::Baud2400 => 2400,
            Self::Baud1200 => 1200,
            Self::Baud300 => 300,
            Self::Baud150 => 150,
            Self::Baud110 => 110,
            Self::Custom(val) => val,
        }
    }

    /// Creates the type from an integer representation of the baud rate.
    #[must_use]
    pub const fn from_integer(value: u32) -> Self {
        match value {
            921600 => Self::Baud921600,
            460800 => Self::Baud460800,
            230400 => Self::Baud230400,
            115200 => Self::Baud115200,
            57600 => Self::Baud57600,
            38400 => Self::Baud38400,
            19200 => Self::Baud19200,
            9600 => Self::Baud9600,
            4800 => Self::Baud4800,
            2400 => Self::Baud2400,
            1200 => Self::Baud1200,
            300 => Self::Baud300,
            150 => Self::Baud150,
            110 => Self::Baud110,
            baud_rate => Self::Custom(baud_rate),
        }
    }

    /// Returns the UBRR divisor for this rate on a machine clocked at
    /// `f_cpu` Hz.
    pub const fn divisor(self, f_cpu: u32) -> Result<u16, DivisorError> {
        calc_divisor(f_cpu, self.to_integer())
    }
}

impl PartialOrd for BaudRate {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BaudRate {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.to_integer().cmp(&other.to_integer())
    }
}

/// Exposes low-level information about the on-chip register layout and
/// provides types that model individual registers.
///
/// The getters and setters in this module operate exclusively on raw bit
/// representations within the local computing context. They are limited to
/// extracting or updating the corresponding fields and do not perform direct
/// hardware access.
pub mod registers {
    use bitflags::bitflags;

    /// Provides the fixed data-space addresses of the USART registers.
    ///
    /// Unlike UARTs that expose a linear register window, the AVR scatters
    /// its USART registers through the I/O file, so each register has its own
    /// absolute address.
    pub mod addresses {
        /// USART Baud Rate Register, low byte (UBRRL).
        pub const UBRRL: u8 = 0x29;

        /// USART Control and Status Register B (UCSRB).
        pub const UCSRB: u8 = 0x2a;

        /// USART Control and Status Register A (UCSRA).
        pub const UCSRA: u8 = 0x2b;

        /// USART I/O Data Register (UDR).
        ///
        /// Reads return the receive buffer, writes go to the transmit buffer.
        pub const UDR: u8 = 0x2c;

        /// The shared address of the USART Baud Rate Register high byte
        /// (UBRRH) and the USART Control and Status Register C (UCSRC).
        ///
        /// A write to this address lands in UCSRC when bit 7 ([`URSEL`]) of
        /// the written value is set and in UBRRH when it is clear.
        ///
        /// [`URSEL`]: super::UCSRC::URSEL
        pub const UBRRH_UCSRC: u8 = 0x40;

        /// All register addresses of the USART peripheral.
        pub const ALL: [u8; 5] = [UBRRL, UCSRB, UCSRA, UDR, UBRRH_UCSRC];
    }

    /// Typing of the data register (UDR).
    ///
    /// Reads return the receive buffer, writes go to the transmit buffer.
    pub type UDR = u8;

    /// Typing of the baud rate register, low byte (UBRRL).
    ///
    /// This is the low byte of the 12-bit divisor
    /// (see [`calc_divisor`](super::calc_divisor)).
    ///
    /// This is a **read/write** register.
    pub type UBRRL = u8;

    /// Typing of the baud rate register, high byte (UBRRH).
    ///
    /// Bits 3:0 hold divisor bits 11:8. Bit 7 is the register-select bit of
    /// the shared address and must be zero in the written value for the write
    /// to reach this register at all (see [`addresses::UBRRH_UCSRC`]).
    pub type UBRRH = u8;

    bitflags! {
        /// Typing of the USART Control and Status Register A (UCSRA).
        ///
        /// Reports the current status of the transmitter and receiver,
        /// including data readiness, errors, and transmit-buffer emptiness.
        ///
        /// Apart from [`UCSRA::TXC`] (write-one-to-clear), [`UCSRA::U2X`] and
        /// [`UCSRA::MPCM`], this register is **read-only**.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct UCSRA: u8 {
            /// Multi-Processor Communication Mode.
            ///
            /// When set, incoming frames that do not carry address
            /// information are ignored by the receiver.
            const MPCM = 1 << 0;
            /// Double Transmission Speed.
            ///
            /// Effective in asynchronous operation only; changes the divisor
            /// relation from `f_cpu/16` to `f_cpu/8`. This driver programs
            /// normal-speed mode and leaves the bit cleared.
            const U2X = 1 << 1;
            /// Parity Error flag. Set if the next readable frame in the
            /// receive buffer had a parity error when received.
            ///
            /// Valid until the receive buffer (UDR) is read.
            const PE = 1 << 2;
            /// Data OverRun flag. Set when the receive buffer is full, a new
            /// character is waiting in the receive shift register, and a new
            /// start bit is detected.
            ///
            /// Valid until the receive buffer (UDR) is read.
            const DOR = 1 << 3;
            /// Frame Error flag. Set if the next readable frame in the
            /// receive buffer had a frame error, i.e. its first stop bit was
            /// read as zero.
            ///
            /// Valid until the receive buffer (UDR) is read.
            const FE = 1 << 4;
            /// USART Data Register Empty flag aka "ready to send".
            ///
            /// Set whenever the transmit buffer (UDR) can accept new data.
            /// Cleared when new data is written to UDR.
            const UDRE = 1 << 5;
            /// Transmit Complete flag. Set when the entire frame in the
            /// transmit shift register has been shifted out and no new data
            /// is waiting in the transmit buffer.
            ///
            /// Cleared by writing a one to its bit location.
            const TXC = 1 << 6;
            /// Receive Complete flag. Set when there is unread data in the
            /// receive buffer; cleared when the receive buffer is empty.
            const RXC = 1 << 7;
        }
    }

    bitflags! {
        /// Typing of the USART Control and Status Register B (UCSRB).
        ///
        /// Enables the transmitter, the receiver, and the individual USART
        /// interrupt sources.
        ///
        /// This is a **read/write** register.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct UCSRB: u8 {
            /// Transmit Data Bit 8.
            ///
            /// The ninth data bit of a transmitted frame in 9-bit modes. Must
            /// be written before UDR.
            const TXB8 = 1 << 0;
            /// Receive Data Bit 8.
            ///
            /// The ninth data bit of a received frame in 9-bit modes. Must be
            /// read before UDR.
            const RXB8 = 1 << 1;
            /// Third bit of the character size, combined with the UCSZ1:0
            /// field in [`UCSRC`].
            ///
            /// Only set for 9-bit frames, which this driver does not program.
            const UCSZ2 = 1 << 2;
            /// Transmitter Enable. When set, the transmitter overrides normal
            /// port operation of the TXD pin.
            const TXEN = 1 << 3;
            /// Receiver Enable. When set, the receiver overrides normal port
            /// operation of the RXD pin.
            const RXEN = 1 << 4;
            /// Enables the interrupt on the [`UCSRA::UDRE`] flag.
            const UDRIE = 1 << 5;
            /// Enables the interrupt on the [`UCSRA::TXC`] flag.
            const TXCIE = 1 << 6;
            /// Enables the interrupt on the [`UCSRA::RXC`] flag.
            const RXCIE = 1 << 7;
        }
    }

    bitflags! {
        /// Typing of the USART Control and Status Register C (UCSRC).
        ///
        /// Configures the serial frame format including character size, stop
        /// bits, and parity.
        ///
        /// This register shares its address with UBRRH (see
        /// [`addresses::UBRRH_UCSRC`]): a write only lands here when
        /// [`UCSRC::URSEL`] is set in the written value. Every value composed
        /// for this register must therefore carry URSEL.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct UCSRC: u8 {
            /// Clock Polarity. Used in synchronous mode only; must be written
            /// as zero in asynchronous mode.
            const UCPOL = 1 << 0;
            /// First bit of [`DataBits`].
            const UCSZ0 = 1 << 1;
            /// Second bit of [`DataBits`].
            const UCSZ1 = 1 << 2;
            /// Stop Bit Select. If cleared, the transmitter inserts one stop
            /// bit; if set, two. The receiver ignores this setting.
            const USBS = 1 << 3;
            /// First bit of [`Parity`].
            const UPM0 = 1 << 4;
            /// Second bit of [`Parity`].
            const UPM1 = 1 << 5;
            /// USART Mode Select. Cleared for asynchronous operation, set for
            /// synchronous operation. This driver programs asynchronous mode.
            const UMSEL = 1 << 6;
            /// Register Select bit.
            ///
            /// This bit **must** be set in any value written to the shared
            /// address for the write to reach UCSRC instead of UBRRH.
            const URSEL = 1 << 7;
        }
    }

    impl UCSRC {
        /// Returns the [`DataBits`] encoded in the UCSZ1:0 field.
        #[must_use]
        pub const fn data_bits(self) -> DataBits {
            let bits = (self.bits() >> 1) & 0b11;
            match bits {
                0b00 => DataBits::Five,
                0b01 => DataBits::Six,
                0b10 => DataBits::Seven,
                0b11 => DataBits::Eight,
                _ => unreachable!(),
            }
        }

        /// Sets the [`DataBits`] in the UCSZ1:0 field.
        #[must_use]
        pub fn set_data_bits(self, value: DataBits) -> Self {
            self | Self::from_bits_retain(value.to_raw_bits() << 1)
        }

        /// Returns the [`StopBits`] encoded in the USBS bit.
        #[must_use]
        pub const fn stop_bits(self) -> StopBits {
            if self.contains(Self::USBS) {
                StopBits::Two
            } else {
                StopBits::One
            }
        }

        /// Sets the [`StopBits`] in the USBS bit.
        #[must_use]
        pub fn set_stop_bits(self, value: StopBits) -> Self {
            self | Self::from_bits_retain(value.to_raw_bits() << 3)
        }

        /// Returns the [`Parity`] encoded in the UPM1:0 field.
        ///
        /// Returns `None` for the reserved encoding `0b01`.
        #[must_use]
        pub const fn parity(self) -> Option<Parity> {
            let bits = (self.bits() >> 4) & 0b11;
            Parity::from_raw_bits(bits)
        }

        /// Sets the [`Parity`] in the UPM1:0 field.
        #[must_use]
        pub fn set_parity(self, value: Parity) -> Self {
            self | Self::from_bits_retain(value.to_raw_bits() << 4)
        }
    }

    /// The character size for transmission and reception in [`UCSRC`].
    ///
    /// The 9-bit mode additionally requires [`UCSRB::UCSZ2`] and is not
    /// covered by this type.
    ///
    /// This type is a convenient and non-ABI compatible abstraction. ABI
    /// compatibility is given via [`DataBits::from_raw_bits`] and
    /// [`DataBits::to_raw_bits`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum DataBits {
        /// Five data bits per frame.
        Five,
        /// Six data bits per frame.
        Six,
        /// Seven data bits per frame.
        Seven,
        /// Eight data bits per frame.
        ///
        /// # Recommendation
        /// This is the recommended default.
        #[default]
        Eight,
    }

    impl DataBits {
        /// Translates the raw encoding into the corresponding value.
        ///
        /// Returns `None` for values outside the two-bit UCSZ1:0 range.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting of bits.
        #[must_use]
        pub const fn from_raw_bits(bits: u8) -> Option<Self> {
            match bits {
                0b00 => Some(Self::Five),
                0b01 => Some(Self::Six),
                0b10 => Some(Self::Seven),
                0b11 => Some(Self::Eight),
                _ => None,
            }
        }

        /// Translates the value into the corresponding raw encoding.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting of bits.
        #[must_use]
        pub const fn to_raw_bits(self) -> u8 {
            match self {
                Self::Five => 0b00,
                Self::Six => 0b01,
                Self::Seven => 0b10,
                Self::Eight => 0b11,
            }
        }
    }

    /// The parity mode for transmission and reception in [`UCSRC`].
    ///
    /// This type is a convenient and non-ABI compatible abstraction. ABI
    /// compatibility is given via [`Parity::from_raw_bits`] and
    /// [`Parity::to_raw_bits`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Parity {
        /// No parity bit is transmitted nor expected.
        #[default]
        Disabled,
        /// The number of one-bits including the parity bit must be even.
        Even,
        /// The number of one-bits including the parity bit must be odd.
        Odd,
    }

    impl Parity {
        /// Translates the raw encoding into the corresponding value.
        ///
        /// Returns `None` for the reserved UPM encoding `0b01` and for values
        /// outside the two-bit range.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting of bits.
        #[must_use]
        pub const fn from_raw_bits(bits: u8) -> Option<Self> {
            match bits {
                0b00 => Some(Self::Disabled),
                0b10 => Some(Self::Even),
                0b11 => Some(Self::Odd),
                _ => None,
            }
        }

        /// Translates the value into the corresponding raw encoding.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting of bits.
        #[must_use]
        pub const fn to_raw_bits(self) -> u8 {
            match self {
                Self::Disabled => 0b00,
                Self::Even => 0b10,
                Self::Odd => 0b11,
            }
        }
    }

    /// The stop-bit count inserted by the transmitter in [`UCSRC`].
    ///
    /// This type is a convenient and non-ABI compatible abstraction. ABI
    /// compatibility is given via [`StopBits::from_raw_bits`] and
    /// [`StopBits::to_raw_bits`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum StopBits {
        /// One stop bit per frame.
        ///
        /// # Recommendation
        /// This is the recommended default.
        #[default]
        One,
        /// Two stop bits per frame.
        Two,
    }

    impl StopBits {
        /// Translates the raw encoding into the corresponding value.
        ///
        /// Returns `None` for values outside the one-bit USBS range.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting of bits.
        #[must_use]
        pub const fn from_raw_bits(bits: u8) -> Option<Self> {
            match bits {
                0b0 => Some(Self::One),
                0b1 => Some(Self::Two),
                _ => None,
            }
        }

        /// Translates the value into the corresponding raw encoding.
        ///
        /// This function operates on the value as-is and does not perform any
        /// shifting of bits.
        #[must_use]
        pub const fn to_raw_bits(self) -> u8 {
            match self {
                Self::One => 0b0,
                Self::Two => 0b1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::registers::{DataBits, Parity, StopBits, UCSRC};
    use super::*;

    #[test]
    fn test_calc_divisor() {
        assert_eq!(calc_divisor(8_000_000, 9600), Ok(51));
        assert_eq!(calc_divisor(8_000_000, 19200), Ok(25));
        assert_eq!(calc_divisor(8_000_000, 38400), Ok(12));
        assert_eq!(calc_divisor(8_000_000, 115200), Ok(3));
        assert_eq!(calc_divisor(16_000_000, 9600), Ok(103));
        assert_eq!(calc_divisor(1_000_000, 2400), Ok(25));
        assert_eq!(calc_divisor(1_843_200, 115200), Ok(0));
    }

    #[test]
    fn test_calc_divisor_unreachable() {
        assert_eq!(
            calc_divisor(1_000_000, 921600),
            Err(DivisorError::Unreachable {
                f_cpu: 1_000_000,
                baud_rate: 921600,
            })
        );
        assert_eq!(
            calc_divisor(8_000_000, 0),
            Err(DivisorError::Unreachable {
                f_cpu: 8_000_000,
                baud_rate: 0,
            })
        );
    }

    #[test]
    fn test_calc_divisor_out_of_range() {
        // 110 baud at 8 Mhz needs divisor 4544, beyond the 12-bit field.
        assert_eq!(
            calc_divisor(8_000_000, 110),
            Err(DivisorError::OutOfRange {
                f_cpu: 8_000_000,
                baud_rate: 110,
                divisor: 4544,
            })
        );
    }

    #[test]
    fn test_calc_baud_rate() {
        assert_eq!(calc_baud_rate(8_000_000, 51), 9615);
        assert_eq!(calc_baud_rate(8_000_000, 25), 19230);
        assert_eq!(calc_baud_rate(16_000_000, 103), 9615);
        assert_eq!(calc_baud_rate(1_843_200, 0), 115200);
    }

    #[test]
    fn test_baud_rate_divisor() {
        assert_eq!(BaudRate::Baud9600.divisor(8_000_000), Ok(51));
        assert_eq!(BaudRate::Custom(31250).divisor(8_000_000), Ok(15));
        assert!(BaudRate::Baud110.divisor(8_000_000).is_err());
        assert!(BaudRate::Baud921600.divisor(1_000_000).is_err());
    }

    #[test]
    fn test_baud_rate_integer_round_trip() {
        assert_eq!(BaudRate::from_integer(9600), BaudRate::Baud9600);
        assert_eq!(BaudRate::from_integer(31250), BaudRate::Custom(31250));
        assert_eq!(BaudRate::Baud460800.to_integer(), 460800);
    }

    #[test]
    fn test_data_bits_raw_bits() {
        assert_eq!(DataBits::from_raw_bits(0b11), Some(DataBits::Eight));
        assert_eq!(DataBits::from_raw_bits(0b00), Some(DataBits::Five));
        assert_eq!(DataBits::from_raw_bits(4), None);
        assert_eq!(DataBits::Seven.to_raw_bits(), 0b10);
    }

    #[test]
    fn test_parity_raw_bits_rejects_reserved() {
        assert_eq!(Parity::from_raw_bits(0b00), Some(Parity::Disabled));
        assert_eq!(Parity::from_raw_bits(0b10), Some(Parity::Even));
        assert_eq!(Parity::from_raw_bits(0b11), Some(Parity::Odd));
        // 0b01 is reserved in the UPM field.
        assert_eq!(Parity::from_raw_bits(0b01), None);
        assert_eq!(Parity::from_raw_bits(4), None);
    }

    #[test]
    fn test_stop_bits_raw_bits() {
        assert_eq!(StopBits::from_raw_bits(0), Some(StopBits::One));
        assert_eq!(StopBits::from_raw_bits(1), Some(StopBits::Two));
        assert_eq!(StopBits::from_raw_bits(2), None);
    }

    #[test]
    fn test_ucsrc_field_composition() {
        let ucsrc = UCSRC::URSEL
            .set_data_bits(DataBits::Eight)
            .set_stop_bits(StopBits::One)
            .set_parity(Parity::Disabled);
        // URSEL=1, UCSZ1:0=11, USBS=0, UPM1:0=00
        assert_eq!(ucsrc.bits(), 0b1000_0110);
        assert_eq!(ucsrc.data_bits(), DataBits::Eight);
        assert_eq!(ucsrc.stop_bits(), StopBits::One);
        assert_eq!(ucsrc.parity(), Some(Parity::Disabled));

        let ucsrc = UCSRC::URSEL
            .set_data_bits(DataBits::Seven)
            .set_stop_bits(StopBits::Two)
            .set_parity(Parity::Odd);
        assert_eq!(ucsrc.bits(), 0b1011_1100);
        assert_eq!(ucsrc.data_bits(), DataBits::Seven);
        assert_eq!(ucsrc.stop_bits(), StopBits::Two);
        assert_eq!(ucsrc.parity(), Some(Parity::Odd));
    }
}
