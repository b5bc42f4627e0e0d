// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provides a thin abstraction over a [`Usart`] for terminal-like remotes on
//! the receiving side.
//!
//! This module is suited for basic use cases and toy projects; full terminal
//! emulation is explicitly not a goal.
//!
//! For lower-level access of the underlying hardware, use [`Usart`] instead.
//!
//! See [`UsartTty`].

use crate::backend::{Backend, MmioBackend};
use crate::{Config, InitError, Usart};
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// Errors that [`UsartTty::new`] and [`UsartTty::new_mmio`] may return.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UsartTtyError {
    /// Error initializing the device.
    Init(InitError),
}

impl Display for UsartTtyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => {
                write!(f, "error initializing the device: {e}")
            }
        }
    }
}

impl Error for UsartTtyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Init(e) => Some(e),
        }
    }
}

/// Thin opinionated abstraction over [`Usart`] that helps to send Rust
/// strings easily to the other side, assuming the remote is a TTY (terminal).
///
/// It is especially suited as very easy way to see something when you bring
/// up a board over its serial pins.
///
/// It implements [`fmt::Write`].
///
/// # Example
/// ```rust,no_run
/// use usart_mega32_driver::{Config, UsartTty};
/// use core::fmt::Write;
///
/// let mut tty = unsafe { UsartTty::new_mmio(Config::default()).expect("should initialize device") };
/// tty.write_str("hello world\nhow's it going?");
/// ```
#[derive(Debug)]
pub struct UsartTty<B: Backend>(Usart<B>);

impl UsartTty<MmioBackend> {
    /// Creates a new [`UsartTty`] backed by the memory-mapped register file
    /// of the target part.
    ///
    /// Initializes the device.
    ///
    /// # Safety
    ///
    /// Callers must ensure exclusive access to the USART registers and that
    /// direct hardware access is valid in the calling context.
    pub unsafe fn new_mmio(config: Config) -> Result<Self, UsartTtyError> {
        // SAFETY: The caller upholds the exclusive-access requirement.
        let inner = unsafe { Usart::new_mmio(config) };
        Self::with_usart(inner)
    }
}

impl<B: Backend> UsartTty<B> {
    /// Creates a new [`UsartTty`] on top of the provided [`Backend`].
    ///
    /// Initializes the device.
    pub fn new(backend: B, config: Config) -> Result<Self, UsartTtyError> {
        Self::with_usart(Usart::new(backend, config))
    }

    fn with_usart(mut inner: Usart<B>) -> Result<Self, UsartTtyError> {
        inner.init().map_err(UsartTtyError::Init)?;
        Ok(Self(inner))
    }

    /// Returns a reference to the underlying [`Usart`].
    #[must_use]
    pub const fn inner(&self) -> &Usart<B> {
        &self.0
    }

    /// Returns a mutable reference to the underlying [`Usart`].
    pub fn inner_mut(&mut self) -> &mut Usart<B> {
        &mut self.0
    }
}

impl<B: Backend> fmt::Write for UsartTty<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            match byte {
                // backspace or delete
                8 | 0x7f => {
                    self.0.send_bytes_all(&[8]);
                    self.0.send_bytes_all(b" ");
                    self.0.send_bytes_all(&[8]);
                }
                // Normal Rust newlines to terminal-compatible newlines.
                b'\n' => {
                    self.0.send_bytes_all(b"\r");
                    self.0.send_bytes_all(b"\n");
                }
                data => {
                    self.0.send_bytes_all(&[data]);
                }
            }
        }

        Ok(())
    }
}
