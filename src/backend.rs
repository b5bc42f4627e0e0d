// SPDX-License-Identifier: MIT OR Apache-2.0

//! Abstraction over the I/O backend (Hardware Abstraction Layer (HAL)).
//!
//! Main exports:
//! - [`Backend`]
//! - [`MmioBackend`]

use crate::spec::registers::addresses;
use core::ptr::{read_volatile, write_volatile};

fn assert_register(address: u8) {
    assert!(
        addresses::ALL.contains(&address),
        "the address should name a USART register: {address:#04x}"
    );
}

/// Abstraction over the I/O backend of the USART peripheral.
///
/// This acts as Hardware Abstraction Layer (HAL). Implementations must
/// perform each access as a single volatile 8-bit operation and must keep
/// accesses in program order; the shared UBRRH/UCSRC address in particular
/// depends on the order of stores.
pub trait Backend {
    /// Reads one byte from the specified register.
    ///
    /// This needs a mutable reference as reads can have side effects on the
    /// device, depending on the register.
    ///
    /// # Arguments
    ///
    /// - `address`: Absolute data-space address of the register, one of
    ///   [`addresses::ALL`].
    ///
    /// # Safety
    ///
    /// Callers must ensure that the provided address is valid and safe to
    /// read.
    unsafe fn read_register(&mut self, address: u8) -> u8;

    /// Writes one byte to the specified register.
    ///
    /// Writes can have side effects on the device, depending on the register.
    ///
    /// # Arguments
    ///
    /// - `address`: Absolute data-space address of the register, one of
    ///   [`addresses::ALL`].
    ///
    /// # Safety
    ///
    /// Callers must ensure that the provided address is valid and safe to
    /// write.
    unsafe fn write_register(&mut self, address: u8, value: u8);
}

/// Memory-mapped USART register file.
///
/// On the target part the USART registers live in the lower data space, so
/// plain volatile loads and stores on their absolute addresses reach the
/// hardware.
#[derive(Debug)]
pub struct MmioBackend(());

impl MmioBackend {
    /// Creates the backend.
    ///
    /// # Safety
    ///
    /// Callers must ensure exclusive access to the USART register file, i.e.
    /// no interrupt service routine or second driver instance touches these
    /// registers concurrently.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self(())
    }
}

impl Backend for MmioBackend {
    unsafe fn read_register(&mut self, address: u8) -> u8 {
        assert_register(address);

        // SAFETY: The caller ensured that the register address is safe to
        // use.
        unsafe { read_volatile(address as usize as *const u8) }
    }

    unsafe fn write_register(&mut self, address: u8, value: u8) {
        assert_register(address);

        // SAFETY: The caller ensured that the register address is safe to
        // use.
        unsafe { write_volatile(address as usize as *mut u8, value) }
    }
}
