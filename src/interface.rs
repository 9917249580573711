//! Hardware interface abstraction
//!
//! This module provides the [`RegisterInterface`] trait and the
//! [`I2cInterface`] struct for communicating with the IS31FL3731 controller
//! over I2C.
//!
//! ## Hardware Requirements
//!
//! The controller sits on an I2C bus (SCL + SDA with pull-ups) and responds
//! at [`DEFAULT_ADDRESS`], or one of the alternate addresses selected by the
//! AD pin strapping. Bus and pin setup belong to the platform HAL; this
//! driver only consumes a configured [`I2c`] implementation.
//!
//! Every operation is a single blocking write transaction of the register
//! address followed by the payload. There is no retry and no timeout beyond
//! what the bus implementation itself enforces.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pico_scroll::{register, I2cInterface, RegisterInterface};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl embedded_hal::i2c::I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [embedded_hal::i2c::Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! // Create interface over an embedded-hal I2C bus
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Single-value write: [register, value]
//! let _ = interface.write_register(register::COMMAND, register::PAGE_FRAME);
//!
//! // Block write: [register, values...]
//! let _ = interface.write_register_block(register::LED_CONTROL, &[0x7F; 18]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

use crate::error::Error;
use crate::register;

/// Default I2C device address of the controller (0x74)
///
/// The AD pin selects 0x74 through 0x77; the Scroll Pack straps it to GND.
pub const DEFAULT_ADDRESS: u8 = 0x74;

/// Trait for the register transport to the IS31FL3731 controller
///
/// This trait abstracts over the bus implementation, allowing
/// [`Matrix`](crate::matrix::Matrix) to work with any transport that can
/// deliver register writes. Production code uses [`I2cInterface`]; tests use
/// a recording fake.
pub trait RegisterInterface {
    /// Error type for transport operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write a single value to a controller register
    ///
    /// Issues one 2-byte transaction `[register, value]` and blocks until
    /// the bus transaction completes or fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Write a contiguous block of values starting at a controller register
    ///
    /// Issues one transaction `[register, values...]` of `values.len() + 1`
    /// bytes and blocks until it completes or fails. The controller
    /// auto-increments the register address across the payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails or the payload exceeds
    /// the largest register block ([`register::PWM_LEN`] bytes).
    fn write_register_block(&mut self, register: u8, values: &[u8]) -> Result<(), Self::Error>;
}

/// Register transport over an embedded-hal v1.0 I2C bus
///
/// Owns the bus handle for the lifetime of the driver; transactions are
/// serialized by construction. [`release`](Self::release) hands the bus
/// back.
///
/// ## Example
///
/// ```rust,no_run
/// use pico_scroll::I2cInterface;
/// # use core::convert::Infallible;
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl embedded_hal::i2c::I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [embedded_hal::i2c::Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = I2cInterface::new(MockI2c);
///
/// // A part strapped to an alternate address:
/// let other = I2cInterface::with_address(MockI2c, 0x75);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus handle
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Create a new interface at [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a new interface at an alternate device address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the device address this interface talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Destroy the interface and release the owned bus handle
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterInterface for I2cInterface<I2C> {
    type Error = Error<I2C::Error>;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(Error::Bus)
    }

    fn write_register_block(&mut self, register: u8, values: &[u8]) -> Result<(), Self::Error> {
        if values.len() > register::PWM_LEN {
            return Err(Error::BufferOverrun {
                requested: values.len(),
                capacity: register::PWM_LEN,
            });
        }

        let mut packet = [0u8; register::PWM_LEN + 1];
        packet[0] = register;
        packet[1..=values.len()].copy_from_slice(values);

        self.i2c
            .write(self.address, &packet[..=values.len()])
            .map_err(Error::Bus)
    }
}
