//! IS31FL3731 register definitions
//!
//! This module defines the register addresses used to control the IS31FL3731
//! matrix LED controller. Every write is a single I2C transaction of the
//! register address followed by one or more payload bytes.
//!
//! ## Register Pages
//!
//! The controller multiplexes its register space through the command
//! register ([`COMMAND`]): writing a page number there selects which bank
//! the other register addresses refer to. The function registers live on
//! page [`PAGE_FUNCTION`]; the per-frame LED control and PWM blocks live on
//! the frame pages (this driver only ever uses frame 0, [`PAGE_FRAME`]).
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
//! # let mut interface = I2cInterface::new(MockI2c);
//! // Select the function register page, then leave software shutdown
//! let _ = interface.write_register(register::COMMAND, register::PAGE_FUNCTION);
//! let _ = interface.write_register(register::SHUTDOWN, register::NORMAL_OPERATION);
//! ```

// Page selection

/// Command register (0xFD)
///
/// Selects the register page all other addresses resolve against.
/// Requires 1 byte: [`PAGE_FUNCTION`] or a frame page number.
pub const COMMAND: u8 = 0xFD;

/// Function register page (0x0B)
///
/// Bank holding the configuration, display and shutdown registers.
pub const PAGE_FUNCTION: u8 = 0x0B;

/// Picture frame 0 page (0x00)
///
/// Bank holding frame 0's LED control and PWM blocks. The controller
/// stores 8 frames; this driver only ever addresses frame 0.
pub const PAGE_FRAME: u8 = 0x00;

// Function page registers

/// Configuration register (0x00, function page)
///
/// Upper bits select the display mode, lower bits the start frame.
/// [`MODE_PICTURE`] shows a single stored frame.
pub const CONFIG: u8 = 0x00;

/// Picture display register (0x01, function page)
///
/// Selects which stored frame is shown in picture mode.
pub const PICTURE_DISPLAY: u8 = 0x01;

/// Auto play control register 1 (0x02, function page)
///
/// Frame cycling configuration; zeroed since picture mode ignores it.
pub const AUTO_PLAY_CONTROL_1: u8 = 0x02;

/// Auto play control register 2 (0x03, function page)
///
/// Frame delay configuration; zeroed since picture mode ignores it.
pub const AUTO_PLAY_CONTROL_2: u8 = 0x03;

/// Display option register (0x06, function page)
///
/// Intensity and blink control; zeroed for steady full-range output.
pub const DISPLAY_OPTION: u8 = 0x06;

/// Shutdown register (0x0A, function page)
///
/// Requires 1 byte: [`SOFTWARE_SHUTDOWN`] or [`NORMAL_OPERATION`].
pub const SHUTDOWN: u8 = 0x0A;

// Frame page blocks

/// LED control block base (0x00, frame page)
///
/// [`LED_CONTROL_LEN`] on/off mask bytes, one per electrical column.
pub const LED_CONTROL: u8 = 0x00;

/// PWM block base (0x24, frame page)
///
/// [`PWM_LEN`] brightness bytes, one per LED address, in the controller's
/// electrical ordering.
pub const PWM: u8 = 0x24;

// Block sizes

/// Length of the LED control block in bytes (18)
pub const LED_CONTROL_LEN: usize = 0x12;

/// Length of the PWM block in bytes (144)
///
/// Fixed by the controller; larger than the 17x7 visible matrix.
pub const PWM_LEN: usize = 0x90;

// Register values

/// Configuration value for picture mode, start frame 0
pub const MODE_PICTURE: u8 = 0x00;

/// Shutdown register value entering software shutdown
pub const SOFTWARE_SHUTDOWN: u8 = 0x00;

/// Shutdown register value for normal operation
pub const NORMAL_OPERATION: u8 = 0x01;

/// LED control mask enabling the seven wired LEDs of a column
///
/// The Scroll Pack wires 7 of the 8 LEDs each control byte covers; the
/// high bit stays off.
pub const COLUMN_ENABLE: u8 = 0x7F;
