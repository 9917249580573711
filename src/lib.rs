//! Pico Scroll Pack LED Matrix Driver
//!
//! A driver for the IS31FL3731 matrix LED controller as wired on the
//! Pimoroni Pico Scroll Pack: 17x7 single-color pixels with 8-bit PWM,
//! driven over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Logical screen-coordinate frames, remapped to the panel's mirrored
//!   electrical wiring on every draw
//! - Full-frame pushes in a single bus transaction
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pico_scroll::{Frame, I2cInterface, Matrix};
//!
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
//! # let i2c = MockI2c;
//! // i2c: any embedded-hal v1.0 I2C bus, already configured by the HAL
//! let mut matrix = Matrix::new(I2cInterface::new(i2c));
//! if matrix.init().is_err() {
//!     return;
//! }
//!
//! let mut frame = Frame::new();
//! frame.set(3, 2, 0x0F);
//! let _ = matrix.draw(&frame);
//! ```
//!
//! The scanning bring-up animation is a frame iterator, decoupled from the
//! bus; see [`Scan`].

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Scanning pixel animation
pub mod animation;
/// Error types for the driver
pub mod error;
/// Logical pixel buffer
pub mod frame;
/// Hardware interface abstraction
pub mod interface;
/// Logical to electrical pixel remapping
pub mod mapper;
/// Core matrix operations
pub mod matrix;
/// IS31FL3731 register definitions
pub mod register;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use animation::{SCAN_PWM, Scan};
pub use error::Error;
pub use frame::{Frame, HEIGHT, PIXELS, WIDTH};
pub use interface::{DEFAULT_ADDRESS, I2cInterface, RegisterInterface};
pub use mapper::remap;
pub use matrix::Matrix;
