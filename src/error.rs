//! Error types for the driver
//!
//! A single error enum covers the whole crate: the transport reports bus
//! failures verbatim, and block writes that would overflow the controller's
//! PWM block are rejected before touching the bus. The pixel remap and the
//! frame/animation types have no error path.
//!
//! ## Example
//!
//! ```
//! use pico_scroll::{register, Error};
//!
//! let err: Error<()> = Error::BufferOverrun {
//!     requested: 200,
//!     capacity: register::PWM_LEN,
//! };
//! assert!(matches!(err, Error::BufferOverrun { .. }));
//! ```

use core::fmt::Debug;

/// Errors that can occur when talking to the controller
///
/// Generic over the bus error type so callers can match on the underlying
/// hardware error.
#[derive(Debug)]
pub enum Error<BusE> {
    /// Bus transaction failure (NACK, arbitration loss, timeout)
    ///
    /// Wraps the underlying error from the I2C implementation. The driver
    /// does not distinguish causes and never retries; the error surfaces to
    /// the caller unchanged.
    Bus(BusE),
    /// Block payload exceeds the controller's maximum transaction size
    ///
    /// Block writes are bounded by [`crate::register::PWM_LEN`] payload
    /// bytes, the largest register block the controller exposes.
    BufferOverrun {
        /// Payload length that was requested
        requested: usize,
        /// Largest payload the transport accepts
        capacity: usize,
    },
}

impl<BusE: Debug> core::fmt::Display for Error<BusE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::BufferOverrun {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Buffer overrun: requested {requested} bytes, capacity {capacity}"
                )
            }
        }
    }
}

impl<BusE: Debug> core::error::Error for Error<BusE> {}
