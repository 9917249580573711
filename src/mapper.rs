//! Logical to electrical pixel remapping
//!
//! The Scroll Pack wires the matrix as mirrored column pairs: the controller
//! addresses LEDs in blocks of 8 electrical rows, and every second block is
//! wired backwards across the panel's midline. This module translates a
//! logical row-major buffer into that electrical ordering.
//!
//! For each electrical index `j`, the source pixel is derived on two axes,
//! `fast` (which logical column) and `slow` (which logical row):
//!
//! - even blocks count `fast` up from the panel midline and take `slow`
//!   directly,
//! - odd blocks count `fast` down from the midline and reverse `slow`.
//!
//! Slots whose derived axes land outside the wired area are skipped and
//! stay dark.
//!
//! ## Example
//!
//! ```
//! use pico_scroll::mapper::remap;
//! use pico_scroll::register::PWM_LEN;
//!
//! let mut logical = [0u8; PWM_LEN];
//! logical[8] = 0x0F; // pixel (8, 0)
//!
//! let physical = remap(&logical);
//! // Electrical index 0 sources the midline pixel of the top row
//! assert_eq!(physical[0], 0x0F);
//! ```

use crate::frame::{HEIGHT, WIDTH};
use crate::register::PWM_LEN;

/// Remap a logical frame buffer into the controller's electrical ordering
///
/// Pure transform: the same input always yields the same output, and no
/// slot of the input is modified. The input carries the visible pixels in
/// its first `WIDTH * HEIGHT` bytes (see [`crate::Frame`]); the output is
/// the full PWM block, with unwired slots left at zero.
///
/// The range guards are exclusive (`>` rather than `>=`): the eight-row
/// electrical blocks overhang a seven-row panel, and the overhang slots of
/// even blocks source bytes from the logical buffer's slack region instead
/// of being skipped. Zero-filled slack keeps those LEDs dark. The
/// `strict-remap` feature tightens the guards to inclusive bounds so
/// overhang slots are never sourced at all.
pub fn remap(logical: &[u8; PWM_LEN]) -> [u8; PWM_LEN] {
    let mut physical = [0u8; PWM_LEN];

    for (j, slot) in physical.iter_mut().enumerate() {
        let col = j / 8;
        let row = j % 8;

        // fast/slow wrap for slots past the wired area; the guards drop them.
        let (fast, slow) = if col % 2 == 1 {
            (
                (WIDTH / 2).wrapping_sub(col / 2).wrapping_sub(1),
                HEIGHT.wrapping_sub(row).wrapping_sub(1),
            )
        } else {
            (WIDTH / 2 + col / 2, row)
        };

        if out_of_range(fast, slow) {
            continue;
        }

        *slot = logical[fast + slow * WIDTH];
    }

    physical
}

fn out_of_range(fast: usize, slow: usize) -> bool {
    if cfg!(feature = "strict-remap") {
        fast >= WIDTH || slow >= HEIGHT
    } else {
        fast > WIDTH || slow > HEIGHT
    }
}
