//! Graphics support via embedded-graphics
//!
//! This module implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait for
//! [`Frame`], so text, primitives and images from the embedded-graphics
//! ecosystem render straight into a logical frame. The panel is
//! single-color with per-pixel PWM, so the pixel color is [`Gray8`]: the
//! luma byte is the PWM byte.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::Gray8,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use pico_scroll::Frame;
//!
//! let mut frame = Frame::new();
//!
//! let _ = Rectangle::new(Point::new(1, 1), Size::new(3, 2))
//!     .into_styled(PrimitiveStyle::with_fill(Gray8::new(0x0F)))
//!     .draw(&mut frame);
//!
//! assert_eq!(frame.get(1, 1), Some(0x0F));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::{Gray8, GrayColor},
    prelude::Pixel,
};

use crate::frame::{Frame, HEIGHT, WIDTH};

impl DrawTarget for Frame {
    type Color = Gray8;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set(point.x as usize, point.y as usize, color.luma());
        }

        Ok(())
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    #[test]
    fn test_size_matches_the_panel() {
        assert_eq!(Frame::new().size(), Size::new(17, 7));
    }

    #[test]
    fn test_draw_line_sets_pwm_bytes() {
        let mut frame = Frame::new();
        Line::new(Point::new(0, 0), Point::new(4, 0))
            .into_styled(PrimitiveStyle::with_stroke(Gray8::new(0x20), 1))
            .draw(&mut frame)
            .unwrap();

        for x in 0..5 {
            assert_eq!(frame.get(x, 0), Some(0x20));
        }
        assert_eq!(frame.get(5, 0), Some(0));
    }

    #[test]
    fn test_out_of_bounds_pixels_are_discarded() {
        let mut frame = Frame::new();
        frame
            .draw_iter([
                Pixel(Point::new(-1, 0), Gray8::new(0xFF)),
                Pixel(Point::new(0, -3), Gray8::new(0xFF)),
                Pixel(Point::new(40, 2), Gray8::new(0xFF)),
                Pixel(Point::new(2, 40), Gray8::new(0xFF)),
            ])
            .unwrap();

        assert!(frame.data().iter().all(|&b| b == 0));
    }
}
