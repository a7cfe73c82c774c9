//! Pixel-addressable drawing surface.
//!
//! The wheel, slider, checkerboard and preview rasterizers only talk to
//! [`Surface`]. [`PixelBuffer`] is the RGBA8 implementation that the views
//! upload as an image.

use crate::color::Rgb;

/// Minimal 2D drawing contract consumed by the rasterizers.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Reset a region to fully transparent.
    fn clear_rect(&mut self, x: u32, y: u32, w: u32, h: u32);

    /// Paint one opaque pixel. Out-of-bounds coordinates are ignored.
    fn set_pixel(&mut self, x: i64, y: i64, color: Rgb);

    /// Fill a rectangle with an opaque color, clipped to the surface.
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        for py in y..y.saturating_add(h).min(self.height()) {
            for px in x..x.saturating_add(w).min(self.width()) {
                self.set_pixel(px as i64, py as i64, color);
            }
        }
    }

    /// Fill a rectangle with a left-to-right linear gradient from `from`
    /// at `x` to `to` at `x + w - 1`.
    fn fill_horizontal_gradient(&mut self, x: u32, y: u32, w: u32, h: u32, from: Rgb, to: Rgb) {
        let (fr, fg, fb) = from.to_f64();
        let (tr, tg, tb) = to.to_f64();
        let span = w.saturating_sub(1).max(1) as f64;
        for col in 0..w {
            let t = col as f64 / span;
            let c = Rgb::from_f64(
                fr + (tr - fr) * t,
                fg + (tg - fg) * t,
                fb + (tb - fb) * t,
            );
            self.fill_rect(x + col, y, 1, h, c);
        }
    }

    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear_rect(0, 0, w, h);
    }
}

/// RGBA8 raster, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }

    /// Opaque color at `(x, y)`, or `None` if the pixel is transparent or out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = self.offset(x, y);
        if self.data[o + 3] == 0 {
            return None;
        }
        Some(Rgb::new(self.data[o], self.data[o + 1], self.data[o + 2]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        for py in y..y.saturating_add(h).min(self.height) {
            let start = self.offset(x.min(self.width), py);
            let end = self.offset(x.saturating_add(w).min(self.width), py);
            self.data[start..end].fill(0);
        }
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let o = self.offset(x as u32, y as u32);
        self.data[o] = color.r;
        self.data[o + 1] = color.g;
        self.data[o + 2] = color.b;
        self.data[o + 3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_transparent() {
        let buf = PixelBuffer::new(4, 3);
        assert_eq!(buf.as_bytes().len(), 48);
        assert_eq!(buf.pixel(0, 0), None);
    }

    #[test]
    fn set_pixel_ignores_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set_pixel(-1, 0, Rgb::WHITE);
        buf.set_pixel(2, 1, Rgb::WHITE);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
        buf.set_pixel(1, 1, Rgb::new(1, 2, 3));
        assert_eq!(buf.pixel(1, 1), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn fill_rect_clips() {
        let mut buf = PixelBuffer::new(3, 3);
        buf.fill_rect(1, 1, 10, 10, Rgb::WHITE);
        assert_eq!(buf.pixel(0, 0), None);
        assert_eq!(buf.pixel(2, 2), Some(Rgb::WHITE));
    }

    #[test]
    fn clear_rect_resets_region() {
        let mut buf = PixelBuffer::new(3, 1);
        buf.fill_rect(0, 0, 3, 1, Rgb::WHITE);
        buf.clear_rect(1, 0, 1, 1);
        assert_eq!(buf.pixel(0, 0), Some(Rgb::WHITE));
        assert_eq!(buf.pixel(1, 0), None);
        assert_eq!(buf.pixel(2, 0), Some(Rgb::WHITE));
    }

    #[test]
    fn horizontal_gradient_hits_both_ends() {
        let mut buf = PixelBuffer::new(11, 2);
        buf.fill_horizontal_gradient(0, 0, 11, 2, Rgb::BLACK, Rgb::new(200, 100, 0));
        assert_eq!(buf.pixel(0, 1), Some(Rgb::BLACK));
        assert_eq!(buf.pixel(10, 0), Some(Rgb::new(200, 100, 0)));
        assert_eq!(buf.pixel(5, 0), Some(Rgb::new(100, 50, 0)));
    }
}
