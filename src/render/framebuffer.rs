//! Owned pixel grid with bounds-checked writes.

use crate::colors;

/// A width × height grid of packed ARGB8888 pixels, row-major.
///
/// All drawing funnels through [`FrameBuffer::put_pixel`], which silently
/// drops out-of-range writes. The raw bytes can be handed straight to a
/// streaming texture via [`FrameBuffer::as_bytes`].
pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            pixels: vec![colors::BLACK; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Writes `color` at (x, y) if the position is inside the buffer.
    ///
    /// Coordinates are compared as unsigned, so negative values wrap to
    /// huge ones and fail the same bounds check; there is no separate sign
    /// test. Out-of-range writes are dropped, never an error.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        let (x, y) = (x as u32, y as u32);
        if x < self.width && y < self.height {
            self.pixels[(x + y * self.width) as usize] = color;
        }
    }

    /// Reads the pixel at (x, y), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(x + y * self.width) as usize])
        } else {
            None
        }
    }

    /// The buffer as raw bytes in ARGB8888 layout, for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }
}
