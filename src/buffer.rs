//! Pixel buffer

use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::vertex::Vertex2;

/// Bytes per pixel, fixed 24-bit layout
const BPP: usize = 3;

/// Pixel Buffer
///
/// Data is stored in row-major order (C-format), origin at top-left,
/// 3 bytes per pixel in blue-green-red order. The channel order matches
/// the output container so the encoder copies rows without swapping.
///
/// The buffer is sized at creation and never resized.
#[derive(Debug,Default)]
pub struct PixelBuffer {
    /// Component level data, `width * height * 3` bytes
    data: Vec<u8>,
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
}

impl PixelBuffer {
    /// Create a new buffer of width and height
    ///
    /// Data for the image is allocated and zeroed (black).
    ///
    /// # Panics
    /// If either dimension is 0.
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixel buffer with 0 width or height");
        }
        PixelBuffer {
            width, height, data: vec![0u8; width * height * BPP]
        }
    }
    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Size of underlying buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Raw component data, for the encoder
    pub fn pixeldata(&self) -> &[u8] {
        &self.data
    }
    /// Set every pixel to `color`
    pub fn clear(&mut self, color: Rgb8) {
        for px in self.data.chunks_exact_mut(BPP) {
            px[0] = color.b;
            px[1] = color.g;
            px[2] = color.r;
        }
    }
    /// Write `color` at `v`
    ///
    /// Locations outside of the buffer are ignored.
    ///
    ///     use scanfill::{PixelBuffer, Rgb8, Vertex2};
    ///
    ///     let mut buf = PixelBuffer::new(1,2);
    ///     let white = Rgb8::white();
    ///     buf.set_pixel(Vertex2::new(0,1), white);
    ///     assert_eq!(buf.get((0,0)), Rgb8::black());
    ///     assert_eq!(buf.get((0,1)), white);
    ///
    ///     buf.set_pixel(Vertex2::new(10,10), white); // Ignored, outside of range
    ///
    pub fn set_pixel(&mut self, v: Vertex2, color: Rgb8) {
        if v.x < 0 || v.y < 0 || v.x as usize >= self.width || v.y as usize >= self.height {
            return;
        }
        self.set((v.x as usize, v.y as usize), color);
    }
    /// Write `color` at `v`, failing on out-of-range locations
    ///
    /// Strict variant of [`set_pixel`](PixelBuffer::set_pixel) for callers
    /// that treat out-of-canvas geometry as an error.
    pub fn try_set(&mut self, v: Vertex2, color: Rgb8) -> Result<()> {
        if v.x < 0 || v.y < 0 || v.x as usize >= self.width || v.y as usize >= self.height {
            return Err(Error::OutOfBounds {
                x: v.x, y: v.y, width: self.width, height: self.height
            });
        }
        self.set((v.x as usize, v.y as usize), color);
        Ok(())
    }
    /// Read the pixel at `id`
    pub fn get(&self, id: (usize, usize)) -> Rgb8 {
        let p = &self[id];
        Rgb8::new(p[2], p[1], p[0])
    }
    fn set(&mut self, id: (usize, usize), c: Rgb8) {
        self[id][0] = c.b;
        self[id][1] = c.g;
        self[id][2] = c.r;
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for PixelBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * BPP;
        &self.data[i .. i + BPP]
    }
}
impl IndexMut<(usize,usize)> for PixelBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * BPP;
        &mut self.data[i .. i + BPP]
    }
}
