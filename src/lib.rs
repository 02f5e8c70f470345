//! Scan-conversion of 2D polygons into a 24-bit pixel buffer
//!
//! The pipeline is a one-shot, single-threaded sequence:
//!
//! ```text
//!    buf = PixelBuffer( width, height )
//!    buf.clear( color )
//!  Raster Operations (per shape, painter's order)
//!    fill_polygon()   -- even-odd scanline fill
//!    draw_polygon()   -- outline, repeated offset lines
//!       draw_line()   -- Bresenham, both endpoints plotted
//!  Serialize
//!    bmp::write_file(buf, path)
//! ```
//!
//! Pixels are stored blue-green-red, matching the output container, so the
//! encoder is a straight copy of the buffer behind a 54-byte header.
//!
//!     use scanfill::{PixelBuffer, Rgb8, Vertex2, fill_polygon, draw_polygon};
//!
//!     let mut buf = PixelBuffer::new(100, 100);
//!     buf.clear(Rgb8::black());
//!     let tri = [Vertex2::new(10,10), Vertex2::new(50,90), Vertex2::new(90,10)];
//!     fill_polygon(&mut buf, &tri, Rgb8::new(255,0,0)).unwrap();
//!     draw_polygon(&mut buf, &tri, Rgb8::white(), 3).unwrap();

pub mod buffer;
pub mod color;
pub mod vertex;
pub mod raster;
pub mod bmp;
pub mod error;

pub use buffer::*;
pub use color::*;
pub use vertex::*;
pub use raster::*;
pub use error::*;
