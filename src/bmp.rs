//! Writing of BMP (Windows Bitmap) files
//!
//! Fixed 24-bit uncompressed container: a 14-byte file header, a 40-byte
//! info header, then raw blue-green-red pixel data. Two deviations from
//! the conventional container are kept deliberately and are part of the
//! byte-exact contract:
//!
//! - rows are stored top-down, in buffer order, with no bottom-up flip;
//! - rows carry no 4-byte alignment padding, so conventional readers only
//!   agree with this layout when `width * 3` is a multiple of 4.
//!
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::Result;

/// Total header size preceding pixel data
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;
const BITS_PER_PIXEL: u16 = 24;

/// 14-byte file header
struct FileHeader {
    file_size: u32,
    data_offset: u32,
}

/// 40-byte info header, uncompressed 24-bit
struct InfoHeader {
    width: i32,
    height: i32,
    image_size: u32,
}

impl FileHeader {
    fn put(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // Reserved
        out.extend_from_slice(&self.data_offset.to_le_bytes());
    }
}

impl InfoHeader {
    fn put(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // Color planes
        out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // Compression
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // Horizontal resolution
        out.extend_from_slice(&0u32.to_le_bytes()); // Vertical resolution
        out.extend_from_slice(&0u32.to_le_bytes()); // Palette size
        out.extend_from_slice(&0u32.to_le_bytes()); // Important colors
    }
}

/// Serialize a buffer into BMP bytes
///
/// Pure transformation; the result is always exactly
/// `54 + width * height * 3` bytes.
pub fn encode(buf: &PixelBuffer) -> Vec<u8> {
    let image_size = buf.len();
    let mut out = Vec::with_capacity(HEADER_SIZE + image_size);
    FileHeader {
        file_size: (image_size + HEADER_SIZE) as u32,
        data_offset: HEADER_SIZE as u32,
    }.put(&mut out);
    InfoHeader {
        width: buf.width() as i32,
        height: buf.height() as i32,
        image_size: image_size as u32,
    }.put(&mut out);
    out.extend_from_slice(buf.pixeldata());
    out
}

/// Encode `buf` and write it to `filename`
///
/// Creates or overwrites the file; a single blocking write, no partial
/// write recovery. I/O failures surface as [`Error::Io`](crate::Error::Io).
pub fn write_file<P: AsRef<Path>>(buf: &PixelBuffer, filename: P) -> Result<()> {
    let bytes = encode(buf);
    let mut file = File::create(filename)?;
    file.write_all(&bytes)?;
    debug!("wrote {} byte bmp, {}x{}", bytes.len(), buf.width(), buf.height());
    Ok(())
}
