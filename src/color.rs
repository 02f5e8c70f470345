//! Colors

/// Color as Red, Green, Blue
///
/// Three independent 8-bit channels. Plain value type, no identity beyond
/// its components.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Gray Color (g,g,g)
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
}
