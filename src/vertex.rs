//! Integer points in buffer pixel space

/// Point in buffer pixel space, origin at top-left
///
/// Coordinates carry no bounds invariant of their own; the buffer clips
/// at write time.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Vertex2 {
    pub x: i64,
    pub y: i64,
}

impl Vertex2 {
    /// Create a new point
    pub fn new(x: i64, y: i64) -> Self {
        Vertex2 { x, y }
    }
}

impl From<(i64,i64)> for Vertex2 {
    fn from(v: (i64,i64)) -> Self {
        Vertex2::new(v.0, v.1)
    }
}
