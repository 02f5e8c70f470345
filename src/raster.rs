//! Polygon rasterization
//!
//! Aliased scan-conversion only: lines are Bresenham, interiors are
//! even-odd scanline fills. Later draws overwrite earlier ones at
//! overlapping pixels (painter's algorithm); ordering is the caller's.

use log::warn;

use crate::buffer::PixelBuffer;
use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::vertex::Vertex2;

/// Draw a line from `p1` to `p2` of color `c`
///
/// Uses [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
/// in the symmetric integer form. Both endpoints are plotted; a
/// zero-length line plots the single pixel at `p1`. Pixels falling
/// outside the buffer are clipped.
///
///     use scanfill::{PixelBuffer, Rgb8, Vertex2, draw_line};
///
///     let mut buf = PixelBuffer::new(11, 1);
///     draw_line(&mut buf, Vertex2::new(0,0), Vertex2::new(10,0), Rgb8::white());
///     assert_eq!(buf.get((0,0)),  Rgb8::white());
///     assert_eq!(buf.get((10,0)), Rgb8::white());
///
pub fn draw_line(buf: &mut PixelBuffer, p1: Vertex2, p2: Vertex2, c: Rgb8) {
    let dx = (p2.x - p1.x).abs();
    let dy = (p2.y - p1.y).abs();
    let sx = if p1.x < p2.x { 1 } else { -1 };
    let sy = if p1.y < p2.y { 1 } else { -1 };

    let mut err = dx - dy;
    let mut x = p1.x;
    let mut y = p1.y;

    loop {
        buf.set_pixel(Vertex2::new(x, y), c);
        if x == p2.x && y == p2.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw the closed outline of a polygon
///
/// Each edge (vertex\[i\] to vertex\[(i+1) % n\], including the closing
/// edge) is drawn `border_width` times, with both endpoints shifted left
/// by 0..border_width pixels. The widening is horizontal-only: vertical
/// edges get a full-width border, horizontal edges none. Kept for
/// compatibility with existing output rather than a perpendicular stroke.
///
/// `border_width <= 0` draws nothing. Fewer than 3 vertices is an error.
pub fn draw_polygon(buf: &mut PixelBuffer, vertices: &[Vertex2], c: Rgb8,
                    border_width: i64) -> Result<()> {
    if vertices.len() < 3 {
        return Err(Error::InvalidGeometry(vertices.len()));
    }
    if border_width <= 0 {
        return Ok(());
    }
    let n = vertices.len();
    for i in 0 .. n {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];
        for j in 0 .. border_width {
            draw_line(buf,
                      Vertex2::new(p1.x - j, p1.y),
                      Vertex2::new(p2.x - j, p2.y),
                      c);
        }
    }
    Ok(())
}

/// Fill the interior of a polygon under the even-odd rule
///
/// Scanline fill: for each integer row spanned by the polygon, collect
/// the x-intercepts of edges straddling the row, sort them, and fill
/// half-open spans between successive pairs. An edge qualifies under the
/// half-open test `start.y <= y < end.y` (either direction), so each
/// shared vertex is counted exactly once and horizontal edges contribute
/// nothing.
///
/// All spans are computed and validated before any pixel is written; an
/// odd intercept count on any row fails with
/// [`Error::MalformedFill`](crate::Error::MalformedFill) and leaves the
/// buffer untouched.
///
///     use scanfill::{PixelBuffer, Rgb8, Vertex2, fill_polygon};
///
///     let mut buf = PixelBuffer::new(10, 10);
///     let rect = [Vertex2::new(2,2), Vertex2::new(8,2),
///                 Vertex2::new(8,6), Vertex2::new(2,6)];
///     fill_polygon(&mut buf, &rect, Rgb8::white()).unwrap();
///     assert_eq!(buf.get((2,2)), Rgb8::white());
///     assert_eq!(buf.get((8,2)), Rgb8::black()); // half-open in x
///     assert_eq!(buf.get((2,6)), Rgb8::black()); // half-open in y
///
pub fn fill_polygon(buf: &mut PixelBuffer, vertices: &[Vertex2], c: Rgb8)
                    -> Result<()> {
    let spans = fill_spans(vertices)?;
    for (y, xs) in &spans {
        for pair in xs.chunks_exact(2) {
            for x in pair[0] .. pair[1] {
                buf.set_pixel(Vertex2::new(x, *y), c);
            }
        }
    }
    Ok(())
}

/// Collect sorted x-intercepts per scanline for the polygon
///
/// The intercept of an edge with row `y` is interpolated in integer
/// arithmetic with truncation toward zero, matching the fill's fixed
/// contract. Rows with no intercepts are omitted.
fn fill_spans(vertices: &[Vertex2]) -> Result<Vec<(i64, Vec<i64>)>> {
    if vertices.len() < 3 {
        return Err(Error::InvalidGeometry(vertices.len()));
    }
    let n = vertices.len();
    let min_y = vertices.iter().map(|v| v.y).min().unwrap_or(0);
    let max_y = vertices.iter().map(|v| v.y).max().unwrap_or(0);

    let mut spans = Vec::new();
    for y in min_y ..= max_y {
        let mut xs = Vec::new();
        for i in 0 .. n {
            let p1 = vertices[i];
            let p2 = vertices[(i + 1) % n];
            if (p1.y <= y && y < p2.y) || (p2.y <= y && y < p1.y) {
                let x = p1.x + (p2.x - p1.x) * (y - p1.y) / (p2.y - p1.y);
                xs.push(x);
            }
        }
        if xs.len() % 2 != 0 {
            warn!("unpaired intercept on scanline y={} ({} crossings)", y, xs.len());
            return Err(Error::MalformedFill { y, count: xs.len() });
        }
        if ! xs.is_empty() {
            xs.sort_unstable();
            spans.push((y, xs));
        }
    }
    Ok(spans)
}
