use scanfill::{fill_polygon, Error, PixelBuffer, Rgb8, Vertex2};

fn verts(v: &[(i64, i64)]) -> Vec<Vertex2> {
    v.iter().map(|&(x, y)| Vertex2::new(x, y)).collect()
}

#[test]
fn rectangle_fills_half_open_region() {
    let mut buf = PixelBuffer::new(12, 10);
    let rect = verts(&[(2, 2), (8, 2), (8, 6), (2, 6)]);
    fill_polygon(&mut buf, &rect, Rgb8::white()).unwrap();
    for x in 0..buf.width() as i64 {
        for y in 0..buf.height() as i64 {
            let inside = (2..8).contains(&x) && (2..6).contains(&y);
            let expect = if inside { Rgb8::white() } else { Rgb8::black() };
            assert_eq!(buf.get((x as usize, y as usize)), expect, "({},{})", x, y);
        }
    }
}

#[test]
fn adjacent_rectangles_share_edges_without_overlap_or_gap() {
    // Two rectangles sharing the x=6 edge; half-open spans mean each
    // column is painted by exactly one fill.
    let mut buf = PixelBuffer::new(12, 8);
    let left = verts(&[(2, 2), (6, 2), (6, 6), (2, 6)]);
    let right = verts(&[(6, 2), (10, 2), (10, 6), (6, 6)]);
    fill_polygon(&mut buf, &left, Rgb8::new(255, 0, 0)).unwrap();
    fill_polygon(&mut buf, &right, Rgb8::new(0, 0, 255)).unwrap();
    for y in 2..6 {
        for x in 2..6 {
            assert_eq!(buf.get((x, y)), Rgb8::new(255, 0, 0));
        }
        for x in 6..10 {
            assert_eq!(buf.get((x, y)), Rgb8::new(0, 0, 255));
        }
        assert_eq!(buf.get((10, y)), Rgb8::black());
    }
}

#[test]
fn triangle_with_vertex_on_scanline() {
    // Apex at (4,4); the half-open rule keeps every scanline's intercepts
    // paired, including rows through vertices.
    let mut buf = PixelBuffer::new(10, 6);
    let tri = verts(&[(0, 0), (4, 4), (8, 0)]);
    fill_polygon(&mut buf, &tri, Rgb8::white()).unwrap();

    // Row widths narrow toward the apex
    assert_eq!(buf.get((0, 0)), Rgb8::white());
    assert_eq!(buf.get((7, 0)), Rgb8::white());
    assert_eq!(buf.get((1, 1)), Rgb8::white());
    assert_eq!(buf.get((6, 1)), Rgb8::white());
    assert_eq!(buf.get((4, 3)), Rgb8::white());
    // Apex row is excluded by the half-open test
    assert_eq!(buf.get((4, 4)), Rgb8::black());
}

#[test]
fn concave_polygon_fills_both_lobes() {
    // A "U" shape; rows through the notch get two spans.
    let mut buf = PixelBuffer::new(14, 10);
    let u = verts(&[(2, 2), (5, 2), (5, 6), (8, 6), (8, 2), (11, 2), (11, 8), (2, 8)]);
    fill_polygon(&mut buf, &u, Rgb8::white()).unwrap();
    // Notch row: left arm filled, notch empty, right arm filled
    assert_eq!(buf.get((3, 4)), Rgb8::white());
    assert_eq!(buf.get((6, 4)), Rgb8::black());
    assert_eq!(buf.get((9, 4)), Rgb8::white());
    // Below the notch the shape is solid
    assert_eq!(buf.get((6, 7)), Rgb8::white());
}

#[test]
fn self_intersecting_polygon_follows_even_odd_rule() {
    let mut buf = PixelBuffer::new(6, 6);
    let bowtie = verts(&[(0, 0), (4, 4), (4, 0), (0, 4)]);
    assert!(fill_polygon(&mut buf, &bowtie, Rgb8::white()).is_ok());
}

#[test]
fn degenerate_vertex_counts_are_rejected() {
    let mut buf = PixelBuffer::new(6, 6);
    for n in 0..3 {
        let vs = verts(&vec![(1, 1); n]);
        match fill_polygon(&mut buf, &vs, Rgb8::white()) {
            Err(Error::InvalidGeometry(got)) => assert_eq!(got, n),
            other => panic!("expected InvalidGeometry for {} vertices, got {:?}", n, other),
        }
    }
    // Nothing was drawn by the failed calls
    assert!(buf.pixeldata().iter().all(|&v| v == 0));
}

#[test]
fn horizontal_edges_contribute_no_intercepts() {
    // Degenerate flat polygon: every edge is horizontal, so no scanline
    // collects an intercept and the buffer stays empty.
    let mut buf = PixelBuffer::new(8, 4);
    let flat = verts(&[(1, 2), (4, 2), (6, 2)]);
    fill_polygon(&mut buf, &flat, Rgb8::white()).unwrap();
    assert!(buf.pixeldata().iter().all(|&v| v == 0));
}

#[test]
fn off_canvas_fill_is_clipped() {
    let mut buf = PixelBuffer::new(4, 4);
    let big = verts(&[(-10, -10), (20, -10), (20, 20), (-10, 20)]);
    fill_polygon(&mut buf, &big, Rgb8::white()).unwrap();
    for x in 0..4 {
        for y in 0..4 {
            assert_eq!(buf.get((x, y)), Rgb8::white());
        }
    }
}

#[test]
fn truncating_interpolation_matches_fixed_contract() {
    // Left edge from (0,0) to (3,7): intercepts truncate toward zero,
    // so row y has first span pixel at floor(3*y/7).
    let mut buf = PixelBuffer::new(8, 8);
    let tri = verts(&[(0, 0), (3, 7), (7, 0)]);
    fill_polygon(&mut buf, &tri, Rgb8::white()).unwrap();
    for y in 0..7i64 {
        let x0 = 3 * y / 7;
        assert_eq!(buf.get((x0 as usize, y as usize)), Rgb8::white(), "y={}", y);
        if x0 > 0 {
            assert_eq!(buf.get((x0 as usize - 1, y as usize)), Rgb8::black(), "y={}", y);
        }
    }
}
