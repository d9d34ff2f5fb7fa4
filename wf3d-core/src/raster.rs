/// Line rasterizer over a flat 24-bit pixel buffer
use crate::geometry::Point2D;

/// Bytes per pixel in a [`Canvas`]
pub const BYTES_PER_PIXEL: usize = 3;

/// An opaque 24-bit color.
///
/// Pixels are stored blue, green, red: the byte order of an uncompressed
/// 24-bit bitmap, so the buffer can be written out without reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Near-white canvas background
    pub const BACKGROUND: Color = Color::gray(245);

    /// Default wireframe stroke
    pub const STROKE: Color = Color::rgb(50, 50, 180);

    pub fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.b, self.g, self.r]
    }

    pub fn from_bytes(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Self::rgb(bytes[2], bytes[1], bytes[0])
    }
}

/// Draw a straight line from `from` to `to` (both inclusive) into a
/// row-major buffer of `width`x`height` pixels.
///
/// Integer Bresenham; pixels of the path that fall outside the buffer are
/// skipped and the rest of the line is still drawn. Pixel `n` of the path is
/// computed directly from `n`, so only the steps whose major-axis coordinate
/// lands inside the buffer are visited, however far away the endpoints are.
///
/// # Panics
///
/// Panics if `buf` is shorter than `width * height * 3` bytes.
pub fn draw_line(buf: &mut [u8], width: u32, height: u32, from: Point2D, to: Point2D, color: Color) {
    let (w, h) = (i64::from(width), i64::from(height));
    let (x0, y0) = (i64::from(from.x), i64::from(from.y));
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));

    // A line is convex: if its bounding box misses the buffer, so does every pixel
    if x0.max(x1) < 0 || x0.min(x1) >= w || y0.max(y1) < 0 || y0.min(y1) >= h {
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let len = dx.max(dy);
    let pixel = color.to_bytes();

    let mut plot = |x: i64, y: i64| {
        if x >= 0 && x < w && y >= 0 && y < h {
            let idx = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
            buf[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&pixel);
        }
    };

    if len == 0 {
        plot(x0, y0);
        return;
    }

    if dx >= dy {
        let (first, last) = visible_steps(x0, sx, len, w);
        for n in first..=last {
            plot(x0 + sx * n, y0 + sy * minor_offset(n, dy, len));
        }
    } else {
        let (first, last) = visible_steps(y0, sy, len, h);
        for n in first..=last {
            plot(x0 + sx * minor_offset(n, dx, len), y0 + sy * n);
        }
    }
}

/// Minor-axis offset of Bresenham pixel `n`: `n * minor / len` rounded, with
/// halves rounded away from the start point
fn minor_offset(n: i64, minor: i64, len: i64) -> i64 {
    let (n, minor, len) = (i128::from(n), i128::from(minor), i128::from(len));
    ((2 * n * minor + len) / (2 * len)) as i64
}

/// Inclusive range of steps `n` in `0..=len` for which `start + step * n`
/// falls in `0..size`. Empty when `first > last`.
fn visible_steps(start: i64, step: i64, len: i64, size: i64) -> (i64, i64) {
    let (first, last) = if step > 0 {
        (-start, size - 1 - start)
    } else {
        (start - (size - 1), start)
    };
    (first.max(0), last.min(len))
}

/// An owned RGB pixel buffer, row-major from the top row down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(size * BYTES_PER_PIXEL);
        for _ in 0..size {
            pixels.extend_from_slice(&background.to_bytes());
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, background: Color) {
        let bytes = background.to_bytes();
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn draw_line(&mut self, from: Point2D, to: Point2D, color: Color) {
        draw_line(&mut self.pixels, self.width, self.height, from, to, color);
    }

    /// Color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.pixels[idx..idx + BYTES_PER_PIXEL];
        Some(Color::from_bytes([px[0], px[1], px[2]]))
    }

    /// Number of pixels whose color differs from `background`
    pub fn painted_pixels(&self, background: Color) -> usize {
        let bytes = background.to_bytes();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| *px != bytes)
            .count()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;
    use std::time::{Duration, Instant};

    const RED: Color = Color::rgb(255, 0, 0);

    fn blank(width: u32, height: u32) -> Canvas {
        Canvas::new(width, height, Color::gray(0))
    }

    #[test]
    fn test_canvas_layout() {
        let canvas = Canvas::new(4, 3, Color::rgb(1, 2, 3));
        assert_eq!(canvas.as_bytes().len(), 4 * 3 * 3);
        // Stored blue, green, red
        assert_eq!(&canvas.as_bytes()[..3], &[3, 2, 1]);
        assert_eq!(canvas.painted_pixels(Color::rgb(1, 2, 3)), 0);
        assert_eq!(canvas.clone().into_bytes(), canvas.as_bytes());
    }

    #[test]
    fn test_single_point_line() {
        let mut canvas = blank(10, 10);
        canvas.draw_line(Point2::new(4, 6), Point2::new(4, 6), RED);
        assert_eq!(canvas.painted_pixels(Color::gray(0)), 1);
        assert_eq!(canvas.pixel(4, 6), Some(RED));
    }

    #[test]
    fn test_horizontal_vertical_diagonal() {
        let mut canvas = blank(10, 10);
        canvas.draw_line(Point2::new(1, 2), Point2::new(8, 2), RED);
        assert_eq!(canvas.painted_pixels(Color::gray(0)), 8);
        for x in 1..=8 {
            assert_eq!(canvas.pixel(x, 2), Some(RED));
        }

        let mut canvas = blank(10, 10);
        canvas.draw_line(Point2::new(3, 9), Point2::new(3, 0), RED);
        assert_eq!(canvas.painted_pixels(Color::gray(0)), 10);

        let mut canvas = blank(10, 10);
        canvas.draw_line(Point2::new(0, 0), Point2::new(9, 9), RED);
        assert_eq!(canvas.painted_pixels(Color::gray(0)), 10);
        for i in 0..10 {
            assert_eq!(canvas.pixel(i, i), Some(RED));
        }
    }

    #[test]
    fn test_endpoints_included_in_both_directions() {
        let mut forward = blank(20, 20);
        forward.draw_line(Point2::new(2, 3), Point2::new(17, 11), RED);
        assert_eq!(forward.pixel(2, 3), Some(RED));
        assert_eq!(forward.pixel(17, 11), Some(RED));

        let mut backward = blank(20, 20);
        backward.draw_line(Point2::new(17, 11), Point2::new(2, 3), RED);
        assert_eq!(backward.pixel(2, 3), Some(RED));
        assert_eq!(backward.pixel(17, 11), Some(RED));

        // One pixel per step along the major axis
        assert_eq!(forward.painted_pixels(Color::gray(0)), 16);
        assert_eq!(backward.painted_pixels(Color::gray(0)), 16);
    }

    #[test]
    fn test_clips_line_crossing_buffer() {
        let mut canvas = blank(10, 10);
        canvas.draw_line(Point2::new(-5, 4), Point2::new(20, 4), RED);
        assert_eq!(canvas.painted_pixels(Color::gray(0)), 10);
        assert_eq!(canvas.pixel(0, 4), Some(RED));
        assert_eq!(canvas.pixel(9, 4), Some(RED));
    }

    #[test]
    fn test_line_outside_draws_nothing() {
        let mut canvas = blank(10, 10);
        canvas.draw_line(Point2::new(-20, -3), Point2::new(-1, 50), RED);
        canvas.draw_line(Point2::new(10, 0), Point2::new(30, 9), RED);
        assert_eq!(canvas.painted_pixels(Color::gray(0)), 0);
    }

    #[test]
    fn test_extreme_endpoints_do_not_overflow() {
        let mut canvas = blank(10, 10);
        canvas.draw_line(Point2::new(5, 5), Point2::new(i32::MAX, 5), RED);
        assert_eq!(canvas.painted_pixels(Color::gray(0)), 5);
    }

    #[test]
    fn test_far_endpoint_outside_buffer() {
        let start = Instant::now();

        let mut canvas = blank(800, 800);
        canvas.draw_line(Point2::new(i32::MIN + 400, 400), Point2::new(400, 400), RED);
        assert_eq!(canvas.painted_pixels(Color::gray(0)), 401);

        let mut canvas = blank(800, 800);
        canvas.draw_line(Point2::new(3, i32::MAX), Point2::new(-2, i32::MIN), RED);
        canvas.draw_line(Point2::new(i32::MIN, i32::MIN), Point2::new(i32::MAX, i32::MAX), RED);
        assert!(canvas.painted_pixels(Color::gray(0)) > 0);

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    /// Step-by-step Bresenham with a bounds check on every step
    fn stepped_line(canvas: &mut Canvas, from: Point2D, to: Point2D, color: Color) {
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - x).abs();
        let dy = -(to.y - y).abs();
        let sx = if x < to.x { 1 } else { -1 };
        let sy = if y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);

        loop {
            if x >= 0 && x < w && y >= 0 && y < h {
                let idx = (y * w + x) as usize * BYTES_PER_PIXEL;
                canvas.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
            }
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    #[test]
    fn test_matches_stepped_bresenham() {
        let range = -4..12;
        for x0 in range.clone() {
            for y0 in range.clone() {
                for x1 in range.clone() {
                    for y1 in range.clone() {
                        let (from, to) = (Point2::new(x0, y0), Point2::new(x1, y1));
                        let mut direct = blank(8, 6);
                        let mut stepped = blank(8, 6);
                        direct.draw_line(from, to, RED);
                        stepped_line(&mut stepped, from, to, RED);
                        assert_eq!(direct, stepped, "line {:?} -> {:?}", from, to);
                    }
                }
            }
        }
    }

    #[test]
    fn test_draw_line_on_raw_buffer() {
        let mut buf = vec![0u8; 3 * 2 * BYTES_PER_PIXEL];
        draw_line(&mut buf, 3, 2, Point2::new(0, 1), Point2::new(2, 1), Color::rgb(9, 8, 7));
        assert_eq!(&buf[..9], &[0; 9]);
        assert_eq!(&buf[9..], &[7, 8, 9, 7, 8, 9, 7, 8, 9]);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let canvas = blank(4, 4);
        assert_eq!(canvas.pixel(-1, 0), None);
        assert_eq!(canvas.pixel(0, 4), None);
        assert_eq!(canvas.pixel(3, 3), Some(Color::gray(0)));
    }

    #[test]
    fn test_clear() {
        let mut canvas = blank(4, 4);
        canvas.draw_line(Point2::new(0, 0), Point2::new(3, 3), RED);
        canvas.clear(Color::gray(7));
        assert_eq!(canvas.painted_pixels(Color::gray(7)), 0);
    }
}
