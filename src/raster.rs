// CPU stand-in for the GL draw path: viewport mapping, clear, and a
// triangle fill whose fragment stage colors each pixel by its clip-space
// position.

use crate::im::RGBAIm;
use crate::mat3::Mat3;

/// Window-space rectangle that clip space `[-1, 1]` maps onto.
///
/// Like GL, `(x, y)` is the lower-left corner with y growing upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn full(im: &RGBAIm) -> Self {
        Self::new(0, 0, im.w as i32, im.h as i32)
    }

    /// Clip space to image coordinates (origin top-left, y down).
    #[inline]
    pub fn clip_to_image(&self, im_h: usize, cx: f32, cy: f32) -> (f32, f32) {
        let wx = self.x as f32 + (cx + 1.0) * 0.5 * self.width as f32;
        let wy = self.y as f32 + (cy + 1.0) * 0.5 * self.height as f32;
        (wx, im_h as f32 - wy)
    }

    /// Image coordinates back to clip space.
    #[inline]
    pub fn image_to_clip(&self, im_h: usize, ix: f32, iy: f32) -> (f32, f32) {
        let wy = im_h as f32 - iy;
        let cx = (ix - self.x as f32) / self.width as f32 * 2.0 - 1.0;
        let cy = (wy - self.y as f32) / self.height as f32 * 2.0 - 1.0;
        (cx, cy)
    }

    /// `(l, t, r, b)` in image pixels, right/bottom exclusive, clamped to the image.
    fn image_bounds(&self, im: &RGBAIm) -> (usize, usize, usize, usize) {
        let clamp_x = |v: i64| v.clamp(0, im.w as i64) as usize;
        let clamp_y = |v: i64| v.clamp(0, im.h as i64) as usize;
        let l = clamp_x(self.x as i64);
        let r = clamp_x(self.x as i64 + self.width as i64);
        let t = clamp_y(im.h as i64 - (self.y as i64 + self.height as i64));
        let b = clamp_y(im.h as i64 - self.y as i64);
        (l, t, r, b)
    }
}

pub fn clear(im: &mut RGBAIm, rgba: [u8; 4]) {
    im.fill(rgba);
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// The demo's fragment stage: `gl_Position * 0.5 + 0.5` with `z = 0, w = 1`.
///
/// Alpha is always opaque since the canvas has no alpha channel.
#[inline]
pub fn clip_space_color(cx: f32, cy: f32) -> [u8; 4] {
    [
        unit_to_u8(cx * 0.5 + 0.5),
        unit_to_u8(cy * 0.5 + 0.5),
        unit_to_u8(0.5),
        255,
    ]
}

// - callback: Takes the x-span (x_end is not inclusive) and row y.
//   A pixel is covered when its center lies inside the triangle.
fn fill_triangle<F: FnMut(usize, usize, usize)>(
    tri: &[(f32, f32); 3],
    l: usize,
    t: usize,
    r: usize,
    b: usize,
    callback: &mut F,
) {
    let ys = tri.iter().map(|p| p.1);
    let y_lo = ys.clone().fold(f32::INFINITY, f32::min);
    let y_hi = ys.fold(f32::NEG_INFINITY, f32::max);
    if !(y_hi > y_lo) {
        return;
    }

    // Rows whose centers can hit the triangle.
    let row_start = ((y_lo - 0.5).ceil().max(t as f32)) as usize;
    let row_end = ((y_hi - 0.5).ceil().min(b as f32)).max(0.0) as usize;

    let mut xs: Vec<f32> = Vec::with_capacity(3);
    for y in row_start..row_end {
        let yc = y as f32 + 0.5;
        xs.clear();

        let (mut x0, mut y0) = tri[2];
        for &(x1, y1) in tri {
            if y0 != y1 {
                // Half-open range to avoid double-counting shared vertices.
                let (lo, hi) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
                if yc >= lo && yc < hi {
                    xs.push(x0 + (yc - y0) * (x1 - x0) / (y1 - y0));
                }
            }
            x0 = x1;
            y0 = y1;
        }

        if xs.len() < 2 {
            continue;
        }
        xs.sort_unstable_by(f32::total_cmp);

        for pair in xs.chunks_exact(2) {
            let x_start = (pair[0] - 0.5).ceil().max(l as f32);
            let x_end = (pair[1] - 0.5).ceil().min(r as f32);
            if x_start < x_end {
                callback(x_start as usize, x_end as usize, y);
            }
        }
    }
}

/// Draws `positions` (flat `[x0, y0, x1, y1, ...]`, three vertices per
/// triangle) through `matrix` and returns the number of pixels written.
///
/// Trailing vertices that don't form a full triangle are ignored, as are
/// triangles with non-finite clip coordinates.
pub fn draw_triangles(im: &mut RGBAIm, viewport: &Viewport, positions: &[f32], matrix: &Mat3) -> usize {
    if viewport.width <= 0 || viewport.height <= 0 {
        return 0;
    }
    let (l, t, r, b) = viewport.image_bounds(im);
    let im_h = im.h;
    let mut n_written = 0_usize;

    for (tri_i, verts) in positions.chunks_exact(6).enumerate() {
        let mut tri = [(0.0_f32, 0.0_f32); 3];
        for (i, p) in verts.chunks_exact(2).enumerate() {
            let (cx, cy) = matrix.transform_point2(p[0], p[1]);
            tri[i] = viewport.clip_to_image(im_h, cx, cy);
        }
        if tri.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            log::debug!("skipping triangle {tri_i}: non-finite vertex {tri:?}");
            continue;
        }
        log::trace!("triangle {tri_i} in image space: {tri:?}");

        fill_triangle(&tri, l, t, r, b, &mut |x_start, x_end, y| {
            let (_, cy) = viewport.image_to_clip(im_h, 0.0, y as f32 + 0.5);
            for x in x_start..x_end {
                let (cx, _) = viewport.image_to_clip(im_h, x as f32 + 0.5, 0.0);
                let base = y * im.s + x * 4;
                im.arr[base..base + 4].copy_from_slice(&clip_space_color(cx, cy));
            }
            n_written += x_end - x_start;
        });
    }

    n_written
}
