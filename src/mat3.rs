/// A 3x3 homogeneous 2D transform.
///
/// The nine floats are stored row-major: indices `0..3` are row 0, `3..6` row 1
/// and `6..9` row 2. Translation lives in the bottom row (`m[6]`, `m[7]`), which
/// is the layout the vertex shader expects when the array is uploaded with
/// `transpose = false`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    m: [f32; 9],
}

impl Mat3 {
    pub const fn identity() -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    pub const fn from_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    /// The raw elements, ready to hand to a `mat3` uniform.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 9] {
        &self.m
    }

    /// Composes two transforms so that the result applies `b` first, then `a`.
    ///
    /// Each output cell `(i, j)` is `sum_k b[i*3+k] * a[k*3+j]`.
    pub fn multiply(a: Mat3, b: Mat3) -> Mat3 {
        let a = &a.m;
        let b = &b.m;
        let mut out = [0.0_f32; 9];
        for i in 0..3 {
            for j in 0..3 {
                out[i * 3 + j] =
                    b[i * 3] * a[j] + b[i * 3 + 1] * a[3 + j] + b[i * 3 + 2] * a[6 + j];
            }
        }
        Mat3 { m: out }
    }

    /// Maps pixel coordinates to clip space, with y = 0 at the top of the canvas.
    ///
    /// Zero dimensions produce non-finite entries rather than an error.
    pub fn projection(width: i32, height: i32) -> Mat3 {
        Mat3 {
            m: [
                2.0 / width as f32,
                0.0,
                0.0,
                0.0,
                -2.0 / height as f32,
                0.0,
                -1.0,
                1.0,
                1.0,
            ],
        }
    }

    pub fn translation(tx: f32, ty: f32) -> Mat3 {
        Mat3 {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, tx, ty, 1.0],
        }
    }

    pub fn rotation(angle_in_radians: f32) -> Mat3 {
        let (s, c) = angle_in_radians.sin_cos();
        Mat3 {
            m: [c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn scaling(sx: f32, sy: f32) -> Mat3 {
        Mat3 {
            m: [sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// `multiply(self, translation(tx, ty))`: the translation runs before `self`.
    #[inline]
    pub fn translate(self, tx: f32, ty: f32) -> Mat3 {
        Mat3::multiply(self, Mat3::translation(tx, ty))
    }

    #[inline]
    pub fn rotate(self, angle_in_radians: f32) -> Mat3 {
        Mat3::multiply(self, Mat3::rotation(angle_in_radians))
    }

    #[inline]
    pub fn scale(self, sx: f32, sy: f32) -> Mat3 {
        Mat3::multiply(self, Mat3::scaling(sx, sy))
    }

    /// Applies this transform to a 2D point (implicitly using homogeneous `w=1`).
    ///
    /// Matches `u_matrix * vec3(p, 1)` in the vertex shader, which reads the
    /// uploaded floats column-major.
    #[inline]
    pub fn transform_point2(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.m;
        let x2 = m[0] * x + m[3] * y + m[6];
        let y2 = m[1] * x + m[4] * y + m[7];
        (x2, y2)
    }

    pub fn approx_eq(&self, other: &Mat3, eps: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}
