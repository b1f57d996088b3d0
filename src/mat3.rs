use crate::mat2::Mat2;
use crate::vec::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    // Row-major 3x3 matrix.
    m: [[f64; 3]; 3],
}

impl Mat3 {
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Constructs a homogeneous 3x3 matrix from a 2D affine transform.
    ///
    /// The expected 6-element layout is `[a, b, c, d, e, f]` such that:
    ///
    /// - `x' = a*x + c*y + e`
    /// - `y' = b*x + d*y + f`
    pub fn from_affine2(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            m: [[a, c, e], [b, d, f], [0.0, 0.0, 1.0]],
        }
    }

    /// Embeds a linear 2x2 map with no translation.
    pub fn from_mat2(mat: &Mat2) -> Self {
        let (a, b, c, d) = mat.to_affine2();
        Self::from_affine2(a, b, c, d, 0.0, 0.0)
    }

    /// Applies this transform to a 2D point (implicitly using homogeneous `w=1`).
    #[inline]
    pub fn transform_point2(&self, x: f64, y: f64) -> (f64, f64) {
        let x2 = self.m[0][0] * x + self.m[0][1] * y + self.m[0][2];
        let y2 = self.m[1][0] * x + self.m[1][1] * y + self.m[1][2];
        (x2, y2)
    }

    #[inline]
    pub fn transform_vec2(&self, v: &Vec2) -> Vec2 {
        let (x, y) = self.transform_point2(v.x, v.y);
        Vec2::new(x, y)
    }

    /// Returns a transform that applies this matrix, then translates by `(tx, ty)`.
    ///
    /// This is equivalent to left-multiplying by a translation matrix `T(tx, ty)`.
    #[inline]
    pub fn then_translate(self, tx: f64, ty: f64) -> Self {
        let mut out = self;
        out.m[0][2] += tx;
        out.m[1][2] += ty;
        out
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}
