use crate::vec::Vec2;
use std::ops::Mul;

/// Most decimal places `truncated` will keep; larger requests are capped.
pub const MAX_DISPLAY_DECIMALS: u32 = 15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2 {
    // Row-major 2x2 matrix.
    m: [[f64; 2]; 2],
}

impl Mat2 {
    /// `[[a, b], [c, d]]`.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { m: [[a, b], [c, d]] }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// `self * other`.
    pub fn m_mult(&self, other: &Mat2) -> Mat2 {
        let mut out = [[0.0; 2]; 2];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = self.m[i][0] * other.m[0][j] + self.m[i][1] * other.m[1][j];
            }
        }
        Mat2 { m: out }
    }

    /// `self * v`.
    pub fn v_mult(&self, v: &Vec2) -> Vec2 {
        Vec2::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y,
            self.m[1][0] * v.x + self.m[1][1] * v.y,
        )
    }

    pub fn s_mult(&self, scalar: f64) -> Mat2 {
        Mat2 {
            m: self.m.map(|row| row.map(|v| v * scalar)),
        }
    }

    /// Copy of the rows.
    pub fn to_array(&self) -> [[f64; 2]; 2] {
        self.m
    }

    /// Entries in the `(a, b, c, d)` order of a 2D affine transform,
    /// where `x' = a*x + c*y` and `y' = b*x + d*y`.
    pub fn to_affine2(&self) -> (f64, f64, f64, f64) {
        (self.m[0][0], self.m[1][0], self.m[0][1], self.m[1][1])
    }

    /// Floors every entry to `decimals` places, e.g. `-0.707 -> -0.71` for 2.
    pub fn truncated(&self, decimals: u32) -> Mat2 {
        let k = 10f64.powi(decimals.min(MAX_DISPLAY_DECIMALS) as i32);
        Mat2 {
            m: self.m.map(|row| row.map(|v| (v * k).floor() / k)),
        }
    }

    /// Display text for the two rows, truncated to `decimals` places.
    pub fn display_rows(&self, decimals: u32) -> [String; 2] {
        let t = self.truncated(decimals);
        [1, 2].map(|n| {
            let [a, b] = t.m[n - 1];
            format!("row {n}:[ {a},\t{b} ]")
        })
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Mat2 {
        self.m_mult(&rhs)
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.v_mult(&rhs)
    }
}
