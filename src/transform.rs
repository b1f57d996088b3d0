//! Rotation transform for spinning a square image in place.

use crate::mat2::Mat2;
use crate::mat3::Mat3;
use crate::vec::Vec2;

/// Uniform scale that keeps a unit square rotated by `theta_deg` inside its
/// original bounds: `1 / (|cos| + |sin|)`.
pub fn fit_scale(theta_deg: f64) -> f64 {
    let (sin_t, cos_t) = theta_deg.to_radians().sin_cos();
    1.0 / (cos_t.abs() + sin_t.abs())
}

/// Scaled rotation by `theta_deg` degrees: `(I * s) * R(theta)`.
pub fn transform_matrix(theta_deg: f64) -> Mat2 {
    let (sin_t, cos_t) = theta_deg.to_radians().sin_cos();

    let s_mat = Mat2::identity().s_mult(1.0 / (cos_t.abs() + sin_t.abs()));
    let r_mat = Mat2::new(cos_t, -sin_t, sin_t, cos_t);

    s_mat.m_mult(&r_mat)
}

/// Corners of a `w` x `h` image centered on `center` after applying `matrix`,
/// ordered top-left, top-right, bottom-right, bottom-left (y grows downward).
pub fn quad_corners(w: f64, h: f64, center: Vec2, matrix: &Mat2) -> [Vec2; 4] {
    let xform = Mat3::from_mat2(matrix).then_translate(center.x, center.y);
    let (hw, hh) = (w / 2.0, h / 2.0);
    [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
    .map(|corner| xform.transform_vec2(&corner))
}

/// Animation state: an angle that advances by a fixed step on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    angle: f64,
    step: f64,
}

impl Spin {
    pub fn new(step_degrees: f64) -> Self {
        Self {
            angle: 0.0,
            step: step_degrees,
        }
    }

    /// Current angle in degrees, always in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn matrix(&self) -> Mat2 {
        transform_matrix(self.angle)
    }

    /// Advances the angle by one step and returns the new transform.
    pub fn tick(&mut self) -> Mat2 {
        let angle = (self.angle + self.step).rem_euclid(360.0);
        // rem_euclid rounds tiny negative sums up to exactly 360.
        self.angle = if angle >= 360.0 { 0.0 } else { angle };
        self.matrix()
    }
}
