//! 2D/3D vector value types.
//!
//! Every operation comes in the pure form that returns a new vector. The two
//! exceptions are `scale` and `neg`, which mutate the receiver; their pure
//! counterparts are `scaled` and `inverse`.

use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// `unit_norm` accepts `|norm_sq - 1|` below this.
pub const UNIT_NORM_TOLERANCE: f64 = 0.0001;

/// A color type that can be built from three numeric channels.
pub trait FromRgb {
    fn from_rgb(rgb: [f64; 3]) -> Self;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Operations shared by `Vec2` and `Vec3`, used by the free functions below.
pub trait Vector: Copy {
    fn plus(&self, other: &Self) -> Self;
    fn minus(&self, other: &Self) -> Self;
    fn norm_sq(&self) -> f64;
    fn dist(&self, other: &Self) -> f64;
    fn equals(&self, other: &Self) -> bool;
}

macro_rules! impl_vec {
    ($name:ident, $n:literal, $($c:ident),+) => {
        impl $name {
            pub const fn new($($c: f64),+) -> Self {
                Self { $($c),+ }
            }

            pub const fn zero() -> Self {
                Self { $($c: 0.0),+ }
            }

            /// Builds a vector from exactly as many elements as it has components.
            pub fn from_array(arr: &[f64]) -> Result<Self> {
                let &[$($c),+] = arr else {
                    return Err(Error::invalid_input(format!(
                        concat!(stringify!($name), "::from_array expects {} elements, got {}"),
                        $n,
                        arr.len()
                    )));
                };
                Ok(Self { $($c),+ })
            }

            pub fn to_array(&self) -> [f64; $n] {
                [$(self.$c),+]
            }

            /// Clamps each component independently into `[lower, upper]`.
            pub fn clamp(&self, lower: f64, upper: f64) -> Result<Self> {
                // Also rejects NaN bounds.
                if !(lower <= upper) {
                    return Err(Error::invalid_input(format!(
                        "clamp bounds out of order: lower={lower} upper={upper}"
                    )));
                }
                Ok(Self { $($c: self.$c.clamp(lower, upper)),+ })
            }

            /// Multiplies every component by `scalar` in place.
            pub fn scale(&mut self, scalar: f64) {
                $(self.$c *= scalar;)+
            }

            pub fn scaled(&self, scalar: f64) -> Self {
                Self { $($c: scalar * self.$c),+ }
            }

            pub fn plus(&self, other: &Self) -> Self {
                Self { $($c: self.$c + other.$c),+ }
            }

            pub fn minus(&self, other: &Self) -> Self {
                Self { $($c: self.$c - other.$c),+ }
            }

            /// Negates every component in place.
            pub fn neg(&mut self) {
                $(self.$c = -self.$c;)+
            }

            pub fn inverse(&self) -> Self {
                Self { $($c: -self.$c),+ }
            }

            pub fn dot(&self, other: &Self) -> f64 {
                0.0 $(+ self.$c * other.$c)+
            }

            pub fn norm_sq(&self) -> f64 {
                self.dot(self)
            }

            pub fn norm(&self) -> f64 {
                self.norm_sq().sqrt()
            }

            /// Unit-length copy of this vector. Fails on a zero-length vector.
            pub fn normalized(&self) -> Result<Self> {
                let norm = self.norm();
                if !(norm > 0.0) {
                    return Err(Error::invalid_input(format!(
                        "cannot normalize {self}: norm is {norm}"
                    )));
                }
                Ok(Self { $($c: self.$c / norm),+ })
            }

            pub fn dist(&self, other: &Self) -> f64 {
                self.minus(other).norm()
            }

            /// Exact componentwise equality.
            pub fn equals(&self, other: &Self) -> bool {
                $(self.$c == other.$c)&&+
            }

            /// `"(x, y)"` / `"(x, y, z)"`.
            pub fn str(&self) -> String {
                self.to_string()
            }
        }

        impl Vector for $name {
            fn plus(&self, other: &Self) -> Self {
                $name::plus(self, other)
            }

            fn minus(&self, other: &Self) -> Self {
                $name::minus(self, other)
            }

            fn norm_sq(&self) -> f64 {
                $name::norm_sq(self)
            }

            fn dist(&self, other: &Self) -> f64 {
                $name::dist(self, other)
            }

            fn equals(&self, other: &Self) -> bool {
                $name::equals(self, other)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(")?;
                for (i, v) in self.to_array().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    // Adding 0.0 prints -0 as 0.
                    write!(f, "{}", v + 0.0)?;
                }
                f.write_str(")")
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.plus(&rhs)
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self.minus(&rhs)
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                self.scaled(rhs)
            }
        }
    };
}

impl_vec!(Vec2, 2, x, y);
impl_vec!(Vec3, 3, x, y, z);

impl Vec3 {
    /// Right-handed cross product.
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Treats `(x, y, z)` as `(r, g, b)` channels.
    pub fn to_rgba<C: FromRgb>(&self) -> C {
        C::from_rgb(self.to_array())
    }
}

// Free functions
// -----------------------------------------------------------------------------

pub fn add<V: Vector>(v1: &V, v2: &V) -> V {
    v1.plus(v2)
}

pub fn subtract<V: Vector>(v1: &V, v2: &V) -> V {
    v1.minus(v2)
}

pub fn distance<V: Vector>(v1: &V, v2: &V) -> f64 {
    v1.dist(v2)
}

pub fn equal<V: Vector>(v1: &V, v2: &V) -> bool {
    v1.equals(v2)
}

/// True when `v` is unit length within `UNIT_NORM_TOLERANCE`.
pub fn unit_norm<V: Vector>(v: &V) -> bool {
    (v.norm_sq() - 1.0).abs() < UNIT_NORM_TOLERANCE
}
