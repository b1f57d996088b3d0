// Library crate root.
//
// Vector/matrix math, the PPM decoder and the rotation transform are plain
// synchronous code. The viewer (feature `viewer`) and PNG export (feature
// `im-io`) sit on top of them.

pub mod error;
pub mod vec;
pub mod mat2;
pub mod mat3;
pub mod transform;
pub mod im;
pub mod ppm;
pub mod config;
pub mod viewer;

pub use error::{Error, Result};

#[cfg(test)]
pub mod test_helpers;
