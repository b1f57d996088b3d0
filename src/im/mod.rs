pub mod core;
pub use core::{Im, RgbIm, RgbaIm};

pub mod roi;
pub use roi::ROI;

// Optional extras
// -----------------------------------------------------------------------------

#[cfg(feature = "im-io")]
pub mod io;
