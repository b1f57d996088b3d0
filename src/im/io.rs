use super::core::Im;
use crate::error::Result;
use crate::vec::FromRgb;
use std::path::Path;

fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

// Interop with the `image` crate
// -----------------------------------------------------------------------------
impl Im<u8, 3> {
    pub fn to_rgb_image(&self) -> Result<image::RgbImage> {
        let img = image::RgbImage::from_raw(self.w as u32, self.h as u32, self.arr.clone())
            .ok_or_else(dim_mismatch_err)?;
        Ok(img)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_rgb_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

impl Im<u8, 4> {
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let img = image::RgbaImage::from_raw(self.w as u32, self.h as u32, self.arr.clone())
            .ok_or_else(dim_mismatch_err)?;

        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

impl FromRgb for image::Rgba<u8> {
    /// Channels are rounded and clamped to `0..=255`; alpha is opaque.
    fn from_rgb(rgb: [f64; 3]) -> Self {
        let [r, g, b] = rgb.map(|v| v.round().clamp(0.0, 255.0) as u8);
        image::Rgba([r, g, b, 255])
    }
}

// Tests
// -----------------------------------------------------------------------------
