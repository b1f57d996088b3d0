use super::roi::ROI;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Im<T, const N_CH: usize> {
    pub w: usize,
    pub h: usize,
    pub s: usize, // stride in elements (w * N_CH)
    pub arr: Vec<T>,
}

// Constructors
// -----------------------------------------------------------------------------
impl<T: Copy + Default, const N_CH: usize> Im<T, N_CH> {
    pub fn new(w: usize, h: usize) -> Self {
        let s = w * N_CH;
        let arr = vec![T::default(); s * h];
        Self { w, h, s, arr }
    }
}

impl<T: Copy, const N_CH: usize> Im<T, N_CH> {
    /// Wraps a tightly packed, row-major buffer of `w * h * N_CH` elements.
    pub fn from_vec(w: usize, h: usize, arr: Vec<T>) -> Result<Self> {
        let s = w * N_CH;
        if arr.len() != s * h {
            return Err(Error::invalid_input(format!(
                "buffer has {} elements, expected {}x{}x{} = {}",
                arr.len(),
                w,
                h,
                N_CH,
                s * h
            )));
        }
        Ok(Self { w, h, s, arr })
    }

    /// Copies `roi` out of a row-major buffer with stride `src_s` and
    /// `src_h` rows, one row span at a time.
    pub fn from_roi_of(src: &[T], src_s: usize, src_h: usize, roi: &ROI) -> Result<Self> {
        let src_w = src_s / N_CH;
        if roi.l > roi.r || roi.t > roi.b || roi.r > src_w || roi.b > src_h {
            return Err(Error::invalid_input(format!(
                "{roi:?} does not fit in a {src_w}x{src_h} image"
            )));
        }
        if src.len() < src_s * src_h {
            return Err(Error::invalid_input(format!(
                "buffer has {} elements, expected at least {}",
                src.len(),
                src_s * src_h
            )));
        }

        let (w, h) = (roi.w(), roi.h());
        let mut arr = Vec::with_capacity(w * h * N_CH);
        for y in roi.t..roi.b {
            let row0 = y * src_s + roi.l * N_CH;
            arr.extend_from_slice(&src[row0..row0 + w * N_CH]);
        }
        Ok(Self {
            w,
            h,
            s: w * N_CH,
            arr,
        })
    }

    pub fn cropped(&self, roi: &ROI) -> Result<Self> {
        Self::from_roi_of(&self.arr, self.s, self.h, roi)
    }

    /// Channels of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.w || y >= self.h {
            return None;
        }
        let i = y * self.s + x * N_CH;
        self.arr.get(i..i + N_CH)
    }
}

impl<T, const N_CH: usize> Im<T, N_CH> {
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, x: usize, y: usize, ch: usize) -> &T {
        unsafe { self.arr.get_unchecked(y * self.s + x * N_CH + ch) }
    }

    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, x: usize, y: usize, ch: usize) -> &mut T {
        unsafe { self.arr.get_unchecked_mut(y * self.s + x * N_CH + ch) }
    }
}

pub type RgbIm = Im<u8, 3>;
pub type RgbaIm = Im<u8, 4>;

impl Im<u8, 3> {
    /// Expands to RGBA with every pixel fully opaque.
    pub fn to_rgba_im(&self) -> RgbaIm {
        let mut rgba_im = RgbaIm::new(self.w, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                for ch in 0..3 {
                    unsafe {
                        *rgba_im.get_unchecked_mut(x, y, ch) = *self.get_unchecked(x, y, ch);
                    }
                }
                unsafe {
                    *rgba_im.get_unchecked_mut(x, y, 3) = 255;
                }
            }
        }
        rgba_im
    }
}
