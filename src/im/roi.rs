#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ROI {
    pub l: usize,
    pub t: usize,
    /// Exclusive right bound.
    pub r: usize,
    /// Exclusive bottom bound.
    pub b: usize,
}

impl ROI {
    /// Width of the ROI.
    pub fn w(&self) -> usize {
        self.r - self.l
    }

    /// Height of the ROI.
    pub fn h(&self) -> usize {
        self.b - self.t
    }

    /// Largest square inside a `w` x `h` image, trimmed symmetrically from
    /// the longer axis. When the excess is odd the extra row/col comes off
    /// the far end (right or bottom).
    pub fn centered_square(w: usize, h: usize) -> ROI {
        let size = w.min(h);
        let trim_near = (w.max(h) - size) / 2;
        if w > h {
            ROI { l: trim_near, t: 0, r: trim_near + size, b: size }
        } else {
            ROI { l: 0, t: trim_near, r: size, b: trim_near + size }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_square_trims_wide_images_by_columns() {
        let roi = ROI::centered_square(4, 2);
        assert_eq!(roi, ROI { l: 1, t: 0, r: 3, b: 2 });
        assert_eq!((roi.w(), roi.h()), (2, 2));
    }

    #[test]
    fn centered_square_puts_odd_excess_on_far_side() {
        // crop = 3: one row off the top, two off the bottom.
        let roi = ROI::centered_square(2, 5);
        assert_eq!(roi, ROI { l: 0, t: 1, r: 2, b: 3 });

        let roi = ROI::centered_square(6, 3);
        assert_eq!(roi, ROI { l: 1, t: 0, r: 4, b: 3 });
    }

    #[test]
    fn centered_square_of_square_is_whole_image() {
        assert_eq!(ROI::centered_square(3, 3), ROI { l: 0, t: 0, r: 3, b: 3 });
    }
}
