//! Raw (P6-style) PPM decoding.
//!
//! This is deliberately not a general PPM parser. The header is read only far
//! enough to get `format width height max_v`; the pixel body is then taken as
//! the *last* `3 * width * height` bytes of the payload, whatever sits between
//! the header and the body. That keeps decoding tolerant of odd header
//! whitespace and comments. `max_v` is reported but not used to rescale.
//!
//! The decoded image is always square: the longer axis is trimmed
//! symmetrically (see [`ROI::centered_square`]).

use crate::error::{Error, Result};
use crate::im::{RgbIm, ROI};
use log::{debug, warn};
use std::path::Path;

const HEADER_TOKENS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmHeader {
    /// Magic token, normally `P6`.
    pub format: String,
    pub width: usize,
    pub height: usize,
    pub max_v: u32,
}

impl PpmHeader {
    /// Byte length of the RGB body this header declares.
    pub fn body_len(&self) -> Result<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| {
                Error::malformed(format!(
                    "image size {}x{} overflows",
                    self.width, self.height
                ))
            })
    }
}

fn is_header_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Byte ranges of the first `n` header tokens. Tokens are separated by
/// whitespace; `#` starts a comment that runs to the end of the line.
fn header_tokens(bytes: &[u8], n: usize) -> Vec<(usize, usize)> {
    let mut tokens = Vec::with_capacity(n);
    let mut i = 0;
    while i < bytes.len() && tokens.len() < n {
        let b = bytes[i];
        if b == b'#' {
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
        } else if is_header_space(b) {
            i += 1;
        } else {
            let start = i;
            while i < bytes.len() && bytes[i] != b'#' && !is_header_space(bytes[i]) {
                i += 1;
            }
            tokens.push((start, i));
        }
    }
    tokens
}

fn parse_number<T: std::str::FromStr>(token: &[u8], what: &str) -> Result<T> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            Error::malformed(format!(
                "{what} is not a number: {:?}",
                String::from_utf8_lossy(token)
            ))
        })
}

/// Parses the four header tokens. Returns the header and the byte offset just
/// past the last token and the single whitespace byte that ends it.
pub fn parse_header(bytes: &[u8]) -> Result<(PpmHeader, usize)> {
    let tokens = header_tokens(bytes, HEADER_TOKENS);
    let &[format, width, height, max_v] = tokens.as_slice() else {
        return Err(Error::malformed(format!(
            "expected {HEADER_TOKENS} header tokens (format, width, height, max value), found {}",
            tokens.len()
        )));
    };

    let token = |(start, end): (usize, usize)| &bytes[start..end];
    let header = PpmHeader {
        format: String::from_utf8_lossy(token(format)).into_owned(),
        width: parse_number(token(width), "width")?,
        height: parse_number(token(height), "height")?,
        max_v: parse_number(token(max_v), "max value")?,
    };
    let mut end = max_v.1;
    if bytes.get(end).copied().is_some_and(is_header_space) {
        end += 1;
    }
    Ok((header, end))
}

/// Decodes a PPM payload into a square-cropped RGB image.
///
/// Fails with `MalformedInput` when the header is incomplete or not numeric,
/// when the image has zero area, or when fewer than `3 * width * height`
/// bytes follow the header. Nothing is returned on failure.
pub fn decode_ppm(bytes: &[u8]) -> Result<RgbIm> {
    let (header, header_end) = parse_header(bytes)?;
    debug!(
        "ppm header: format={} width={} height={} max_v={}",
        header.format, header.width, header.height, header.max_v
    );
    if header.format != "P6" {
        warn!("ppm format {:?} is not P6; decoding body as raw RGB anyway", header.format);
    }

    if header.width == 0 || header.height == 0 {
        return Err(Error::malformed(format!(
            "image has zero area: {}x{}",
            header.width, header.height
        )));
    }

    let body_len = header.body_len()?;
    let available = bytes.len() - header_end;
    if body_len > available {
        return Err(Error::malformed(format!(
            "header declares {}x{} ({body_len} bytes) but only {available} bytes follow it",
            header.width, header.height
        )));
    }

    // Anchored to the end of the payload.
    let body = &bytes[bytes.len() - body_len..];

    let roi = ROI::centered_square(header.width, header.height);
    debug!(
        "square crop {}x{} -> {}x{} at ({}, {})",
        header.width,
        header.height,
        roi.w(),
        roi.h(),
        roi.l,
        roi.t
    );

    let im = RgbIm::from_roi_of(body, header.width * 3, header.height, &roi)?;
    debug_assert_eq!(im.w, im.h);
    Ok(im)
}

pub fn decode_ppm_file<P: AsRef<Path>>(path: P) -> Result<RgbIm> {
    let bytes = std::fs::read(path)?;
    decode_ppm(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{init_logging, ppm_p6};

    fn counting_body(n: usize) -> Vec<u8> {
        (0..n).map(|i| i as u8).collect()
    }

    #[test]
    fn header_parses_four_tokens() {
        init_logging();
        let bytes = ppm_p6(4, 2, &counting_body(24));
        let (header, end) = parse_header(&bytes).unwrap();
        assert_eq!(
            header,
            PpmHeader {
                format: "P6".to_string(),
                width: 4,
                height: 2,
                max_v: 255
            }
        );
        assert_eq!(&bytes[..end], b"P6\n4 2\n255\n");
    }

    #[test]
    fn wide_image_crops_columns_symmetrically() {
        init_logging();
        // 4x2, crop=2: column 0 and column 3 are dropped from each row.
        let bytes = ppm_p6(4, 2, &counting_body(24));
        let im = decode_ppm(&bytes).unwrap();
        assert_eq!((im.w, im.h), (2, 2));
        assert_eq!(
            im.arr,
            vec![3, 4, 5, 6, 7, 8, 15, 16, 17, 18, 19, 20]
        );
    }

    #[test]
    fn tall_image_crops_rows_with_extra_at_bottom() {
        init_logging();
        // 1x4, crop=3: one row off the top, two off the bottom.
        let bytes = ppm_p6(1, 4, &counting_body(12));
        let im = decode_ppm(&bytes).unwrap();
        assert_eq!((im.w, im.h), (1, 1));
        assert_eq!(im.arr, vec![3, 4, 5]);
    }

    #[test]
    fn square_image_passes_through() {
        let body = counting_body(27);
        let im = decode_ppm(&ppm_p6(3, 3, &body)).unwrap();
        assert_eq!((im.w, im.h, im.s), (3, 3, 9));
        assert_eq!(im.arr, body);
    }

    #[test]
    fn comments_and_irregular_whitespace_are_skipped() {
        let mut bytes = b"P6 # made by hand\n\t2#inline\n  2\r\n#another\n255\n\n\n".to_vec();
        bytes.extend_from_slice(&counting_body(12));
        let im = decode_ppm(&bytes).unwrap();
        assert_eq!((im.w, im.h), (2, 2));
        assert_eq!(im.arr, counting_body(12));
    }

    #[test]
    fn body_is_anchored_to_end_of_payload() {
        // Junk between header and body is ignored.
        let mut bytes = b"P6 1 1 255\nJUNKJUNK".to_vec();
        bytes.extend_from_slice(&[10, 20, 30]);
        let im = decode_ppm(&bytes).unwrap();
        assert_eq!(im.arr, vec![10, 20, 30]);
    }

    #[test]
    fn body_bytes_may_look_like_whitespace_or_comments() {
        let body = [b' ', b'#', b'\n', b'\t', b'5', b'#'];
        let im = decode_ppm(&ppm_p6(2, 1, &body)).unwrap();
        assert_eq!((im.w, im.h), (1, 1));
        assert_eq!(im.arr, vec![b' ', b'#', b'\n']);
    }

    #[test]
    fn truncated_header_is_malformed() {
        init_logging();
        let mut bytes = b"P6 4".to_vec();
        assert!(matches!(decode_ppm(&bytes), Err(Error::MalformedInput(_))));

        bytes.clear();
        assert!(matches!(decode_ppm(&bytes), Err(Error::MalformedInput(_))));

        let bytes = b"P6\n# only a comment 4 2 255\n4 2";
        assert!(matches!(decode_ppm(bytes), Err(Error::MalformedInput(_))));

        // Header cut short right before the pixel data.
        let mut bytes = b"P6 4\n".to_vec();
        bytes.extend_from_slice(&[200, 100, 50, 7, 8, 9, 10, 20, 30, 40, 50, 60]);
        assert!(matches!(decode_ppm(&bytes), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn short_body_is_malformed() {
        let bytes = ppm_p6(4, 2, &counting_body(23));
        assert!(matches!(decode_ppm(&bytes), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn non_numeric_dimensions_are_malformed() {
        let bytes = b"P6 four 2 255\n".to_vec();
        assert!(matches!(decode_ppm(&bytes), Err(Error::MalformedInput(_))));

        let bytes = b"P6 2 2 -1\n".to_vec();
        assert!(matches!(decode_ppm(&bytes), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn zero_area_is_malformed() {
        let bytes = ppm_p6(0, 3, &[]);
        assert!(matches!(decode_ppm(&bytes), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn oversized_dimensions_are_malformed() {
        let bytes = format!("P6 {} {} 255\n", usize::MAX, 2).into_bytes();
        assert!(matches!(decode_ppm(&bytes), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn other_magic_is_decoded_as_raw_rgb() {
        init_logging();
        let mut bytes = b"P3 1 1 255\n".to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        let im = decode_ppm(&bytes).unwrap();
        assert_eq!(im.arr, vec![1, 2, 3]);
    }

    #[test]
    fn decode_ppm_file_reports_missing_file() {
        let path = std::env::temp_dir().join("ppmspin-does-not-exist.ppm");
        assert!(matches!(decode_ppm_file(&path), Err(Error::Io(_))));
    }
}
