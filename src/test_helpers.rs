use crate::mat2::Mat2;
use log::LevelFilter;

const TOL: f64 = 1e-9;

pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Raw PPM bytes: `P6\n{w} {h}\n255\n` followed by `body`.
pub fn ppm_p6(w: usize, h: usize, body: &[u8]) -> Vec<u8> {
    let mut out = format!("P6\n{w} {h}\n255\n").into_bytes();
    out.extend_from_slice(body);
    out
}

pub fn assert_close(a: f64, b: f64) {
    let tol = TOL * a.abs().max(b.abs()).max(1.0);
    assert!((a - b).abs() <= tol, "{a} != {b} (tol {tol})");
}

pub fn assert_mat2_close(a: &Mat2, b: &Mat2) {
    let (ra, rb) = (a.to_array(), b.to_array());
    for i in 0..2 {
        for j in 0..2 {
            let (x, y) = (ra[i][j], rb[i][j]);
            assert!((x - y).abs() <= TOL, "{a:?} != {b:?} at [{i}][{j}]");
        }
    }
}
