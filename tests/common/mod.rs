//! Common test utilities
#![allow(dead_code)]

use primr::kernels::conv::{TAPS, TILE_COLS, TILE_ROWS};

/// Assert two f32 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Input buffer length for a dense NHWC plane covering a whole tile grid
pub fn conv_input_len(tile_rows: usize, tile_cols: usize, channels: usize) -> usize {
    (TILE_ROWS * tile_rows + 2) * (TILE_COLS * tile_cols + 2) * channels
}

/// Output buffer length for a dense NHWC plane covering a whole tile grid
pub fn conv_output_len(tile_rows: usize, tile_cols: usize, channels: usize) -> usize {
    (TILE_ROWS * tile_rows) * (TILE_COLS * tile_cols) * channels
}

/// NHWC strides (row, col) in elements for dense conv input/output planes
pub fn conv_strides(tile_cols: usize, channels: usize) -> (usize, usize, usize, usize) {
    let ld_in_row = (TILE_COLS * tile_cols + 2) * channels;
    let ld_out_row = (TILE_COLS * tile_cols) * channels;
    (ld_in_row, channels, ld_out_row, channels)
}

/// Deterministic pseudo-random f32 buffer, reproducible across runs
pub fn pseudo_random_f32(len: usize, seed: u64) -> Vec<f32> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as f32 / (1u64 << 31) as f32) * 4.0 - 2.0
        })
        .collect()
}

/// Deterministic per-channel bias and 3x3 taps for conv tests
pub fn conv_weights_f32(channels: usize, seed: u64) -> (Vec<f32>, Vec<f32>) {
    let bias = pseudo_random_f32(channels, seed);
    let taps = pseudo_random_f32(channels * TAPS, seed.wrapping_add(17));
    (bias, taps)
}
