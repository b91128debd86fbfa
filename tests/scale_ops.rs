//! Integration tests for the spatial resize kernel.

mod common;

use common::pseudo_random_f32;
use primr::kernels::scale::scale_kernel;
use primr::ops::InterpolationPolicy;

#[test]
fn test_round_trip_upscale_downscale_nearest() {
    // 2x upscale then 2x downscale with nearest sampling recovers the
    // original plane exactly
    let (h, w, ch) = (3, 5, 2);
    let src = pseudo_random_f32(h * w * ch, 8);
    let mut up = vec![0.0f32; 4 * h * w * ch];
    let mut back = vec![0.0f32; h * w * ch];

    unsafe {
        scale_kernel(
            InterpolationPolicy::Nearest,
            src.as_ptr(),
            h,
            w,
            up.as_mut_ptr(),
            2 * h,
            2 * w,
            ch,
        );
        scale_kernel(
            InterpolationPolicy::Nearest,
            up.as_ptr(),
            2 * h,
            2 * w,
            back.as_mut_ptr(),
            h,
            w,
            ch,
        );
    }

    assert_eq!(back, src);
}

#[test]
fn test_bilinear_output_within_source_range() {
    // Bilinear is a convex blend: no output may leave the source min/max
    let (h, w) = (4, 6);
    let src = pseudo_random_f32(h * w, 50);
    let lo = src.iter().cloned().fold(f32::INFINITY, f32::min);
    let hi = src.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

    let mut dst = vec![0.0f32; 9 * 13];
    unsafe {
        scale_kernel(
            InterpolationPolicy::Bilinear,
            src.as_ptr(),
            h,
            w,
            dst.as_mut_ptr(),
            9,
            13,
            1,
        );
    }

    assert!(dst.iter().all(|&v| v >= lo && v <= hi));
}

#[test]
fn test_nearest_u8_plane() {
    let src: Vec<u8> = vec![10, 20, 30, 40]; // 2x2
    let mut dst = vec![0u8; 16];

    unsafe {
        scale_kernel(
            InterpolationPolicy::Nearest,
            src.as_ptr(),
            2,
            2,
            dst.as_mut_ptr(),
            4,
            4,
            1,
        );
    }

    assert_eq!(&dst[0..4], &[10, 10, 20, 20]);
    assert_eq!(&dst[12..16], &[30, 30, 40, 40]);
}

#[test]
fn test_downscale_to_single_pixel() {
    // 1x1 output samples the center of the plane
    let src: Vec<f32> = (0..9).map(|x| x as f32).collect(); // 3x3
    let mut dst = [0.0f32; 1];

    unsafe {
        scale_kernel(
            InterpolationPolicy::Nearest,
            src.as_ptr(),
            3,
            3,
            dst.as_mut_ptr(),
            1,
            1,
            1,
        );
    }

    assert_eq!(dst[0], 4.0);
}
