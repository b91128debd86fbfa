//! Spatial resize (scale) kernels
//!
//! Resamples a dense NHWC plane to a new spatial size with center-aligned
//! sampling: destination pixel `o` maps to source coordinate
//! `(o + 0.5) * src / dst - 0.5`. Nearest neighbor rounds that coordinate;
//! bilinear blends the four surrounding pixels with edge clamping, so no
//! border fill value is needed. Interpolation arithmetic goes through f64,
//! as the other generic kernels do.

use crate::dtype::Element;
use crate::ops::InterpolationPolicy;

/// Resize an NHWC plane to `dst_h x dst_w`
///
/// Each channel is resampled independently. Upscale and downscale both use
/// point sampling at the mapped coordinate; there is no area averaging.
/// Zero destination dimensions make the call a no-op.
///
/// # Safety
/// - `src` must point to `src_h * src_w * n_channels` elements with
///   `src_h > 0` and `src_w > 0`
/// - `dst` must point to `dst_h * dst_w * n_channels` elements
/// - `src` and `dst` must not overlap
#[inline]
pub unsafe fn scale_kernel<T: Element>(
    policy: InterpolationPolicy,
    src: *const T,
    src_h: usize,
    src_w: usize,
    dst: *mut T,
    dst_h: usize,
    dst_w: usize,
    n_channels: usize,
) {
    if dst_h == 0 || dst_w == 0 {
        return;
    }

    let scale_y = src_h as f64 / dst_h as f64;
    let scale_x = src_w as f64 / dst_w as f64;

    match policy {
        InterpolationPolicy::Nearest => {
            for oy in 0..dst_h {
                let iy = nearest_index(oy, scale_y, src_h);
                for ox in 0..dst_w {
                    let ix = nearest_index(ox, scale_x, src_w);
                    let s = src.add((iy * src_w + ix) * n_channels);
                    let d = dst.add((oy * dst_w + ox) * n_channels);
                    for ch in 0..n_channels {
                        *d.add(ch) = *s.add(ch);
                    }
                }
            }
        }
        InterpolationPolicy::Bilinear => {
            for oy in 0..dst_h {
                let (y0, y1, dy) = bilinear_span(oy, scale_y, src_h);
                for ox in 0..dst_w {
                    let (x0, x1, dx) = bilinear_span(ox, scale_x, src_w);
                    let d = dst.add((oy * dst_w + ox) * n_channels);
                    for ch in 0..n_channels {
                        let p00 = (*src.add((y0 * src_w + x0) * n_channels + ch)).to_f64();
                        let p01 = (*src.add((y0 * src_w + x1) * n_channels + ch)).to_f64();
                        let p10 = (*src.add((y1 * src_w + x0) * n_channels + ch)).to_f64();
                        let p11 = (*src.add((y1 * src_w + x1) * n_channels + ch)).to_f64();

                        let top = p00 + (p01 - p00) * dx;
                        let bottom = p10 + (p11 - p10) * dx;
                        *d.add(ch) = T::from_f64(top + (bottom - top) * dy);
                    }
                }
            }
        }
    }
}

/// Source index for nearest-neighbor sampling, clamped to the plane
#[inline(always)]
fn nearest_index(o: usize, scale: f64, src_extent: usize) -> usize {
    let mapped = (o as f64 + 0.5) * scale;
    (mapped as usize).min(src_extent - 1)
}

/// The two source indices and blend fraction covering one output position
///
/// Coordinates past either edge clamp to the border pixel (dx or dy
/// collapses to 0 there), matching replicate-border behavior.
#[inline(always)]
fn bilinear_span(o: usize, scale: f64, src_extent: usize) -> (usize, usize, f64) {
    let mapped = (o as f64 + 0.5) * scale - 0.5;
    if mapped <= 0.0 {
        return (0, 0, 0.0);
    }
    let i0 = mapped as usize;
    if i0 >= src_extent - 1 {
        return (src_extent - 1, src_extent - 1, 0.0);
    }
    (i0, i0 + 1, mapped - i0 as f64)
}
