//! Elementwise activation clamp
//!
//! clamp(x, min, max) = min(max(x, min), max)
//!
//! The same max-then-min sequence is fused into the depthwise convolution
//! kernel's accumulator drain; this standalone form covers the elementwise
//! activation operator. Bounds are not validated: min > max produces the
//! degenerate clamp those comparisons imply, not an error.

use crate::dtype::Element;

/// Clamp every element into `[min_val, max_val]`
///
/// # Safety
/// - `a` and `out` must point to `len` elements
/// - `out` must not overlap with `a`
#[inline]
pub unsafe fn clamp_kernel<T: Element>(a: *const T, out: *mut T, len: usize, min_val: T, max_val: T) {
    let a_slice = std::slice::from_raw_parts(a, len);
    let out_slice = std::slice::from_raw_parts_mut(out, len);

    for i in 0..len {
        out_slice[i] = clamp_value(a_slice[i], min_val, max_val);
    }
}

/// Clamp a single value: min(max(v, lo), hi)
#[inline(always)]
pub fn clamp_value<T: Element>(v: T, lo: T, hi: T) -> T {
    let v = if v < lo { lo } else { v };
    if v > hi {
        hi
    } else {
        v
    }
}
