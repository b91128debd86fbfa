//! Unary elementwise kernels
//!
//! Transcendental operations go through f64 so that a single generic kernel
//! covers every dtype; the dispatch layer routes float-only ops away from
//! integer buffers before the call.

use crate::dtype::Element;
use crate::ops::UnaryOp;

/// Execute a unary operation element-wise
///
/// # Safety
/// - `a` and `out` must be valid pointers to `len` elements
/// - `out` must not overlap with `a`
#[inline]
pub unsafe fn unary_op_kernel<T: Element>(op: UnaryOp, a: *const T, out: *mut T, len: usize) {
    let a_slice = std::slice::from_raw_parts(a, len);
    let out_slice = std::slice::from_raw_parts_mut(out, len);

    match op {
        UnaryOp::Neg => {
            for i in 0..len {
                out_slice[i] = T::from_f64(-a_slice[i].to_f64());
            }
        }
        UnaryOp::Abs => {
            for i in 0..len {
                out_slice[i] = T::from_f64(a_slice[i].to_f64().abs());
            }
        }
        UnaryOp::Sqrt => {
            for i in 0..len {
                out_slice[i] = T::from_f64(a_slice[i].to_f64().sqrt());
            }
        }
        UnaryOp::Square => {
            for i in 0..len {
                out_slice[i] = a_slice[i] * a_slice[i];
            }
        }
        UnaryOp::Exp => {
            for i in 0..len {
                out_slice[i] = T::from_f64(a_slice[i].to_f64().exp());
            }
        }
        UnaryOp::Log => {
            for i in 0..len {
                out_slice[i] = T::from_f64(a_slice[i].to_f64().ln());
            }
        }
        UnaryOp::Relu => {
            let zero = T::zero();
            for i in 0..len {
                out_slice[i] = if a_slice[i] > zero { a_slice[i] } else { zero };
            }
        }
    }
}
