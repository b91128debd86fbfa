//! Dtype cast kernels
//!
//! Converts elements by going through f64 as an intermediate representation,
//! which works for every supported numeric type via the Element trait. The
//! buffers arrive as untyped byte pointers because the dtype pair is only
//! known at runtime; this is the one kernel family where that is true.

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

/// Cast buffer data from one dtype to another.
///
/// # Safety
/// - `src` must be a valid pointer to `len` elements of `src_dtype`
/// - `dst` must be a valid pointer to `len` elements of `dst_dtype`
/// - `src` and `dst` must not overlap
#[inline]
pub unsafe fn cast_kernel(
    src: *const u8,
    dst: *mut u8,
    len: usize,
    src_dtype: DType,
    dst_dtype: DType,
) -> Result<()> {
    // Casts from a known source type into every destination type
    macro_rules! cast_from {
        ($src_ty:ty) => {{
            let src_slice = std::slice::from_raw_parts(src as *const $src_ty, len);
            match dst_dtype {
                DType::F64 => cast_into!(src_slice, f64),
                DType::F32 => cast_into!(src_slice, f32),
                DType::I64 => cast_into!(src_slice, i64),
                DType::I32 => cast_into!(src_slice, i32),
                DType::I16 => cast_into!(src_slice, i16),
                DType::I8 => cast_into!(src_slice, i8),
                DType::U32 => cast_into!(src_slice, u32),
                DType::U8 => cast_into!(src_slice, u8),
                #[cfg(feature = "f16")]
                DType::F16 => cast_into!(src_slice, half::f16),
                #[cfg(feature = "f16")]
                DType::BF16 => cast_into!(src_slice, half::bf16),
                #[cfg(not(feature = "f16"))]
                DType::F16 | DType::BF16 => {
                    return Err(Error::unsupported_dtype(dst_dtype, "cast"));
                }
            }
        }};
    }

    macro_rules! cast_into {
        ($src_slice:expr, $dst_ty:ty) => {{
            let dst_slice = std::slice::from_raw_parts_mut(dst as *mut $dst_ty, len);
            for i in 0..len {
                dst_slice[i] = <$dst_ty as Element>::from_f64($src_slice[i].to_f64());
            }
        }};
    }

    match src_dtype {
        DType::F64 => cast_from!(f64),
        DType::F32 => cast_from!(f32),
        DType::I64 => cast_from!(i64),
        DType::I32 => cast_from!(i32),
        DType::I16 => cast_from!(i16),
        DType::I8 => cast_from!(i8),
        DType::U32 => cast_from!(u32),
        DType::U8 => cast_from!(u8),
        #[cfg(feature = "f16")]
        DType::F16 => cast_from!(half::f16),
        #[cfg(feature = "f16")]
        DType::BF16 => cast_from!(half::bf16),
        #[cfg(not(feature = "f16"))]
        DType::F16 | DType::BF16 => {
            return Err(Error::unsupported_dtype(src_dtype, "cast"));
        }
    }

    Ok(())
}
