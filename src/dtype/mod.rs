//! Data type system for primr kernels
//!
//! Kernels are monomorphized over Rust element types through the [`Element`]
//! trait, while the dispatch layer above this crate works with the runtime
//! [`DType`] enum. `cast` is the one kernel family that crosses between the
//! two worlds, which is why `DType` carries stable discriminants.

mod element;

pub use element::Element;

use std::fmt;

/// Data types supported by primr kernels
///
/// # Discriminant Values (Serialization Stability)
///
/// The discriminant values are **stable** so a dispatch table built against
/// one build of this crate keeps meaning the same thing in the next:
/// - Floats: 0-9 (F64=0, F32=1, F16=2, BF16=3)
/// - Signed ints: 10-19 (I64=10, I32=11, I16=12, I8=13)
/// - Unsigned ints: 20-29 (U32=21, U8=23)
///
/// New types use reserved ranges. Existing values are never changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point (most common)
    F32 = 1,
    /// 16-bit floating point (IEEE 754, requires `f16` feature)
    F16 = 2,
    /// 16-bit brain floating point (requires `f16` feature)
    BF16 = 3,
    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// 16-bit signed integer
    I16 = 12,
    /// 8-bit signed integer
    I8 = 13,
    /// 32-bit unsigned integer
    U32 = 21,
    /// 8-bit unsigned integer
    U8 = 23,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 | Self::I64 => 8,
            Self::F32 | Self::I32 | Self::U32 => 4,
            Self::F16 | Self::BF16 | Self::I16 => 2,
            Self::I8 | Self::U8 => 1,
        }
    }

    /// Returns true for floating-point dtypes
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32 | Self::F16 | Self::BF16)
    }

    /// Returns true for integer dtypes (signed or unsigned)
    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(
            self,
            Self::I64 | Self::I32 | Self::I16 | Self::I8 | Self::U32 | Self::U8
        )
    }

    /// Returns the name of this dtype as a string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::U32 => "u32",
            Self::U8 => "u8",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
