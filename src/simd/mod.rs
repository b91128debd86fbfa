//! SIMD capability detection and the vector-width abstraction
//!
//! Two layers live here:
//!
//! 1. [`detect_simd`] performs runtime CPU feature detection, cached in a
//!    `OnceLock`, and reports the best available [`SimdLevel`].
//! 2. [`VectorWidth`] turns the detected level into the one number the
//!    vector-length-agnostic kernels actually consume: how many lanes of a
//!    given dtype fit in one vector register. The width is a *runtime*
//!    property, never a compile-time constant - the same binary may run on
//!    hardware with different vector lengths, and tests inject a
//!    [`FixedWidth`] to pin the channel-loop structure.
//!
//! # Architecture Support
//!
//! | Architecture | Instruction Set | Vector Width | Status    |
//! |--------------|-----------------|--------------|-----------|
//! | x86-64       | AVX-512F + FMA  | 512 bits     | Supported |
//! | x86-64       | AVX2 + FMA      | 256 bits     | Supported |
//! | ARM64        | NEON            | 128 bits     | Supported |
//! | Any          | Scalar          | N/A          | Fallback  |

use crate::dtype::DType;
use std::sync::OnceLock;

/// SIMD capability level detected at runtime
///
/// Higher values indicate more capable SIMD instruction sets.
///
/// Note: All variants are defined on all platforms for API completeness,
/// but some are only constructed at runtime on their respective architectures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(dead_code)] // Variants may not be constructed on all architectures
pub enum SimdLevel {
    // x86-64 variants (highest capability)
    /// AVX-512F with FMA support (512-bit vectors, 16 f32s or 8 f64s)
    Avx512 = 3,
    /// AVX2 with FMA support (256-bit vectors, 8 f32s or 4 f64s)
    Avx2Fma = 2,

    // ARM64 variants
    /// NEON baseline for AArch64 (128-bit vectors, 4 f32s or 2 f64s)
    Neon = 1,

    // Universal fallback
    /// Scalar fallback (no SIMD)
    Scalar = 0,
}

impl SimdLevel {
    /// Vector register width in bytes (element size for the scalar fallback)
    #[inline]
    pub const fn vector_bytes(self) -> usize {
        match self {
            Self::Avx512 => 64,
            Self::Avx2Fma => 32,
            Self::Neon => 16,
            Self::Scalar => 0,
        }
    }

    /// Returns the number of f32 elements per vector register
    #[inline]
    pub const fn f32_lanes(self) -> usize {
        match self {
            Self::Avx512 => 16,
            Self::Avx2Fma => 8,
            Self::Neon => 4,
            Self::Scalar => 1,
        }
    }

    /// Returns the number of f64 elements per vector register
    #[inline]
    pub const fn f64_lanes(self) -> usize {
        match self {
            Self::Avx512 => 8,
            Self::Avx2Fma => 4,
            Self::Neon => 2,
            Self::Scalar => 1,
        }
    }

    /// Returns the number of elements of `dtype` per vector register
    #[inline]
    pub const fn lanes_for(self, dtype: DType) -> usize {
        match self {
            Self::Scalar => 1,
            level => level.vector_bytes() / dtype.size_in_bytes(),
        }
    }

    /// Returns the name of this SIMD level as a string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Avx512 => "AVX-512",
            Self::Avx2Fma => "AVX2+FMA",
            Self::Neon => "NEON",
            Self::Scalar => "Scalar",
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached SIMD level detection
static SIMD_LEVEL: OnceLock<SimdLevel> = OnceLock::new();

/// Detect the best available SIMD level for the current CPU
///
/// This function is cached - the first call performs detection,
/// subsequent calls return the cached result with ~1ns overhead.
#[inline]
pub fn detect_simd() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(detect_simd_uncached)
}

/// Perform actual CPU feature detection (called once)
#[cold]
#[allow(unreachable_code)]
fn detect_simd_uncached() -> SimdLevel {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f")
            && is_x86_feature_detected!("avx512vl")
            && is_x86_feature_detected!("fma")
        {
            return SimdLevel::Avx512;
        }

        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            return SimdLevel::Avx2Fma;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // NEON is mandatory for AArch64 - always available
        return SimdLevel::Neon;
    }

    SimdLevel::Scalar
}

// ============================================================================
// Vector-width capability
// ============================================================================

/// Runtime-queried vector width, injected into width-agnostic kernels
///
/// Kernels that iterate the channel dimension in vector-sized blocks take
/// the block size from this capability rather than a compile-time constant.
/// Production code passes [`NativeWidth`]; tests pass a [`FixedWidth`] to
/// exercise specific tail shapes regardless of the host CPU.
pub trait VectorWidth {
    /// Number of lanes of `dtype` processed per channel-loop step
    fn lanes(&self, dtype: DType) -> usize;
}

/// The hardware's native vector width, via [`detect_simd`]
#[derive(Copy, Clone, Debug, Default)]
pub struct NativeWidth;

impl VectorWidth for NativeWidth {
    #[inline]
    fn lanes(&self, dtype: DType) -> usize {
        detect_simd().lanes_for(dtype)
    }
}

/// A fixed vector width, independent of the host CPU
///
/// Zero widths are treated as one lane.
#[derive(Copy, Clone, Debug)]
pub struct FixedWidth(pub usize);

impl VectorWidth for FixedWidth {
    #[inline]
    fn lanes(&self, _dtype: DType) -> usize {
        self.0.max(1)
    }
}
