//! # primr
//!
//! **CPU compute kernels for tensor primitives.**
//!
//! primr is the compute core consumed by an inference runtime's dispatch
//! layer: a library of numerical kernels (elementwise ops, casts, reductions,
//! convolutions) operating directly on caller-owned, strided tensor memory.
//!
//! ## What lives here
//!
//! - **Elementwise kernels**: binary, unary, tensor-scalar, clamp
//! - **Casts**: dtype-to-dtype conversion over raw buffers
//! - **Reductions**: sum, mean, max, min, prod along a contiguous axis
//! - **Spatial resize**: nearest and bilinear rescaling of NHWC planes
//! - **Depthwise convolution micro-kernels**: tiled, multi-accumulator,
//!   vector-length-agnostic direct convolution with fused activation
//!   clamping (the 3x3 stride-1 4x4-output-tile kernel)
//!
//! ## What does NOT live here
//!
//! Kernel selection, tensor/shape bookkeeping, operator fusion, memory
//! allocation, and threading are all the caller's responsibility. Kernels
//! are synchronous, allocation-free, and validation-free: malformed inputs
//! produce incorrect numbers, not errors (see [`error`] for the few
//! surfaces that do validate, such as weight packing).
//!
//! ## Quick Start
//!
//! ```rust
//! use primr::dtype::DType;
//! use primr::kernels::conv::{depthwise_conv2d_3x3s1_f32, pack_weights};
//! use primr::simd::{NativeWidth, VectorWidth};
//!
//! // 1 tile = 4x4 outputs = 6x6 inputs for a 3x3 stride-1 kernel
//! let channels = 3;
//! let input = vec![1.0f32; 6 * 6 * channels];
//! let mut output = vec![0.0f32; 4 * 4 * channels];
//! let bias = vec![0.0f32; channels];
//! let taps = vec![1.0f32; channels * 9];
//!
//! // The packed layout is a private contract with the kernel: pack with the
//! // same vector width the kernel will run at.
//! let lanes = NativeWidth.lanes(DType::F32);
//! let packed = pack_weights(&bias, &taps, lanes).unwrap();
//! unsafe {
//!     depthwise_conv2d_3x3s1_f32(
//!         1, 1,
//!         input.as_ptr(), 6 * channels, channels,
//!         output.as_mut_ptr(), 4 * channels, channels,
//!         packed.as_ptr(), channels,
//!         0.0, 100.0,
//!     );
//! }
//! assert!(output.iter().all(|&v| v == 9.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `f16`: Half-precision element types (F16, BF16) via the `half` crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod kernels;
pub mod ops;
pub mod simd;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{BinaryOp, ReduceOp, UnaryOp};
    pub use crate::simd::{detect_simd, FixedWidth, NativeWidth, SimdLevel, VectorWidth};
}
