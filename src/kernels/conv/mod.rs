//! Depthwise convolution kernels
//!
//! The family implements direct (non-im2col) depthwise 2D convolution for
//! NHWC tensors: a 3x3 stride-1 filter applied per channel over whole 4x4
//! output tiles. The work splits into small, separately testable pieces:
//!
//! - [`geometry`]: the tile grid and its row-major walk
//! - [`addressing`]: element-offset tables for the input window and output
//!   tile of each grid position
//! - [`schedule`]: the compile-time table mapping input cells to
//!   (tap, accumulator) multiply-accumulates
//! - [`channels`]: the width-agnostic channel loop with its active-lane tail
//! - [`packing`]: the bias + tap layout the kernel consumes
//! - [`depthwise`]: the tiled kernel itself
//! - [`reference`]: the scalar triple loop the kernel is validated against
//!
//! Callers with a framework-shaped entry point use
//! [`depthwise_conv2d_3x3s1_f32`] / [`depthwise_conv2d_3x3s1_f64`], which
//! query the host vector width. Code that wants to pin the width (tests,
//! benchmarks, schedulers that probe multiple widths) goes through
//! [`depthwise_conv2d_3x3s1_with_width`].

pub mod addressing;
pub mod channels;
pub mod depthwise;
pub mod geometry;
pub mod packing;
pub mod reference;
pub mod schedule;

pub use addressing::{InputAddressing, OutputAddressing};
pub use channels::{ChannelBlock, ChannelBlocks};
pub use depthwise::{depthwise_3x3s1_tile4x4, MAX_LANES};
pub use geometry::{TileGrid, TILE_COLS, TILE_ROWS};
pub use packing::{pack_weights, PackedWeights};
pub use reference::{
    depthwise_3x3s1_reference, depthwise_conv2d_3x3s1_padded, DepthwiseConv2dParams,
};
pub use schedule::{InputCell, MacTerm, ACCUMULATORS, SCHEDULE, TAPS};

use crate::dtype::Element;
use crate::simd::{NativeWidth, VectorWidth};

/// Depthwise 3x3 stride-1 convolution at an explicitly chosen vector width
///
/// `params` must have been packed with [`pack_weights`] at the width
/// `width` reports for `T::DTYPE`; the convenience wrappers below pair the
/// two automatically via [`NativeWidth`].
///
/// # Safety
///
/// See [`depthwise_3x3s1_tile4x4`] for the pointer validity requirements.
#[allow(clippy::too_many_arguments)]
pub unsafe fn depthwise_conv2d_3x3s1_with_width<T: Element>(
    n_tile_rows: usize,
    n_tile_cols: usize,
    inptr: *const T,
    ld_input_row: usize,
    ld_input_col: usize,
    outptr: *mut T,
    ld_output_row: usize,
    ld_output_col: usize,
    params: *const T,
    n_channels: usize,
    activation_min: T,
    activation_max: T,
    width: &dyn VectorWidth,
) {
    depthwise_3x3s1_tile4x4(
        n_tile_rows,
        n_tile_cols,
        inptr,
        ld_input_row,
        ld_input_col,
        outptr,
        ld_output_row,
        ld_output_col,
        params,
        n_channels,
        activation_min,
        activation_max,
        width.lanes(T::DTYPE),
    );
}

macro_rules! impl_depthwise_entry {
    ($name:ident, $ty:ty, $tyname:literal) => {
        #[doc = concat!(
            "Depthwise 3x3 stride-1 convolution over `", $tyname,
            "` at the host's native vector width"
        )]
        ///
        /// Weights must have been packed with [`pack_weights`] at
        /// `NativeWidth.lanes(dtype)` for the same element type.
        ///
        /// # Safety
        ///
        /// See [`depthwise_3x3s1_tile4x4`] for the pointer validity
        /// requirements.
        #[allow(clippy::too_many_arguments)]
        pub unsafe fn $name(
            n_tile_rows: usize,
            n_tile_cols: usize,
            inptr: *const $ty,
            ld_input_row: usize,
            ld_input_col: usize,
            outptr: *mut $ty,
            ld_output_row: usize,
            ld_output_col: usize,
            params: *const $ty,
            n_channels: usize,
            activation_min: $ty,
            activation_max: $ty,
        ) {
            depthwise_conv2d_3x3s1_with_width(
                n_tile_rows,
                n_tile_cols,
                inptr,
                ld_input_row,
                ld_input_col,
                outptr,
                ld_output_row,
                ld_output_col,
                params,
                n_channels,
                activation_min,
                activation_max,
                &NativeWidth,
            );
        }
    };
}

impl_depthwise_entry!(depthwise_conv2d_3x3s1_f32, f32, "f32");
impl_depthwise_entry!(depthwise_conv2d_3x3s1_f64, f64, "f64");
