//! Scalar reference for the depthwise convolution family
//!
//! A direct triple-loop transcription of the convolution definition, with
//! no tiling, no packing, and no vectorization. The optimized kernels are
//! tested against this; it is also the fallback for element types the
//! tiled path does not cover.

use super::geometry::{TILE_COLS, TILE_ROWS};
use super::schedule::{KERNEL_COLS, KERNEL_ROWS, TAPS};
use crate::dtype::Element;
use crate::kernels::clamp::clamp_value;

/// Scalar depthwise convolution over the same tile grid as the tiled kernel
///
/// Takes *unpacked* weights: `bias[ch]` and `taps[ch * 9 + kr * 3 + kc]`.
/// The stride contract, output coverage, and clamp semantics are identical
/// to [`depthwise_3x3s1_tile4x4`](super::depthwise_3x3s1_tile4x4).
///
/// # Safety
///
/// Same pointer validity requirements as the tiled kernel, with `bias`
/// valid for `n_channels` reads and `taps` for `9 * n_channels` reads.
#[allow(clippy::too_many_arguments)]
pub unsafe fn depthwise_3x3s1_reference<T: Element>(
    n_tile_rows: usize,
    n_tile_cols: usize,
    inptr: *const T,
    ld_input_row: usize,
    ld_input_col: usize,
    outptr: *mut T,
    ld_output_row: usize,
    ld_output_col: usize,
    bias: *const T,
    taps: *const T,
    n_channels: usize,
    activation_min: T,
    activation_max: T,
) {
    let out_rows = n_tile_rows * TILE_ROWS;
    let out_cols = n_tile_cols * TILE_COLS;

    for out_row in 0..out_rows {
        for out_col in 0..out_cols {
            for ch in 0..n_channels {
                let mut acc = *bias.add(ch);
                for kr in 0..KERNEL_ROWS {
                    for kc in 0..KERNEL_COLS {
                        let x = *inptr
                            .add((out_row + kr) * ld_input_row + (out_col + kc) * ld_input_col + ch);
                        let w = *taps.add(ch * TAPS + kr * KERNEL_COLS + kc);
                        acc = acc + x * w;
                    }
                }
                *outptr.add(out_row * ld_output_row + out_col * ld_output_col + ch) =
                    clamp_value(acc, activation_min, activation_max);
            }
        }
    }
}

/// Dimensions for the padded general depthwise variant
///
/// Buffers are dense NHWC: input `height x width x n_channels`, output
/// `output_h x output_w x n_channels`.
#[derive(Copy, Clone, Debug)]
pub struct DepthwiseConv2dParams {
    /// Input rows
    pub height: usize,
    /// Input columns
    pub width: usize,
    /// Channels (shared by input and output)
    pub n_channels: usize,
    /// Implicit zero rows above the input
    pub pad_top: usize,
    /// Implicit zero columns left of the input
    pub pad_left: usize,
    /// Output rows
    pub output_h: usize,
    /// Output columns
    pub output_w: usize,
}

/// Padded scalar depthwise convolution over a whole dense NHWC plane
///
/// Unlike the tiled path this variant handles arbitrary output sizes and
/// implicit zero padding; input positions outside `height x width`
/// contribute nothing. The dispatch layer routes shapes the whole-tile
/// kernel cannot cover (ragged edges, `same` padding) here.
///
/// # Safety
///
/// Caller must ensure:
/// - `input` points to `height * width * n_channels` elements
/// - `output` points to `output_h * output_w * n_channels` elements
/// - `bias` points to `n_channels` and `taps` to `9 * n_channels` elements
pub unsafe fn depthwise_conv2d_3x3s1_padded<T: Element>(
    input: *const T,
    bias: *const T,
    taps: *const T,
    output: *mut T,
    params: DepthwiseConv2dParams,
    activation_min: T,
    activation_max: T,
) {
    let DepthwiseConv2dParams {
        height,
        width,
        n_channels,
        pad_top,
        pad_left,
        output_h,
        output_w,
    } = params;

    for oy in 0..output_h {
        for ox in 0..output_w {
            for ch in 0..n_channels {
                let mut acc = *bias.add(ch);
                for kr in 0..KERNEL_ROWS {
                    for kc in 0..KERNEL_COLS {
                        let iy = (oy + kr) as isize - pad_top as isize;
                        let ix = (ox + kc) as isize - pad_left as isize;
                        if iy >= 0
                            && (iy as usize) < height
                            && ix >= 0
                            && (ix as usize) < width
                        {
                            let x = *input
                                .add((iy as usize * width + ix as usize) * n_channels + ch);
                            let w = *taps.add(ch * TAPS + kr * KERNEL_COLS + kc);
                            acc = acc + x * w;
                        }
                    }
                }
                *output.add((oy * output_w + ox) * n_channels + ch) =
                    clamp_value(acc, activation_min, activation_max);
            }
        }
    }
}
