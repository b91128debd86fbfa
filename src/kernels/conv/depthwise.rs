//! The tiled depthwise convolution micro-kernel
//!
//! This is the vector-length-agnostic rendition of the depthfirst direct
//! kernel: 3x3 filter, stride 1, whole 4x4 output tiles, NHWC memory. One
//! call walks the full tile grid; per tile it seeds 16 accumulators from
//! the bias, streams the 6x6 input window through the MAC schedule (each
//! input cell loaded once per channel block), clamps against the activation
//! bounds, and stores - with every memory access gated on the channel
//! block's active-lane count.
//!
//! The routine is synchronous and allocation-free. Partitioning the tile
//! grid across threads is the caller's job; concurrent calls must be given
//! disjoint output regions.

use super::addressing::{InputAddressing, OutputAddressing};
use super::channels::ChannelBlocks;
use super::geometry::{TileGrid, TILE_COLS, TILE_ROWS};
use super::schedule::{ACCUMULATORS, SCHEDULE, TAPS};
use crate::dtype::Element;
use crate::kernels::clamp::clamp_value;

/// Upper bound on lanes per channel block
///
/// Covers a 2048-bit vector of 32-bit elements, the widest the scalable
/// vector architectures define. The accumulator bank is sized against this
/// so the kernel never heap-allocates; requests for wider blocks are capped.
pub const MAX_LANES: usize = 64;

/// Direct depthwise convolution: 3x3, stride 1, 4x4 output tiles
///
/// Processes `n_tile_rows * n_tile_cols` whole tiles. The input window for
/// tile `(i, j)` starts at input position `(4i, 4j)` and spans 6x6
/// positions; the output tile covers positions `(4i..4i+4, 4j..4j+4)`.
/// Strides are in elements. `params` is the packed weight block produced by
/// [`pack_weights`](super::pack_weights) *for the same `lanes` value* -
/// the layout is a private contract and is not validated here.
///
/// Every output position covered by the tile grid is overwritten for
/// channels `0..n_channels`; no other memory is written. Activation bounds
/// are applied as `min(max(acc, activation_min), activation_max)` per lane.
/// Zero tile counts or zero channels make the call a no-op.
///
/// # Safety
///
/// Caller must ensure:
/// - `inptr` is valid for reads at every offset
///   `row * ld_input_row + col * ld_input_col + ch` with
///   `row < 4 * n_tile_rows + 2`, `col < 4 * n_tile_cols + 2`,
///   `ch < n_channels`
/// - `outptr` is valid for writes at every offset
///   `row * ld_output_row + col * ld_output_col + ch` with
///   `row < 4 * n_tile_rows`, `col < 4 * n_tile_cols`, `ch < n_channels`
/// - `params` holds `ceil(n_channels / lanes)` channel blocks of
///   `10 * lanes` elements, packed at the same `lanes`
/// - output regions of concurrent calls do not overlap
#[allow(clippy::too_many_arguments)]
pub unsafe fn depthwise_3x3s1_tile4x4<T: Element>(
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
    lanes: usize,
) {
    let lanes = lanes.clamp(1, MAX_LANES);

    for (tile_row, tile_col) in TileGrid::new(n_tile_rows, n_tile_cols) {
        let in_addr = InputAddressing::for_tile(tile_row, tile_col, ld_input_row, ld_input_col);
        let out_addr = OutputAddressing::for_tile(tile_row, tile_col, ld_output_row, ld_output_col);

        for block in ChannelBlocks::new(n_channels, lanes) {
            // Weight vectors for this channel block: bias, then the nine
            // taps, consumed in exactly the order packing laid them down.
            // The packed buffer is padded to full width, so these loads are
            // unmasked.
            let wp = params.add(block.index * (TAPS + 1) * lanes);
            let mut bias = [T::zero(); MAX_LANES];
            for l in 0..lanes {
                bias[l] = *wp.add(l);
            }
            let mut taps = [[T::zero(); MAX_LANES]; TAPS];
            for (tap, row) in taps.iter_mut().enumerate() {
                let tp = wp.add((tap + 1) * lanes);
                for l in 0..lanes {
                    row[l] = *tp.add(l);
                }
            }

            // Accumulator bank: one vector per output pixel, seeded from
            // the bias and re-seeded for every (tile, block) pair.
            let mut acc = [[T::zero(); MAX_LANES]; ACCUMULATORS];
            for a in acc.iter_mut() {
                a[..lanes].copy_from_slice(&bias[..lanes]);
            }

            // MAC schedule: one masked load per input cell, fanned out to
            // every accumulator whose receptive field includes it.
            for cell in SCHEDULE.iter() {
                let p = inptr
                    .add(in_addr.offset(cell.row as usize, cell.col as usize) + block.offset);
                let mut x = [T::zero(); MAX_LANES];
                for l in 0..block.active {
                    x[l] = *p.add(l);
                }

                for term in cell.terms() {
                    let w = &taps[term.tap as usize];
                    let a = &mut acc[term.acc as usize];
                    for l in 0..block.active {
                        a[l] = a[l] + x[l] * w[l];
                    }
                }
            }

            // Drain: clamp and store, masked to the active lanes.
            for r in 0..TILE_ROWS {
                for c in 0..TILE_COLS {
                    let a = &acc[r * TILE_COLS + c];
                    let q = outptr.add(out_addr.offset(r, c) + block.offset);
                    for l in 0..block.active {
                        *q.add(l) = clamp_value(a[l], activation_min, activation_max);
                    }
                }
            }
        }
    }
}
