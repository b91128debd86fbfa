//! Strided memory addressing for the tiled depthwise kernels
//!
//! All offsets here are in *elements*. They become addresses exactly once,
//! at the access site, via `ptr.add(offset)` - computing in elements and
//! scaling once is what keeps double-scaling bugs out of the pointer
//! arithmetic. Strides are caller-supplied (NHWC: the channel dimension is
//! innermost and the channel offset is simply added on top).

use super::geometry::{TILE_COLS, TILE_ROWS};
use super::schedule::{INPUT_COLS, INPUT_ROWS};

/// Element offsets covering the 6x6 input window of one tile
///
/// Row offsets are built by repeated addition of the input row stride from
/// the tile's base offset; column offsets are multiples of the column
/// stride shared across all rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputAddressing {
    row_offsets: [usize; INPUT_ROWS],
    col_offsets: [usize; INPUT_COLS],
}

impl InputAddressing {
    /// Addressing for the tile at `(tile_row, tile_col)`
    ///
    /// The base offset is `tile_row * ld_row + tile_col * ld_col`, scaled by
    /// the output-tile extent: a stride-1 3x3 kernel producing a 4x4 tile
    /// consumes a 4-aligned swath of input positions per axis (the window
    /// extends 2 positions past it, reached through the row/col offsets).
    #[inline]
    pub fn for_tile(tile_row: usize, tile_col: usize, ld_row: usize, ld_col: usize) -> Self {
        let base = tile_row * TILE_ROWS * ld_row + tile_col * TILE_COLS * ld_col;

        let mut row_offsets = [0usize; INPUT_ROWS];
        let mut offset = base;
        for slot in row_offsets.iter_mut() {
            *slot = offset;
            offset += ld_row;
        }

        let mut col_offsets = [0usize; INPUT_COLS];
        for (c, slot) in col_offsets.iter_mut().enumerate() {
            *slot = c * ld_col;
        }

        Self {
            row_offsets,
            col_offsets,
        }
    }

    /// Element offset of input-window position `(row, col)` at channel 0
    #[inline(always)]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        self.row_offsets[row] + self.col_offsets[col]
    }
}

/// Element offsets covering the 4x4 output positions of one tile
///
/// Built symmetrically to [`InputAddressing`] but without the convolution
/// window expansion: exactly `TILE_ROWS` rows and `TILE_COLS` columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputAddressing {
    row_offsets: [usize; TILE_ROWS],
    col_offsets: [usize; TILE_COLS],
}

impl OutputAddressing {
    /// Addressing for the tile at `(tile_row, tile_col)`
    #[inline]
    pub fn for_tile(tile_row: usize, tile_col: usize, ld_row: usize, ld_col: usize) -> Self {
        let base = tile_row * TILE_ROWS * ld_row + tile_col * TILE_COLS * ld_col;

        let mut row_offsets = [0usize; TILE_ROWS];
        let mut offset = base;
        for slot in row_offsets.iter_mut() {
            *slot = offset;
            offset += ld_row;
        }

        let mut col_offsets = [0usize; TILE_COLS];
        for (c, slot) in col_offsets.iter_mut().enumerate() {
            *slot = c * ld_col;
        }

        Self {
            row_offsets,
            col_offsets,
        }
    }

    /// Element offset of output position `(row, col)` at channel 0
    #[inline(always)]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        self.row_offsets[row] + self.col_offsets[col]
    }
}
