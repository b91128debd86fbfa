//! Tile geometry for the depthwise output grid
//!
//! The depthwise kernels process the output plane in whole 4x4 tiles. The
//! grid here only counts tiles; ragged edges are the dispatch layer's
//! problem (it either pads the tensor or routes edge rows to a different
//! kernel variant before calling into this module).

/// Output tile extent along rows (output pixels per tile row)
pub const TILE_ROWS: usize = 4;

/// Output tile extent along columns (output pixels per tile column)
pub const TILE_COLS: usize = 4;

/// A grid of whole output tiles
///
/// Enumeration is row-major with column wraparound: the column index
/// advances every step, resets to zero at `tile_cols`, and the row index
/// advances by one at each reset. A grid with zero tiles in either
/// dimension enumerates nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    /// Number of whole tiles along the row axis
    pub tile_rows: usize,
    /// Number of whole tiles along the column axis
    pub tile_cols: usize,
}

impl TileGrid {
    /// Create a grid of `tile_rows` x `tile_cols` whole tiles
    #[inline]
    pub fn new(tile_rows: usize, tile_cols: usize) -> Self {
        Self {
            tile_rows,
            tile_cols,
        }
    }

    /// Total number of tiles in the grid
    #[inline]
    pub fn len(&self) -> usize {
        self.tile_rows * self.tile_cols
    }

    /// Returns true when the grid contains no tiles
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major enumeration of `(tile_row, tile_col)` coordinates
    #[inline]
    pub fn iter(&self) -> Tiles {
        Tiles {
            grid: *self,
            tile_row: 0,
            tile_col: 0,
        }
    }
}

impl IntoIterator for TileGrid {
    type Item = (usize, usize);
    type IntoIter = Tiles;

    fn into_iter(self) -> Tiles {
        self.iter()
    }
}

/// Iterator over tile coordinates, row-major with column wraparound
#[derive(Clone, Debug)]
pub struct Tiles {
    grid: TileGrid,
    tile_row: usize,
    tile_col: usize,
}

impl Iterator for Tiles {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<(usize, usize)> {
        if self.tile_row >= self.grid.tile_rows || self.grid.tile_cols == 0 {
            return None;
        }

        let coord = (self.tile_row, self.tile_col);

        self.tile_col += 1;
        if self.tile_col == self.grid.tile_cols {
            self.tile_col = 0;
            self.tile_row += 1;
        }

        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let done = self.tile_row * self.grid.tile_cols + self.tile_col;
        let remaining = self.grid.len().saturating_sub(done);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tiles {}
