//! Weight packing for the depthwise kernels
//!
//! The kernel consumes its weights as an opaque, pre-packed block laid out
//! in the exact order the MAC schedule reads them: per channel block of
//! `lanes` channels, one bias vector followed by the nine tap vectors in
//! row-major kernel-position order. The layout is a private contract
//! between this packing step and the kernel - it is not a file format, and
//! a mismatch corrupts results silently rather than raising an error.
//!
//! Packing is the one place in the convolution family that validates its
//! inputs, because it runs once at model-load time rather than per call.

use super::channels::ChannelBlocks;
use super::depthwise::MAX_LANES;
use super::schedule::TAPS;
use crate::dtype::Element;
use crate::error::{Error, Result};

/// Weights packed for a given channel count and vector width
///
/// The final partial channel block is zero-padded to full width so the
/// kernel can load whole vectors unconditionally; the active-lane mask on
/// the MAC side makes the padding lanes inert.
#[derive(Clone, Debug)]
pub struct PackedWeights<T> {
    data: Vec<T>,
    lanes: usize,
    n_channels: usize,
}

impl<T: Element> PackedWeights<T> {
    /// Pointer to the packed block, as the kernel call contract expects
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// The vector width this block was packed for
    #[inline]
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// The channel count this block was packed for
    #[inline]
    pub fn n_channels(&self) -> usize {
        self.n_channels
    }

    /// Elements occupied by one channel block (bias + taps, full width)
    #[inline]
    pub fn block_len(&self) -> usize {
        (TAPS + 1) * self.lanes
    }
}

/// Pack per-channel bias and 3x3 taps for a kernel running at `lanes` width
///
/// `bias` holds one value per channel; `taps` holds nine values per channel
/// in row-major kernel-position order (`taps[ch * 9 + kr * 3 + kc]`).
///
/// The width is normalized to `1..=MAX_LANES` with the same rule the kernel
/// applies, so both sides of the layout contract key on one value even for
/// out-of-range requests; [`PackedWeights::lanes`] reports the normalized
/// width.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] when `taps.len() != bias.len() * 9`
/// and [`Error::InvalidArgument`] for a zero channel count.
pub fn pack_weights<T: Element>(bias: &[T], taps: &[T], lanes: usize) -> Result<PackedWeights<T>> {
    let n_channels = bias.len();
    if n_channels == 0 {
        return Err(Error::invalid_argument(
            "bias",
            "at least one channel is required",
        ));
    }
    if taps.len() != n_channels * TAPS {
        return Err(Error::length_mismatch(
            "pack_weights",
            n_channels * TAPS,
            taps.len(),
        ));
    }

    let lanes = lanes.clamp(1, MAX_LANES);
    let blocks = ChannelBlocks::new(n_channels, lanes).count();
    let mut data = vec![T::zero(); blocks * (TAPS + 1) * lanes];

    for block in ChannelBlocks::new(n_channels, lanes) {
        let base = block.index * (TAPS + 1) * lanes;
        for lane in 0..block.active {
            let ch = block.offset + lane;
            data[base + lane] = bias[ch];
            for tap in 0..TAPS {
                data[base + (tap + 1) * lanes + lane] = taps[ch * TAPS + tap];
            }
        }
    }

    Ok(PackedWeights {
        data,
        lanes,
        n_channels,
    })
}
