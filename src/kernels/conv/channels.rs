//! The vector-width-agnostic channel loop
//!
//! Depthwise convolution has no cross-channel mixing, so the channel
//! dimension vectorizes trivially: the loop walks it in blocks of the
//! runtime-queried vector width, and the final block carries an active-lane
//! count covering only the channels that remain. Every load, MAC, and store
//! in the kernel is gated on that count, which is what keeps the kernel
//! from touching memory at channel indices >= `n_channels`.

/// One step of the channel loop
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChannelBlock {
    /// Position of this block in the loop, starting at 0
    pub index: usize,
    /// First channel covered by this block
    pub offset: usize,
    /// Active lanes: `lanes` for full blocks, `1..=lanes` for the tail
    pub active: usize,
}

/// Iterator over channel blocks of a runtime-queried vector width
///
/// The tail block always executes: when `n_channels` is an exact multiple
/// of the width, the last block is simply full-width. Zero channels yield
/// no blocks.
#[derive(Clone, Debug)]
pub struct ChannelBlocks {
    n_channels: usize,
    lanes: usize,
    offset: usize,
    index: usize,
}

impl ChannelBlocks {
    /// Walk `n_channels` channels in blocks of `lanes`
    ///
    /// A zero `lanes` is treated as one so the loop always advances.
    #[inline]
    pub fn new(n_channels: usize, lanes: usize) -> Self {
        Self {
            n_channels,
            lanes: lanes.max(1),
            offset: 0,
            index: 0,
        }
    }

    /// The block size this loop advances by
    #[inline]
    pub fn lanes(&self) -> usize {
        self.lanes
    }
}

impl Iterator for ChannelBlocks {
    type Item = ChannelBlock;

    #[inline]
    fn next(&mut self) -> Option<ChannelBlock> {
        if self.offset >= self.n_channels {
            return None;
        }

        let remaining = self.n_channels - self.offset;
        let block = ChannelBlock {
            index: self.index,
            offset: self.offset,
            active: remaining.min(self.lanes),
        };

        self.offset += self.lanes;
        self.index += 1;

        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n_channels - self.offset.min(self.n_channels)).div_ceil(self.lanes);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChannelBlocks {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_tail_block() {
        // 9 channels at width 4: blocks of 4, 4, 1 active lanes
        let blocks: Vec<_> = ChannelBlocks::new(9, 4).collect();
        assert_eq!(
            blocks,
            vec![
                ChannelBlock {
                    index: 0,
                    offset: 0,
                    active: 4
                },
                ChannelBlock {
                    index: 1,
                    offset: 4,
                    active: 4
                },
                ChannelBlock {
                    index: 2,
                    offset: 8,
                    active: 1
                },
            ]
        );
    }

    #[test]
    fn test_exact_multiple_still_runs_full_width_tail() {
        let blocks: Vec<_> = ChannelBlocks::new(8, 4).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].offset, 4);
        assert_eq!(blocks[1].active, 4);
    }

    #[test]
    fn test_fewer_channels_than_width() {
        let blocks: Vec<_> = ChannelBlocks::new(3, 16).collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].active, 3);
    }

    #[test]
    fn test_zero_channels_yields_nothing() {
        assert_eq!(ChannelBlocks::new(0, 8).count(), 0);
    }

    #[test]
    fn test_zero_width_treated_as_scalar() {
        let blocks: Vec<_> = ChannelBlocks::new(3, 0).collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks.iter().all(|b| b.active == 1));
    }

    #[test]
    fn test_blocks_cover_every_channel_once() {
        for (n, lanes) in [(17, 4), (16, 16), (1, 8), (100, 7)] {
            let mut covered = vec![false; n];
            for block in ChannelBlocks::new(n, lanes) {
                for ch in block.offset..block.offset + block.active {
                    assert!(!covered[ch]);
                    covered[ch] = true;
                }
            }
            assert!(covered.iter().all(|&v| v), "n={} lanes={}", n, lanes);
        }
    }
}
