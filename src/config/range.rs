//! Inclusive block ranges for log queries

use crate::error::{ConfigError, Result};
use std::fmt;

/// Number of trailing blocks queried when no range is given
pub const DEFAULT_BLOCK_WINDOW: u64 = 100;

/// Inclusive block range `[from, to]`, always with `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    from: u64,
    to: u64,
}

impl BlockRange {
    /// Create a range, rejecting `from > to`
    pub fn new(from: u64, to: u64) -> Result<Self> {
        if from > to {
            return Err(ConfigError::InvalidBlockRange { from, to }.into());
        }
        Ok(Self { from, to })
    }

    /// The last `window` blocks ending at `head`, clamped at genesis.
    ///
    /// With a window of 100 this is `[head - 99, head]`, or `[0, head]` when
    /// the chain is shorter than the window.
    pub fn trailing(head: u64, window: u64) -> Result<Self> {
        if window == 0 {
            return Err(ConfigError::InvalidBlockWindow(window).into());
        }

        let span = window - 1;
        let from = if head >= span { head - span } else { 0 };

        Ok(Self { from, to: head })
    }

    pub fn from_block(&self) -> u64 {
        self.from
    }

    pub fn to_block(&self) -> u64 {
        self.to
    }

    /// Number of blocks covered
    pub fn block_count(&self) -> u64 {
        self.to - self.from + 1
    }
}

impl fmt::Display for BlockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.from, self.to)
    }
}
