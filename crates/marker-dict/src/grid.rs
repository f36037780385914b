//! Square boolean grids and the 90° rotation rule.

use crate::error::{DictionaryError, Result};

/// An owned `n × n` bit grid, row-major.
///
/// This is the exchange type between the external sampling stage and the
/// dictionary: one candidate observation, or one codeword orientation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    size: usize,
    bits: Vec<bool>, // row-major, len = size * size
}

impl BitGrid {
    /// All-zero grid of side `size`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(DictionaryError::InvalidDimension {
                expected: 1,
                got: 0,
            });
        }
        Ok(Self {
            size,
            bits: vec![false; size * size],
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Result<Self> {
        let mut grid = Self::new(size)?;
        for row in 0..size {
            for col in 0..size {
                grid.bits[row * size + col] = f(row, col);
            }
        }
        Ok(grid)
    }

    /// Build a grid from a row-major bit slice of length `size * size`.
    pub fn from_bits(size: usize, bits: &[bool]) -> Result<Self> {
        if size == 0 || bits.len() != size * size {
            return Err(DictionaryError::InvalidDimension {
                expected: size * size,
                got: bits.len(),
            });
        }
        Ok(Self {
            size,
            bits: bits.to_vec(),
        })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell access.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.bits[row * self.size + col] = value;
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// The grid rotated by 90° so that the bottom-left cell becomes the
    /// top-left cell. Applying this four times is the identity.
    ///
    /// The same rule is used at generation and at matching time; rotation
    /// index `k` always means "this function applied `k` times".
    pub fn rotated90(&self) -> Self {
        let n = self.size;
        let mut out = vec![false; n * n];
        for row in 0..n {
            for col in 0..n {
                out[row * n + col] = self.bits[(n - 1 - col) * n + row];
            }
        }
        Self {
            size: n,
            bits: out,
        }
    }
}
