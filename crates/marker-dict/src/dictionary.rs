//! Dictionary storage and by-id distance queries.

use serde::{Deserialize, Serialize};

use crate::codec::{self, bytes_per_rotation};
use crate::error::{DictionaryError, Result};
use crate::grid::BitGrid;

/// One dictionary entry: its positional id and the packed bytes of its four
/// 90° rotations (rotation 0 first).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeWord {
    pub id: u32,
    pub rotations: [Vec<u8>; 4],
}

/// An immutable set of marker codewords sharing a grid size and an
/// error-correction budget.
///
/// Invariant: `words[i].id == i` — the id is the position, dense and
/// zero-based. All words share `marker_size`. Once built, a dictionary is
/// never mutated and is safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    marker_size: usize,
    max_correction_bits: u32,
    words: Vec<CodeWord>,
}

impl Dictionary {
    pub(crate) fn from_parts(
        marker_size: usize,
        max_correction_bits: u32,
        rotations: Vec<[Vec<u8>; 4]>,
    ) -> Self {
        let words = rotations
            .into_iter()
            .enumerate()
            .map(|(id, rotations)| CodeWord {
                id: id as u32,
                rotations,
            })
            .collect();
        Self {
            marker_size,
            max_correction_bits,
            words,
        }
    }

    /// Build from rotation-0 bit grids; the other rotations are computed.
    ///
    /// Ids are assigned positionally. Every grid must have side
    /// `marker_size`.
    pub fn from_grids(
        marker_size: usize,
        grids: &[BitGrid],
        max_correction_bits: u32,
    ) -> Result<Self> {
        if marker_size == 0 {
            return Err(DictionaryError::InvalidDimension {
                expected: 1,
                got: 0,
            });
        }
        let mut rotations = Vec::with_capacity(grids.len());
        for grid in grids {
            if grid.size() != marker_size {
                return Err(DictionaryError::InvalidDimension {
                    expected: marker_size,
                    got: grid.size(),
                });
            }
            rotations.push(codec::pack_rotations(grid));
        }
        Ok(Self::from_parts(marker_size, max_correction_bits, rotations))
    }

    /// Build from a flat buffer of rotation-0 packed entries, one slot of
    /// `ceil(n²/8)` bytes per word; the other rotations are computed.
    pub fn from_rotation0_bytes(
        bytes: &[u8],
        marker_size: usize,
        word_count: usize,
        max_correction_bits: u32,
    ) -> Result<Self> {
        if marker_size == 0 {
            return Err(DictionaryError::InvalidDimension {
                expected: 1,
                got: 0,
            });
        }
        let bpr = bytes_per_rotation(marker_size);
        let expected = word_count * bpr;
        if bytes.len() != expected {
            return Err(DictionaryError::MalformedCodebook {
                expected,
                got: bytes.len(),
            });
        }
        let mut rotations = Vec::with_capacity(word_count);
        for slot in bytes.chunks_exact(bpr) {
            let grid = codec::unpack(slot, marker_size)?;
            rotations.push(codec::pack_rotations(&grid));
        }
        Ok(Self::from_parts(marker_size, max_correction_bits, rotations))
    }

    /// Build from a flat pre-rotated buffer, the layout written by
    /// [`Dictionary::to_bytes`]: entry-major, then rotation-major, each slot
    /// `ceil(n²/8)` bytes.
    pub fn from_bytes(
        bytes: &[u8],
        marker_size: usize,
        word_count: usize,
        max_correction_bits: u32,
    ) -> Result<Self> {
        if marker_size == 0 {
            return Err(DictionaryError::InvalidDimension {
                expected: 1,
                got: 0,
            });
        }
        let bpr = bytes_per_rotation(marker_size);
        let expected = word_count * 4 * bpr;
        if bytes.len() != expected {
            return Err(DictionaryError::MalformedCodebook {
                expected,
                got: bytes.len(),
            });
        }
        let mut rotations = Vec::with_capacity(word_count);
        for entry in bytes.chunks_exact(4 * bpr) {
            rotations.push([
                entry[..bpr].to_vec(),
                entry[bpr..2 * bpr].to_vec(),
                entry[2 * bpr..3 * bpr].to_vec(),
                entry[3 * bpr..].to_vec(),
            ]);
        }
        Ok(Self::from_parts(marker_size, max_correction_bits, rotations))
    }

    /// Serialize all codewords to the flat layout accepted by
    /// [`Dictionary::from_bytes`]. Grid size, word count and correction
    /// budget travel out of band.
    pub fn to_bytes(&self) -> Vec<u8> {
        let bpr = bytes_per_rotation(self.marker_size);
        let mut out = Vec::with_capacity(self.words.len() * 4 * bpr);
        for word in &self.words {
            for rotation in &word.rotations {
                out.extend_from_slice(rotation);
            }
        }
        out
    }

    /// Side length of the bit grid, in bits.
    #[inline]
    pub fn marker_size(&self) -> usize {
        self.marker_size
    }

    /// Maximum number of bit errors identification may correct.
    #[inline]
    pub fn max_correction_bits(&self) -> u32 {
        self.max_correction_bits
    }

    /// Number of codewords.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All codewords, in id order.
    #[inline]
    pub fn words(&self) -> &[CodeWord] {
        &self.words
    }

    /// Codeword by id.
    pub fn word(&self, id: u32) -> Result<&CodeWord> {
        self.words
            .get(id as usize)
            .ok_or(DictionaryError::IdOutOfRange {
                id,
                len: self.words.len(),
            })
    }

    /// Unpack one stored orientation of a codeword back into a bit grid.
    pub fn grid(&self, id: u32, rotation: u8) -> Result<BitGrid> {
        if rotation > 3 {
            return Err(DictionaryError::InvalidArgument(format!(
                "rotation {rotation} out of range 0..=3"
            )));
        }
        let word = self.word(id)?;
        codec::unpack(&word.rotations[rotation as usize], self.marker_size)
    }

    /// Hamming distance between `grid` and codeword `id`.
    ///
    /// With `all_rotations` the minimum over the four stored rotations is
    /// returned; otherwise only rotation 0 is compared.
    pub fn distance_to_id(&self, grid: &BitGrid, id: u32, all_rotations: bool) -> Result<u32> {
        if grid.size() != self.marker_size {
            return Err(DictionaryError::InvalidDimension {
                expected: self.marker_size,
                got: grid.size(),
            });
        }
        let word = self.word(id)?;
        let packed = codec::pack(grid);
        let distance = if all_rotations {
            word.rotations
                .iter()
                .map(|r| hamming(&packed, r))
                .min()
                .unwrap_or(0)
        } else {
            hamming(&packed, &word.rotations[0])
        };
        Ok(distance)
    }
}

/// Bitwise Hamming distance between two equal-length packed codes.
#[inline]
pub(crate) fn hamming(a: &[u8], b: &[u8]) -> u32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x ^ y).count_ones())
        .sum()
}
