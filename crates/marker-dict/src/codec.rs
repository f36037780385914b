//! Packing between bit grids and rotation-aware byte codes.
//!
//! Each orientation is flattened row-major and packed 8 bits per byte,
//! MSB-first, zero-padded to `ceil(n² / 8)` bytes. Storing all four
//! orientations lets the matcher compare a candidate against every rotation
//! without rotating anything per query; Hamming distances then reduce to
//! XOR + popcount on bytes.

use crate::error::{DictionaryError, Result};
use crate::grid::BitGrid;

/// Bytes needed for one packed orientation of an `n × n` grid.
#[inline]
pub fn bytes_per_rotation(n: usize) -> usize {
    (n * n + 7) / 8
}

/// Pack a single orientation, row-major, MSB-first.
pub fn pack(grid: &BitGrid) -> Vec<u8> {
    let n = grid.size();
    let mut out = vec![0u8; bytes_per_rotation(n)];
    for (idx, &bit) in grid.bits().iter().enumerate() {
        if bit {
            out[idx / 8] |= 0x80 >> (idx % 8);
        }
    }
    out
}

/// Pack all four 90° rotations of `grid`, rotation 0 first.
pub fn pack_rotations(grid: &BitGrid) -> [Vec<u8>; 4] {
    let r1 = grid.rotated90();
    let r2 = r1.rotated90();
    let r3 = r2.rotated90();
    [pack(grid), pack(&r1), pack(&r2), pack(&r3)]
}

/// Inverse of [`pack`] for one orientation.
///
/// Round-trip law: `unpack(&pack(&g), g.size()) == g` for every valid grid.
pub fn unpack(bytes: &[u8], n: usize) -> Result<BitGrid> {
    if n == 0 {
        return Err(DictionaryError::InvalidDimension {
            expected: 1,
            got: 0,
        });
    }
    let expected = bytes_per_rotation(n);
    if bytes.len() != expected {
        return Err(DictionaryError::MalformedCodebook {
            expected,
            got: bytes.len(),
        });
    }
    BitGrid::from_fn(n, |row, col| {
        let idx = row * n + col;
        bytes[idx / 8] & (0x80 >> (idx % 8)) != 0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_is_msb_first_row_major() {
        // First row of a 4x4 grid occupies the high nibble of byte 0.
        let g = BitGrid::from_fn(4, |r, c| r == 0 && c < 2).unwrap();
        let bytes = pack(&g);
        assert_eq!(bytes, vec![0b1100_0000, 0x00]);
    }

    #[test]
    fn round_trip_various_sizes() {
        for n in [1usize, 3, 4, 5, 7, 9] {
            let g = BitGrid::from_fn(n, |r, c| (r ^ c) & 1 == 0).unwrap();
            let back = unpack(&pack(&g), n).unwrap();
            assert_eq!(g, back, "round trip failed for n={n}");
        }
    }

    #[test]
    fn rotation_slots_are_consistent() {
        let g = BitGrid::from_fn(5, |r, c| (r * 5 + c) % 4 == 0).unwrap();
        let rots = pack_rotations(&g);
        assert_eq!(unpack(&rots[1], 5).unwrap(), g.rotated90());
        assert_eq!(unpack(&rots[3], 5).unwrap().rotated90(), g);
    }

    #[test]
    fn unpack_rejects_wrong_length() {
        assert!(matches!(
            unpack(&[0u8; 3], 4),
            Err(DictionaryError::MalformedCodebook {
                expected: 2,
                got: 3
            })
        ));
        assert!(matches!(
            unpack(&[], 0),
            Err(DictionaryError::InvalidDimension { .. })
        ));
    }
}
