//! Rotation-invariant identification.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::dictionary::{hamming, Dictionary};
use crate::error::{DictionaryError, Result};
use crate::grid::BitGrid;

/// A dictionary match for an observed bit grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Marker id in the dictionary.
    pub id: u32,
    /// Rotation `0..=3` at which the codeword was observed.
    pub rotation: u8,
    /// Hamming distance between the observation and the matched rotation.
    pub hamming: u32,
}

impl Dictionary {
    /// Find the codeword closest to `observed` over all ids and rotations.
    ///
    /// This is a brute-force scan over `len() × 4` packed codes. Distances
    /// are XOR + popcount on a handful of bytes, so the scan stays cheap even
    /// for dictionaries with thousands of entries, and an exhaustive scan is
    /// what makes the tie-break deterministic: ties go to the lower id, then
    /// the lower rotation index.
    ///
    /// The match is accepted only when its distance is at most
    /// `max_correction_rate * max_correction_bits()`; `0.0` demands an exact
    /// match, `1.0` allows the full budget the dictionary was built with.
    /// `Ok(None)` is the ordinary "no marker" outcome, not a fault.
    pub fn identify(&self, observed: &BitGrid, max_correction_rate: f64) -> Result<Option<Match>> {
        if !(0.0..=1.0).contains(&max_correction_rate) {
            return Err(DictionaryError::InvalidArgument(format!(
                "max_correction_rate {max_correction_rate} outside [0, 1]"
            )));
        }
        if observed.size() != self.marker_size() {
            return Err(DictionaryError::InvalidDimension {
                expected: self.marker_size(),
                got: observed.size(),
            });
        }

        let packed = codec::pack(observed);
        let mut best: Option<Match> = None;
        'scan: for word in self.words() {
            for (rotation, code) in word.rotations.iter().enumerate() {
                let h = hamming(&packed, code);
                if best.map_or(true, |prev| h < prev.hamming) {
                    best = Some(Match {
                        id: word.id,
                        rotation: rotation as u8,
                        hamming: h,
                    });
                    if h == 0 {
                        break 'scan;
                    }
                }
            }
        }

        let budget = max_correction_rate * f64::from(self.max_correction_bits());
        Ok(best.filter(|m| f64::from(m.hamming) <= budget))
    }
}
