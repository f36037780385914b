//! Randomized dictionary generation.
//!
//! New codewords are found by a bounded random search: per empty slot a
//! window of candidate grids is drawn, each scored by its separation from
//! everything already accepted (and from its own rotations), and the best of
//! the window is kept. The random source is injectable so tests and the
//! predefined registry can generate deterministically.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codec;
use crate::dictionary::{hamming, Dictionary};
use crate::error::{DictionaryError, Result};
use crate::grid::BitGrid;

/// Tuning knobs for the random search.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Candidate grids drawn per codeword slot.
    pub max_trials_per_word: usize,
    /// Minimum acceptable separation of a new word from the accepted set
    /// (and from its own rotations). Below this the generator gives up.
    pub min_separation: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_trials_per_word: 1000,
            min_separation: 1,
        }
    }
}

/// Generate a dictionary of exactly `n_markers` words of side `marker_size`,
/// seeding the search from the thread RNG.
///
/// If `base` is given, up to `n_markers` of its words are copied verbatim
/// (ids preserved) before any new word is synthesized; a base that already
/// covers the request short-circuits synthesis entirely.
pub fn generate(n_markers: usize, marker_size: usize, base: Option<&Dictionary>) -> Result<Dictionary> {
    generate_with_rng(
        n_markers,
        marker_size,
        base,
        &mut rand::thread_rng(),
        &GeneratorConfig::default(),
    )
}

/// Deterministic variant of [`generate`]: the same seed always produces a
/// bit-identical dictionary.
pub fn generate_seeded(
    n_markers: usize,
    marker_size: usize,
    base: Option<&Dictionary>,
    seed: u64,
) -> Result<Dictionary> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(
        n_markers,
        marker_size,
        base,
        &mut rng,
        &GeneratorConfig::default(),
    )
}

/// Generation primitive with an explicit random source and configuration.
pub fn generate_with_rng<R: Rng + ?Sized>(
    n_markers: usize,
    marker_size: usize,
    base: Option<&Dictionary>,
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<Dictionary> {
    if marker_size == 0 {
        return Err(DictionaryError::InvalidDimension {
            expected: 1,
            got: 0,
        });
    }
    if config.max_trials_per_word == 0 {
        return Err(DictionaryError::InvalidArgument(
            "max_trials_per_word must be positive".into(),
        ));
    }
    if let Some(base) = base {
        if base.marker_size() != marker_size {
            return Err(DictionaryError::InvalidDimension {
                expected: marker_size,
                got: base.marker_size(),
            });
        }
    }

    let mut accepted: Vec<[Vec<u8>; 4]> = Vec::with_capacity(n_markers);
    if let Some(base) = base {
        for word in base.words().iter().take(n_markers) {
            accepted.push(word.rotations.clone());
        }
    }

    while accepted.len() < n_markers {
        let mut best: Option<([Vec<u8>; 4], u32)> = None;
        for _ in 0..config.max_trials_per_word {
            let candidate = random_grid(marker_size, rng);
            let rotations = codec::pack_rotations(&candidate);
            let separation = candidate_separation(&rotations, &accepted);
            if best.as_ref().map_or(true, |(_, s)| separation > *s) {
                best = Some((rotations, separation));
            }
        }
        // max_trials_per_word >= 1, so a best candidate always exists.
        let (rotations, separation) = best.expect("at least one trial");
        if separation < config.min_separation {
            return Err(DictionaryError::GenerationExhausted {
                trials: config.max_trials_per_word,
                best: separation,
            });
        }
        debug!(
            "accepted word {} with separation {}",
            accepted.len(),
            separation
        );
        accepted.push(rotations);
    }

    let max_correction_bits = correction_budget(&accepted);
    info!(
        "generated dictionary: {} words of {}x{} bits, correction budget {}",
        accepted.len(),
        marker_size,
        marker_size,
        max_correction_bits
    );
    Ok(Dictionary::from_parts(
        marker_size,
        max_correction_bits,
        accepted,
    ))
}

fn random_grid<R: Rng + ?Sized>(n: usize, rng: &mut R) -> BitGrid {
    BitGrid::from_fn(n, |_, _| rng.gen_bool(0.5)).expect("side is positive")
}

/// Minimum Hamming distance from a candidate to every accepted word under
/// every relative rotation, and to the candidate's own rotated copies.
///
/// Rotating both codes by the same amount permutes both bit vectors
/// identically, so only the relative rotation matters; comparing the
/// candidate's rotation 0 against all four stored rotations covers every
/// combination.
fn candidate_separation(rotations: &[Vec<u8>; 4], accepted: &[[Vec<u8>; 4]]) -> u32 {
    let mut min = u32::MAX;
    for other in &rotations[1..] {
        min = min.min(hamming(&rotations[0], other));
    }
    for word in accepted {
        for other in word {
            min = min.min(hamming(&rotations[0], other));
        }
    }
    min
}

/// Correction budget from the minimum pairwise and self distance of the
/// final set: the largest radius whose balls around two distinct (id,
/// rotation) codes can never overlap, `(d_min - 1) / 2`.
fn correction_budget(accepted: &[[Vec<u8>; 4]]) -> u32 {
    let mut d_min = u32::MAX;
    for (i, word) in accepted.iter().enumerate() {
        for other in &word[1..] {
            d_min = d_min.min(hamming(&word[0], other));
        }
        for later in &accepted[i + 1..] {
            for other in later {
                d_min = d_min.min(hamming(&word[0], other));
            }
        }
    }
    if d_min == u32::MAX {
        0
    } else {
        d_min.saturating_sub(1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_seeded(20, 4, None, 99).unwrap();
        let b = generate_seeded(20, 4, None, 99).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn base_words_are_copied_verbatim() {
        let base = generate_seeded(10, 4, None, 5).unwrap();
        let extended = generate_seeded(15, 4, Some(&base), 6).unwrap();
        assert_eq!(extended.len(), 15);
        for id in 0..10 {
            assert_eq!(
                extended.words()[id].rotations,
                base.words()[id].rotations
            );
        }
    }

    #[test]
    fn covering_base_short_circuits_synthesis() {
        let base = generate_seeded(10, 4, None, 5).unwrap();
        let trimmed = generate_seeded(4, 4, Some(&base), 6).unwrap();
        assert_eq!(trimmed.len(), 4);
        for id in 0..4 {
            assert_eq!(trimmed.words()[id].rotations, base.words()[id].rotations);
        }
    }

    #[test]
    fn base_with_wrong_size_is_rejected() {
        let base = generate_seeded(4, 5, None, 5).unwrap();
        assert!(matches!(
            generate_seeded(8, 4, Some(&base), 6),
            Err(DictionaryError::InvalidDimension {
                expected: 4,
                got: 5
            })
        ));
    }

    #[test]
    fn separation_meets_the_correction_budget() {
        let dict = generate_seeded(30, 4, None, 42).unwrap();
        let floor = 2 * dict.max_correction_bits() + 1;
        let words = dict.words();
        for (i, word) in words.iter().enumerate() {
            for other in &word.rotations[1..] {
                assert!(hamming(&word.rotations[0], other) >= floor);
            }
            for later in &words[i + 1..] {
                for other in &later.rotations {
                    assert!(hamming(&word.rotations[0], other) >= floor);
                }
            }
        }
    }

    #[test]
    fn one_by_one_grids_cannot_separate_rotations() {
        // Every rotation of a 1x1 grid is the grid itself, so self-distance
        // is always zero and generation must give up.
        assert!(matches!(
            generate_seeded(1, 1, None, 0),
            Err(DictionaryError::GenerationExhausted { best: 0, .. })
        ));
    }

    #[test]
    fn zero_markers_yield_an_empty_dictionary() {
        let dict = generate_seeded(0, 4, None, 0).unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict.max_correction_bits(), 0);
    }
}
