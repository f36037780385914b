//! End-to-end properties of the dictionary core: packing round trips,
//! rotation-invariant identification, generator separation and registry
//! determinism.

use marker_dict::{
    generate_seeded, pack, unpack, BitGrid, Dictionary, DictionaryError, PredefinedDictionary,
};

fn patterned_grid(n: usize, salt: u64) -> BitGrid {
    BitGrid::from_fn(n, |r, c| {
        let idx = (r * n + c) as u64;
        (salt.wrapping_mul(idx + 1).wrapping_add(idx >> 2)) % 3 == 0
    })
    .unwrap()
}

#[test]
fn pack_unpack_round_trip() {
    for n in [1usize, 2, 4, 5, 6, 7, 8, 10] {
        for salt in [1u64, 17, 911] {
            let g = patterned_grid(n, salt);
            assert_eq!(unpack(&pack(&g), n).unwrap(), g);
        }
    }
}

#[test]
fn every_word_identifies_itself_at_every_rotation() {
    let dict = generate_seeded(25, 5, None, 2024).unwrap();
    for id in 0..dict.len() as u32 {
        for rotation in 0u8..4 {
            let observed = dict.grid(id, rotation).unwrap();
            let m = dict
                .identify(&observed, 0.0)
                .unwrap()
                .expect("stored word must identify exactly");
            assert_eq!(m.id, id);
            assert_eq!(m.rotation, rotation);
            assert_eq!(m.hamming, 0);
        }
    }
}

#[test]
fn distant_grid_is_rejected_not_faulted() {
    // A single all-zeros word: every stored rotation is all zeros, so the
    // distance to any candidate is its popcount, rotation-independent.
    let words = [BitGrid::new(4).unwrap()];
    let dict = Dictionary::from_grids(4, &words, 3).unwrap();

    let candidate = BitGrid::from_fn(4, |r, _| r < 2).unwrap(); // 8 set bits
    assert_eq!(dict.distance_to_id(&candidate, 0, true).unwrap(), 8);
    assert_eq!(dict.identify(&candidate, 1.0).unwrap(), None);
}

#[test]
fn ids_are_dense_and_zero_based() {
    let dict = generate_seeded(40, 4, None, 7).unwrap();
    let ids: Vec<u32> = dict.words().iter().map(|w| w.id).collect();
    assert_eq!(ids, (0..40).collect::<Vec<u32>>());
}

#[test]
fn generated_separation_clears_the_budget() {
    let dict = generate_seeded(30, 4, None, 314).unwrap();
    let floor = 2 * dict.max_correction_bits() + 1;
    for a in 0..dict.len() as u32 {
        for b in a..dict.len() as u32 {
            for rotation in 0u8..4 {
                if a == b && rotation == 0 {
                    continue;
                }
                let g = dict.grid(b, rotation).unwrap();
                let d = dict.distance_to_id(&g, a, false).unwrap();
                assert!(
                    d >= floor,
                    "words {a} and {b} at rotation {rotation} are {d} < {floor} apart"
                );
            }
        }
    }
}

#[test]
fn predefined_4x4_50_is_bit_identical_across_builds() {
    let first = generate_seeded(50, 4, None, 77).unwrap();
    let second = generate_seeded(50, 4, None, 77).unwrap();
    assert_eq!(first.to_bytes(), second.to_bytes());

    let a = PredefinedDictionary::Dict4x4_50.get();
    let b = PredefinedDictionary::Dict4x4_50.get();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.to_bytes(), b.to_bytes());
}

#[test]
fn distance_to_self_scenarios() {
    let dict = generate_seeded(10, 5, None, 55).unwrap();
    let g = dict.grid(6, 0).unwrap();
    assert_eq!(dict.distance_to_id(&g, 6, false).unwrap(), 0);
    assert_eq!(dict.distance_to_id(&g, 6, true).unwrap(), 0);

    // A rotated copy only reaches distance 0 through the all-rotations path.
    let rotated = dict.grid(6, 1).unwrap();
    assert_eq!(dict.distance_to_id(&rotated, 6, true).unwrap(), 0);
    assert!(dict.distance_to_id(&rotated, 6, false).unwrap() > 0);
}

#[test]
fn render_scenario_outer_ring_is_black() {
    let dict = generate_seeded(10, 5, None, 123).unwrap();
    let side = (5 + 2) * 10;
    let img = dict.render(3, side, 1).unwrap();
    assert_eq!((img.width, img.height), (side, side));
    for y in 0..side {
        for x in 0..side {
            let in_border = x < 10 || y < 10 || x >= side - 10 || y >= side - 10;
            if in_border {
                assert_eq!(img.data[y * side + x], 0, "pixel ({x},{y}) must be black");
            }
        }
    }
}

#[test]
fn raw_byte_construction_round_trips() {
    let dict = generate_seeded(12, 6, None, 9).unwrap();
    let rebuilt = Dictionary::from_bytes(
        &dict.to_bytes(),
        dict.marker_size(),
        dict.len(),
        dict.max_correction_bits(),
    )
    .unwrap();
    assert_eq!(dict, rebuilt);

    assert!(matches!(
        Dictionary::from_bytes(&dict.to_bytes()[1..], 6, 12, 1),
        Err(DictionaryError::MalformedCodebook { .. })
    ));
}

#[test]
fn dictionary_survives_json_persistence() {
    let dict = generate_seeded(8, 4, None, 21).unwrap();
    let json = serde_json::to_string(&dict).unwrap();
    let back: Dictionary = serde_json::from_str(&json).unwrap();

    let observed = back.grid(2, 3).unwrap();
    let m = back.identify(&observed, 0.0).unwrap().expect("match");
    assert_eq!((m.id, m.rotation), (2, 3));
}
