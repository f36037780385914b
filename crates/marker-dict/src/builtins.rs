//! Predefined dictionaries.
//!
//! A closed set of named configurations (grid size × word count), each
//! materialized at most once per process through the seeded generation path
//! and cached for the process lifetime. The seed is part of the
//! configuration, so building the same name twice — even in different
//! processes — yields bit-identical codeword tables.

use std::sync::OnceLock;

use log::info;
use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::generator;

/// The standard dictionary configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum PredefinedDictionary {
    Dict4x4_50,
    Dict4x4_100,
    Dict4x4_250,
    Dict4x4_1000,
    Dict5x5_50,
    Dict5x5_100,
    Dict5x5_250,
    Dict5x5_1000,
    Dict6x6_50,
    Dict6x6_100,
    Dict6x6_250,
    Dict6x6_1000,
    Dict7x7_50,
    Dict7x7_100,
    Dict7x7_250,
    Dict7x7_1000,
}

impl PredefinedDictionary {
    /// Every predefined configuration, in declaration order.
    pub const ALL: [PredefinedDictionary; 16] = [
        Self::Dict4x4_50,
        Self::Dict4x4_100,
        Self::Dict4x4_250,
        Self::Dict4x4_1000,
        Self::Dict5x5_50,
        Self::Dict5x5_100,
        Self::Dict5x5_250,
        Self::Dict5x5_1000,
        Self::Dict6x6_50,
        Self::Dict6x6_100,
        Self::Dict6x6_250,
        Self::Dict6x6_1000,
        Self::Dict7x7_50,
        Self::Dict7x7_100,
        Self::Dict7x7_250,
        Self::Dict7x7_1000,
    ];

    /// Bits per marker side.
    pub fn marker_size(self) -> usize {
        match self {
            Self::Dict4x4_50 | Self::Dict4x4_100 | Self::Dict4x4_250 | Self::Dict4x4_1000 => 4,
            Self::Dict5x5_50 | Self::Dict5x5_100 | Self::Dict5x5_250 | Self::Dict5x5_1000 => 5,
            Self::Dict6x6_50 | Self::Dict6x6_100 | Self::Dict6x6_250 | Self::Dict6x6_1000 => 6,
            Self::Dict7x7_50 | Self::Dict7x7_100 | Self::Dict7x7_250 | Self::Dict7x7_1000 => 7,
        }
    }

    /// Number of codewords.
    pub fn word_count(self) -> usize {
        match self {
            Self::Dict4x4_50 | Self::Dict5x5_50 | Self::Dict6x6_50 | Self::Dict7x7_50 => 50,
            Self::Dict4x4_100 | Self::Dict5x5_100 | Self::Dict6x6_100 | Self::Dict7x7_100 => 100,
            Self::Dict4x4_250 | Self::Dict5x5_250 | Self::Dict6x6_250 | Self::Dict7x7_250 => 250,
            Self::Dict4x4_1000 | Self::Dict5x5_1000 | Self::Dict6x6_1000 | Self::Dict7x7_1000 => {
                1000
            }
        }
    }

    /// Conventional name, e.g. `DICT_4X4_50`.
    pub fn name(self) -> &'static str {
        const NAMES: [&str; 16] = [
            "DICT_4X4_50",
            "DICT_4X4_100",
            "DICT_4X4_250",
            "DICT_4X4_1000",
            "DICT_5X5_50",
            "DICT_5X5_100",
            "DICT_5X5_250",
            "DICT_5X5_1000",
            "DICT_6X6_50",
            "DICT_6X6_100",
            "DICT_6X6_250",
            "DICT_6X6_1000",
            "DICT_7X7_50",
            "DICT_7X7_100",
            "DICT_7X7_250",
            "DICT_7X7_1000",
        ];
        NAMES[self.index()]
    }

    /// Look a configuration up by its conventional name.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }

    fn seed(self) -> u64 {
        0x6d61_726b_6572_0000 | self.index() as u64
    }

    /// The dictionary for this configuration, built on first use and shared
    /// for the remainder of the process.
    pub fn get(self) -> &'static Dictionary {
        static CACHE: [OnceLock<Dictionary>; 16] = [const { OnceLock::new() }; 16];
        CACHE[self.index()].get_or_init(|| {
            info!("building predefined dictionary {}", self.name());
            generator::generate_seeded(self.word_count(), self.marker_size(), None, self.seed())
                .expect("predefined configurations are generatable")
        })
    }
}
