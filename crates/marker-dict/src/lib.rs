//! Rotation-invariant binary codebooks for square fiducial markers.
//!
//! This crate is the identification core of a fiducial-marker pipeline:
//! given a rectified `n × n` grid of binary samples, it decides whether the
//! grid encodes a known marker, which id, and at which of the four 90°
//! rotations it was observed, tolerating a bounded number of bit errors.
//!
//! It focuses on:
//! - packing bit grids into rotation-aware byte codes ([`pack_rotations`]),
//! - immutable marker dictionaries with by-id distance queries ([`Dictionary`]),
//! - exhaustive rotation-invariant identification ([`Dictionary::identify`]),
//! - randomized dictionary generation with separation guarantees ([`generate`]),
//! - lazily built predefined dictionaries ([`PredefinedDictionary`]).
//!
//! It does **not** perform quad detection, perspective sampling or pose
//! estimation. Upstream code hands it a clean [`BitGrid`]; downstream code
//! consumes the returned [`Match`] or a rendered [`GrayImage`].

mod builtins;
mod codec;
mod dictionary;
mod error;
mod generator;
mod grid;
mod matcher;
mod render;

pub use builtins::PredefinedDictionary;
pub use codec::{bytes_per_rotation, pack, pack_rotations, unpack};
pub use dictionary::{CodeWord, Dictionary};
pub use error::{DictionaryError, Result};
pub use generator::{generate, generate_seeded, generate_with_rng, GeneratorConfig};
pub use grid::BitGrid;
pub use matcher::Match;
pub use render::GrayImage;
