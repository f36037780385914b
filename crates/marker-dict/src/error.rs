//! Error taxonomy shared by the whole crate.
//!
//! A failed identification is *not* an error: [`crate::Dictionary::identify`]
//! returns `Ok(None)` when no codeword is close enough. The variants below are
//! hard contract violations and propagate to the caller unretried.

/// Errors returned by dictionary construction, lookup and generation.
#[derive(thiserror::Error, Debug)]
pub enum DictionaryError {
    /// A bit grid has the wrong side length for the operation.
    #[error("invalid grid dimension {got} (expected {expected})")]
    InvalidDimension { expected: usize, got: usize },
    /// A raw codeword buffer does not match the declared geometry.
    #[error("malformed codebook buffer: {got} bytes, expected {expected}")]
    MalformedCodebook { expected: usize, got: usize },
    /// A marker id outside `[0, len)`.
    #[error("marker id {id} out of range (dictionary holds {len} words)")]
    IdOutOfRange { id: u32, len: usize },
    /// A parameter outside its documented domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The generator could not reach the requested separation within its
    /// trial budget.
    #[error("dictionary generation exhausted after {trials} trials (best separation {best})")]
    GenerationExhausted { trials: usize, best: u32 },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DictionaryError>;
