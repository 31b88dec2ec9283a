use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("requested {requested} bytes but only {available} are available")]
    InvalidArgument { requested: usize, available: usize },
    #[error("hasher has already been finalized")]
    AlreadyFinalized,
    #[error("hex input has invalid length {0}")]
    InvalidHexLength(usize),
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidHexCharacter { character: char, index: usize },
    #[error("unknown algorithm `{0}` (expected sha0 or sha1)")]
    UnknownAlgorithm(String),
}
