use thiserror::Error;

/// Failures while reading cards from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid rank: {0:?}")]
    Rank(String),
    #[error("invalid suit: {0:?}")]
    Suit(String),
    #[error("cards are two characters, got {0:?}")]
    Length(String),
    #[error("duplicate card: {0}")]
    Duplicate(String),
}

/// Failures of the built-in high hand evaluator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("cannot evaluate a hand with no cards")]
    Empty,
}
