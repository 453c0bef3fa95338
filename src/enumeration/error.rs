use thiserror::Error;

/// A hero/board pair that cannot describe a real deal.
///
/// Raised before anything is enumerated. Masks are never cleaned up to
/// make them fit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("mask {mask:#x} has cards beyond position 51")]
    OutOfRange { mask: u64 },
    #[error("hero holds {cards} cards, expected 2")]
    HeroSize { cards: usize },
    #[error("board holds {cards} cards, expected at most 5")]
    BoardSize { cards: usize },
    #[error("hero and board share cards {mask:#x}")]
    Overlap { mask: u64 },
}

/// Everything that can stop a strength query.
///
/// Oracle failures are carried through untouched.
#[derive(Debug, Error, PartialEq)]
pub enum StrengthError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{free} free cards cannot form an opponent holding")]
    Degenerate { free: usize },
    #[error("no boards to summarize")]
    NoBoards,
    #[error(transparent)]
    Oracle(E),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tie policy {0:?}, expected one of strict, loose, half")]
pub struct PolicyError(pub String);
