use super::error::EvaluationError;
use super::hand::Hand;
use super::strength::Strength;
use crate::enumeration::oracle::Oracle;

/// The built-in oracle: best five-card poker hand among the given cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HighHand;

impl Oracle for HighHand {
    type Rank = Strength;
    type Error = EvaluationError;
    fn rank(&self, hand: Hand) -> Result<Self::Rank, Self::Error> {
        Strength::try_from(hand)
    }
}
