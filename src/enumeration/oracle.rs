use crate::cards::hand::Hand;
use std::convert::Infallible;

/// Anything that can rank a set of cards.
///
/// Ranks only have to be totally ordered, with greater meaning stronger,
/// and consistent for the lifetime of a query. The enumerator never looks
/// inside them. Implementations must be pure: the same hand always gets
/// the same rank.
///
/// Any `Fn(Hand) -> R` with an ordered `R` is an oracle that cannot fail.
pub trait Oracle: Sync {
    type Rank: Ord + Send + Sync;
    type Error: std::error::Error + Send + Sync + 'static;

    fn rank(&self, hand: Hand) -> Result<Self::Rank, Self::Error>;

    /// Rank many hands, in order, stopping at the first failure.
    fn ranks(&self, hands: &[Hand]) -> Result<Vec<Self::Rank>, Self::Error> {
        hands.iter().map(|hand| self.rank(*hand)).collect()
    }
}

impl<F, R> Oracle for F
where
    F: Fn(Hand) -> R + Sync,
    R: Ord + Send + Sync,
{
    type Rank = R;
    type Error = Infallible;
    fn rank(&self, hand: Hand) -> Result<Self::Rank, Self::Error> {
        Ok(self(hand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_rank_hands() {
        let size = |hand: Hand| hand.size();
        let hands = [Hand::from(0b1), Hand::from(0b111), Hand::from(0b11)];
        assert_eq!(size.ranks(&hands), Ok(vec![1, 3, 2]));
    }
}
