use super::error::EvaluationError;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// A lazy evaluator for a hand's strength.
///
/// Works directly on the suit-major mask: each suit is a 13-bit rank
/// block, so straights, flushes and n-of-a-kind all reduce to bitwise
/// operations on at most four u16s. Any number of cards from 1 to 52 is
/// accepted; the best five-card hand is what gets ranked.
pub struct Evaluator(Hand);

impl TryFrom<Hand> for Evaluator {
    type Error = EvaluationError;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            0 => Err(EvaluationError::Empty),
            _ => Ok(Self(hand)),
        }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => {
                let pool = match ranking {
                    Ranking::Flush(_) => self
                        .find_suit_of_flush()
                        .map(|suit| self.0.of(&suit))
                        .unwrap_or_default(),
                    _ => self.0.ranks(),
                };
                let mut ranks = pool & ranking.mask();
                while ranks.count_ones() as usize > n {
                    ranks &= ranks - 1;
                }
                Kickers::from(ranks)
            }
        }
    }

    fn find_1_oak(&self) -> Ranking {
        Ranking::HighCard(Rank::from(self.0.ranks()))
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(self.0.ranks()).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| Ranking::Flush(Rank::from(self.0.of(&suit))))
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| Self::find_rank_of_straight(self.0.of(&suit)))
            .map(Ranking::StraightFlush)
    }

    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).count_ones() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.count(*rank) >= n)
    }
    fn count(&self, rank: Rank) -> usize {
        let bit = u16::from(rank);
        Suit::all()
            .iter()
            .filter(|suit| self.0.of(suit) & bit != 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(cards: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::try_from(Hand::try_from(cards).unwrap()).unwrap();
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        (ranking, kickers)
    }

    #[test]
    fn empty_hand() {
        assert!(matches!(
            Evaluator::try_from(Hand::empty()),
            Err(EvaluationError::Empty)
        ));
    }

    #[test]
    fn high_card() {
        let (ranking, kickers) = evaluate("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine])
        );
    }

    #[test]
    fn one_pair() {
        let (ranking, kickers) = evaluate("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack])
        );
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = evaluate("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = evaluate("As Ah Ad Kc Qs");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = evaluate("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::default());
    }

    #[test]
    fn flush_keeps_suited_kickers() {
        let (ranking, kickers) = evaluate("As Ks Qs Js 9s 8s Th");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine])
        );
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = evaluate("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::default());
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = evaluate("As Ah Ad Ac Ks");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, _) = evaluate("Ts Js Qs Ks As");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn wheel_straight() {
        let (ranking, _) = evaluate("As 2h 3d 4c 5s");
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = evaluate("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn seven_card_hand() {
        let (ranking, kickers) = evaluate("As Ah Kd Kc Qs Jh 9d");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, _) = evaluate("4h 6h 7h 8h 9h Ts");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, _) = evaluate("Kh Ah Ad As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn straight_flush_over_four_oak() {
        let (ranking, _) = evaluate("Ts Js Qs Ks As Ah Ad Ac");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn three_pair() {
        let (ranking, kickers) = evaluate("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_three_oak() {
        let (ranking, _) = evaluate("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn two_card_hands() {
        assert_eq!(evaluate("As Ad").0, Ranking::OnePair(Rank::Ace));
        assert_eq!(evaluate("As Kd").1, Kickers::from(vec![Rank::King]));
    }
}
