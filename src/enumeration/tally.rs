use super::policy::TiePolicy;
use crate::Probability;
use serde::Serialize;
use std::cmp::Ordering;
use std::ops::Add;

/// Showdown outcomes of the hero against every candidate holding.
///
/// Counts are integers so that any split of the candidates across
/// workers sums back to the same Tally; policies only apply at the end.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub struct Tally {
    wins: u64,
    ties: u64,
    losses: u64,
}

impl Tally {
    pub fn wins(&self) -> u64 {
        self.wins
    }
    pub fn ties(&self) -> u64 {
        self.ties
    }
    pub fn losses(&self) -> u64 {
        self.losses
    }
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }
    pub fn credit(&self, policy: TiePolicy) -> f64 {
        self.wins as f64 * policy.credit(Ordering::Greater)
            + self.ties as f64 * policy.credit(Ordering::Equal)
            + self.losses as f64 * policy.credit(Ordering::Less)
    }
    /// fraction of candidates credited to the hero, if there were any
    pub fn score(&self, policy: TiePolicy) -> Option<Probability> {
        match self.total() {
            0 => None,
            n => Some(self.credit(policy) / n as f64),
        }
    }
}

/// the hero's side of one comparison
impl From<Ordering> for Tally {
    fn from(hero: Ordering) -> Self {
        let (wins, ties, losses) = match hero {
            Ordering::Greater => (1, 0, 0),
            Ordering::Equal => (0, 1, 0),
            Ordering::Less => (0, 0, 1),
        };
        Self { wins, ties, losses }
    }
}

impl Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::add)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}W {}T {}L", self.wins, self.ties, self.losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(wins: u64, ties: u64, losses: u64) -> Tally {
        Tally { wins, ties, losses }
    }

    #[test]
    fn empty_has_no_score() {
        assert_eq!(Tally::default().score(TiePolicy::HalfCredit), None);
    }

    #[test]
    fn policies_only_differ_on_ties() {
        let t = tally(6, 2, 2);
        assert_eq!(t.score(TiePolicy::Strict), Some(0.6));
        assert_eq!(t.score(TiePolicy::Loose), Some(0.8));
        assert_eq!(t.score(TiePolicy::HalfCredit), Some(0.7));
    }

    #[test]
    fn sums_any_split() {
        let outcomes = [
            Ordering::Greater,
            Ordering::Equal,
            Ordering::Less,
            Ordering::Greater,
        ];
        let sum = |o: &[Ordering]| o.iter().copied().map(Tally::from).sum::<Tally>();
        assert_eq!(sum(&outcomes), sum(&outcomes[..1]) + sum(&outcomes[1..]));
        assert_eq!(sum(&outcomes), tally(2, 1, 1));
    }

    #[test]
    fn credit_is_per_outcome() {
        let outcomes = [Ordering::Greater, Ordering::Equal, Ordering::Equal];
        for policy in TiePolicy::all() {
            let each = outcomes.iter().map(|o| policy.credit(*o)).sum::<f64>();
            let tally = outcomes.iter().copied().map(Tally::from).sum::<Tally>();
            assert_eq!(tally.credit(policy), each);
        }
    }

    #[test]
    fn serializes_counts() {
        let json = serde_json::to_string(&tally(3, 1, 0)).unwrap();
        assert_eq!(json, r#"{"wins":3,"ties":1,"losses":0}"#);
    }
}
