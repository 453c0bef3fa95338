use super::error::StrengthError;
use super::oracle::Oracle;
use super::policy::TiePolicy;
use super::query::Query;
use super::tally::Tally;
use crate::Probability;
use crate::cards::hand::Hand;
use crate::config::Config;

/// Exhaustive hand strength against every opponent holding.
///
/// The hero's hand is ranked once. Every pair of unseen cards is then
/// added to the board, ranked by the same oracle, and compared against
/// the hero. The [`Tally`] of those comparisons, scored under a
/// [`TiePolicy`], is the hero's strength percentile.
pub struct Enumerator<'a, O> {
    oracle: &'a O,
    policy: TiePolicy,
    parallel: bool,
}

impl<'a, O> Enumerator<'a, O>
where
    O: Oracle,
{
    /// Ties count for the hero unless another policy is chosen.
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            policy: TiePolicy::Loose,
            parallel: false,
        }
    }
    pub fn configured(oracle: &'a O, config: &Config) -> Self {
        Self::new(oracle)
            .with_policy(config.policy)
            .with_parallel(config.parallel)
    }
    pub fn with_policy(self, policy: TiePolicy) -> Self {
        Self { policy, ..self }
    }
    /// split candidate sweeps and board lists across the rayon pool.
    /// has no effect without the `parallel` feature.
    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }
    pub fn policy(&self) -> TiePolicy {
        self.policy
    }
    pub fn oracle(&self) -> &O {
        self.oracle
    }

    /// Strength percentile of `hero` given `board`, both raw card masks.
    pub fn strength(&self, hero: u64, board: u64) -> Result<Probability, StrengthError<O::Error>> {
        let query = Query::try_from((hero, board))?;
        self.score(&query)
    }

    /// Raw win/tie/loss counts of `hero` given `board`.
    pub fn tally(&self, hero: u64, board: u64) -> Result<Tally, StrengthError<O::Error>> {
        let query = Query::try_from((hero, board))?;
        self.sweep(&query)
    }

    /// Same counts as [`Enumerator::tally`], with the candidate sweep split
    /// across rayon workers whatever [`Enumerator::with_parallel`] says.
    #[cfg(feature = "parallel")]
    pub fn tally_par(&self, hero: u64, board: u64) -> Result<Tally, StrengthError<O::Error>> {
        let query = Query::try_from((hero, board))?;
        Self {
            parallel: true,
            ..*self
        }
        .sweep(&query)
    }

    /// Strength percentile of an already validated query.
    pub fn score(&self, query: &Query) -> Result<Probability, StrengthError<O::Error>> {
        let tally = self.sweep(query)?;
        tally
            .score(self.policy)
            .ok_or(StrengthError::Degenerate { free: query.free() })
    }

    /// Every candidate opponent hand of a query, lazily.
    pub fn candidates(&self, query: &Query) -> impl ExactSizeIterator<Item = Hand> + use<O> {
        query.candidates()
    }

    /// One percentile per board for a fixed hero.
    ///
    /// Boards are independent queries, so with the `parallel` feature they
    /// are spread across the rayon pool. Results keep the order of `boards`.
    pub fn percentiles(
        &self,
        hero: u64,
        boards: &[u64],
    ) -> Result<Vec<Probability>, StrengthError<O::Error>> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            use rayon::prelude::*;
            return boards
                .par_iter()
                .map(|board| self.strength(hero, *board))
                .collect();
        }
        boards
            .iter()
            .map(|board| self.strength(hero, *board))
            .collect()
    }

    /// Median percentile of a fixed hero over many boards.
    ///
    /// Summarizes how a holding fares across a family of boards, e.g. every
    /// board that leaves it one card short of a flush.
    pub fn median(
        &self,
        hero: u64,
        boards: &[u64],
    ) -> Result<Probability, StrengthError<O::Error>> {
        let mut percentiles = self.percentiles(hero, boards)?;
        percentiles.sort_by(|a, b| a.total_cmp(b));
        let n = percentiles.len();
        match n {
            0 => Err(StrengthError::NoBoards),
            n if n % 2 == 1 => Ok(percentiles[n / 2]),
            n => Ok((percentiles[n / 2 - 1] + percentiles[n / 2]) / 2.),
        }
    }

    fn sweep(&self, query: &Query) -> Result<Tally, StrengthError<O::Error>> {
        let free = query.free();
        if free < 2 {
            return Err(StrengthError::Degenerate { free });
        }
        let ref hero = self
            .oracle
            .rank(query.hand())
            .map_err(StrengthError::Oracle)?;
        log::trace!("reserved {:?}", query.reserved().slots());
        let tally = self.versus(query, hero).map_err(StrengthError::Oracle)?;
        log::debug!(
            "{} against {} holdings: {} ({}, parallel {})",
            query,
            tally.total(),
            tally,
            self.policy,
            self.parallel
        );
        Ok(tally)
    }

    fn versus(&self, query: &Query, hero: &O::Rank) -> Result<Tally, O::Error> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            use rayon::prelude::*;
            return query
                .candidates()
                .collect::<Vec<Hand>>()
                .into_par_iter()
                .map(|opponent| self.oracle.rank(opponent))
                .map(|opponent| opponent.map(|rank| Tally::from(hero.cmp(&rank))))
                .try_reduce(Tally::default, |a, b| Ok(a + b));
        }
        query
            .candidates()
            .map(|opponent| self.oracle.rank(opponent))
            .map(|opponent| opponent.map(|rank| Tally::from(hero.cmp(&rank))))
            .sum()
    }
}

/// Strength percentile of `hero` given `board` under `policy`, ranked by `oracle`.
///
/// `hero` must hold exactly two cards and `board` at most five, with no
/// card in both and nothing past the 52nd position. The result is the share
/// of all C(n, 2) opponent holdings the hero beats, n being the number of
/// unseen cards, with ties credited per `policy`.
pub fn strength<O>(
    hero: u64,
    board: u64,
    policy: TiePolicy,
    oracle: &O,
) -> Result<Probability, StrengthError<O::Error>>
where
    O: Oracle,
{
    Enumerator::new(oracle)
        .with_policy(policy)
        .strength(hero, board)
}
