use super::card::Card;
use super::hand::Hand;

/// A mutable deck of cards supporting random draws.
///
/// Wraps a [`Hand`] of the remaining cards. Used to deal random, valid
/// hero and board hands for tests and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// draws and removes a uniformly random card
    pub fn draw(&mut self) -> Option<Card> {
        let n = self.0.size();
        if n == 0 {
            return None;
        }
        let i = rand::random_range(0..n);
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck = deck & (deck - 1);
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        Some(card)
    }
    /// draws n cards as one hand, or as many as remain
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n)
            .filter_map(|_| self.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
/// a deck with some cards already removed
impl From<Hand> for Deck {
    fn from(dealt: Hand) -> Self {
        Self(dealt.complement())
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}
