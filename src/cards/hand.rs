use super::card::Card;
use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;
use crate::enumeration::bits;

/// Hand represents an unordered set of Cards.
///
/// Stored as a u64, but only the 52 LSBs are meaningful. Each bit represents
/// a unique card in the (unordered) set, at the position given by
/// `u8::from(Card)`. A single word for the full Hand means no heap allocation
/// and set operations are plain bitwise arithmetic.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
    /// union of two disjoint hands
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        bits::count(self.0) as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// 13-bit rank mask of the cards held in one suit
    pub fn of(&self, suit: &Suit) -> u16 {
        ((self.0 >> suit.offset()) & Rank::mask() as u64) as u16
    }
    /// 13-bit rank mask of every rank held in any suit
    pub fn ranks(&self) -> u16 {
        Suit::all()
            .iter()
            .map(|suit| self.of(suit))
            .fold(0u16, |acc, ranks| acc | ranks)
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            n => {
                let card = Card::from(n.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
///
/// callers are responsible for keeping bits >= 52 clear;
/// raw masks from outside the crate are validated before they get here.
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        debug_assert!(n & !Self::mask() == 0);
        Self(n)
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000110000000000000000000000000000000000001000000001
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}

/// str parsing. unlike Vec<Card>, text can name the same card twice,
/// which is rejected rather than collapsed.
impl TryFrom<&str> for Hand {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s)?
            .into_iter()
            .try_fold(Self::empty(), |hand, card| match hand.contains(&card) {
                true => Err(CardError::Duplicate(card.to_string())),
                false => Ok(Self::add(hand, Self::from(card))),
            })
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self(rand::random::<u64>() & Self::mask())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
