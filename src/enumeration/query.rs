use super::bits;
use super::cursor::Cursor;
use super::error::InputError;
use super::slots::Reserved;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;

/// A hero's two hole cards and the known board.
///
/// Only constructed through validation, so every Query describes a real
/// deal: two hero cards, at most five board cards, no card in both, and
/// nothing outside the 52-card deck.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, PartialOrd, Ord)]
pub struct Query {
    hero: Hand,
    board: Hand,
}

impl Query {
    pub fn hero(&self) -> Hand {
        self.hero
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    /// every known card, i.e. the hero's actual hand
    pub fn hand(&self) -> Hand {
        Hand::add(self.hero, self.board)
    }
    pub fn reserved(&self) -> Reserved {
        Reserved::from((self.hero, self.board))
    }
    /// number of cards an opponent could still hold
    pub fn free(&self) -> usize {
        52 - self.hero.size() - self.board.size()
    }
    /// Every possible opponent holding, as the board plus two unseen cards,
    /// in increasing order of the compact free-slot encoding.
    pub fn candidates(&self) -> impl ExactSizeIterator<Item = Hand> + Send + use<> {
        let reserved = self.reserved();
        Cursor::new(2, reserved.free()).map(move |compact| Hand::from(reserved.expand(compact)))
    }
}

impl TryFrom<(u64, u64)> for Query {
    type Error = InputError;
    fn try_from((hero, board): (u64, u64)) -> Result<Self, Self::Error> {
        if let Some(mask) = [hero, board].into_iter().find(|m| m & !Hand::mask() != 0) {
            return Err(InputError::OutOfRange { mask });
        }
        match (bits::count(hero) as usize, bits::count(board) as usize) {
            (cards, _) if cards != 2 => Err(InputError::HeroSize { cards }),
            (_, cards) if cards > 5 => Err(InputError::BoardSize { cards }),
            _ if hero & board != 0 => Err(InputError::Overlap { mask: hero & board }),
            _ => Ok(Self {
                hero: Hand::from(hero),
                board: Hand::from(board),
            }),
        }
    }
}

impl TryFrom<(Hand, Hand)> for Query {
    type Error = InputError;
    fn try_from((hero, board): (Hand, Hand)) -> Result<Self, Self::Error> {
        Self::try_from((u64::from(hero), u64::from(board)))
    }
}

/// "AsKs ~ 2c7dTh" style: hero, then board after the tilde.
/// the board may be empty.
impl TryFrom<&str> for Query {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (hero, board) = s.split_once('~').unwrap_or((s, ""));
        let hero = Hand::try_from(hero)?;
        let board = Hand::try_from(board)?;
        Ok(Self::try_from((hero, board))?)
    }
}

/// a random deal with a board of any legal size
impl crate::Arbitrary for Query {
    fn random() -> Self {
        let ref mut deck = Deck::new();
        let hero = deck.deal(2);
        let board = deck.deal(rand::random_range(0..=5));
        Self { hero, board }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.hero, self.board)
    }
}
